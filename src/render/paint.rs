//! Gradient rasterization.
//!
//! Gradients are evaluated once per paint and raster size into a premultiplied image, which
//! the backend then uses as an image paint clipped by the shape.

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::{GradientStop, Paint};

/// Largest gradient raster edge; bigger boxes are sampled at this size and stretched.
pub const MAX_GRADIENT_DIM: u32 = 2048;

/// Cache key of a rasterized gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientKey {
    /// Hash of the paint.
    pub paint: u64,
    /// Raster width.
    pub width: u32,
    /// Raster height.
    pub height: u32,
}

impl GradientKey {
    /// Key for `paint` rasterized at `width x height`.
    pub fn new(paint: &Paint, width: u32, height: u32) -> Self {
        let mut h = Xxh3::new();
        let mut f = |v: f64| h.update(&v.to_bits().to_le_bytes());
        let stops = match paint {
            Paint::Solid(c) => {
                f(0.0);
                f(c.r);
                f(c.g);
                f(c.b);
                f(c.a);
                &[][..]
            }
            Paint::Linear { angle_deg, stops } => {
                f(1.0);
                f(*angle_deg);
                stops.as_slice()
            }
            Paint::Radial { center, stops } => {
                f(2.0);
                f(center.x);
                f(center.y);
                stops.as_slice()
            }
        };
        for s in stops {
            f(s.offset);
            f(s.color.r);
            f(s.color.g);
            f(s.color.b);
            f(s.color.a);
        }
        Self {
            paint: h.digest(),
            width,
            height,
        }
    }
}

/// Premultiplied color at `t` along `stops`, as floats in `[0, 1]`.
///
/// Interpolation happens in premultiplied space so transparent stops do not darken their
/// neighbours.
pub fn sample_stops(stops: &[GradientStop], t: f64) -> [f64; 4] {
    let premul = |s: &GradientStop| {
        let a = s.color.a.clamp(0.0, 1.0);
        [
            s.color.r.clamp(0.0, 1.0) * a,
            s.color.g.clamp(0.0, 1.0) * a,
            s.color.b.clamp(0.0, 1.0) * a,
            a,
        ]
    };
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    if t <= first.offset {
        return premul(first);
    }
    if t >= last.offset {
        return premul(last);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            let k = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            let (pa, pb) = (premul(a), premul(b));
            return std::array::from_fn(|i| pa[i] + (pb[i] - pa[i]) * k);
        }
    }
    premul(last)
}

/// Gradient position of the pixel center `(x, y)` in a `w x h` box.
///
/// Linear gradients follow CSS angle semantics: the gradient line passes through the box
/// center and is long enough that the corners land on offsets 0 and 1. Radial gradients use
/// the farthest-corner ellipse.
pub fn gradient_position(paint: &Paint, x: f64, y: f64, w: f64, h: f64) -> f64 {
    match paint {
        Paint::Solid(_) => 0.0,
        Paint::Linear { angle_deg, .. } => {
            let th = angle_deg.to_radians();
            let (dx, dy) = (th.sin(), -th.cos());
            let len = (w * dx).abs() + (h * dy).abs();
            if len <= 0.0 {
                return 0.0;
            }
            ((x - w * 0.5) * dx + (y - h * 0.5) * dy) / len + 0.5
        }
        Paint::Radial { center, .. } => {
            let (cx, cy) = (center.x * w, center.y * h);
            let rx = center.x.max(1.0 - center.x) * w * std::f64::consts::SQRT_2;
            let ry = center.y.max(1.0 - center.y) * h * std::f64::consts::SQRT_2;
            if rx <= 0.0 || ry <= 0.0 {
                return 1.0;
            }
            (((x - cx) / rx).powi(2) + ((y - cy) / ry).powi(2)).sqrt()
        }
    }
}

/// Rasterize `paint` over a `width x height` box into premultiplied RGBA8.
pub fn gradient_premul_rgba8(paint: &Paint, width: u32, height: u32) -> ReelResult<Vec<u8>> {
    if width == 0 || height == 0 || width > MAX_GRADIENT_DIM || height > MAX_GRADIENT_DIM {
        return Err(ReelError::render(format!(
            "gradient raster size {width}x{height} is out of range"
        )));
    }
    let stops: &[GradientStop] = match paint {
        Paint::Solid(_) => {
            return Err(ReelError::render("solid paint has no gradient raster"));
        }
        Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => stops,
    };

    let (w, h) = (f64::from(width), f64::from(height));
    let mut out = vec![0u8; width as usize * height as usize * 4];
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        let x = (i % width as usize) as f64 + 0.5;
        let y = (i / width as usize) as f64 + 0.5;
        let c = sample_stops(stops, gradient_position(paint, x, y, w, h));
        for (dst, v) in px.iter_mut().zip(c) {
            *dst = (v * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
