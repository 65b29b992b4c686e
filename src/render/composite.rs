//! Blending of premultiplied RGBA8 buffers.

use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::{mul_div255_u8, smoothstep};
use crate::timeline::transition::Direction;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of `src` scaled by `opacity` onto `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

fn check_lengths(name: &str, dst: &[u8], src: &[u8]) -> ReelResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ReelError::render(format!(
            "{name} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

/// [`over`] for every pixel of two equally sized buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ReelResult<()> {
    check_lengths("over_in_place", dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Geometry of a wipe.
#[derive(Clone, Copy, Debug)]
pub struct WipeParams {
    /// Buffer width in pixels.
    pub width: u32,
    /// Buffer height in pixels.
    pub height: u32,
    /// Revealed fraction in `[0, 1]`.
    pub t: f32,
    /// Edge the revealed region grows from.
    pub dir: Direction,
    /// Soft band width as a fraction of the wipe axis; `0` is a hard edge.
    pub soft_edge: f32,
}

/// Source-over of `src` onto `dst`, limited to the region a wipe has revealed.
pub fn wipe_over_in_place(dst: &mut [u8], src: &[u8], params: WipeParams) -> ReelResult<()> {
    check_lengths("wipe_over_in_place", dst, src)?;
    let (w, h) = (params.width as usize, params.height as usize);
    if dst.len() != w * h * 4 {
        return Err(ReelError::render(
            "wipe_over_in_place buffer does not match width*height",
        ));
    }

    let t = params.t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return Ok(());
    }
    if t >= 1.0 {
        return over_in_place(dst, src, 1.0);
    }

    let horizontal = matches!(params.dir, Direction::FromLeft | Direction::FromRight);
    let axis_len = if horizontal { w } else { h } as f32;
    let soft_px = params.soft_edge.clamp(0.0, 1.0) * axis_len;
    let edge = t * (axis_len + 2.0 * soft_px) - soft_px;

    for y in 0..h {
        for x in 0..w {
            // Distance from the side the wipe starts at, in pixel centers.
            let pos = match params.dir {
                Direction::FromLeft => x as f32,
                Direction::FromRight => (w - 1 - x) as f32,
                Direction::FromTop => y as f32,
                Direction::FromBottom => (h - 1 - y) as f32,
            } + 0.5;
            let m = if soft_px <= 0.0 {
                if pos < edge { 1.0 } else { 0.0 }
            } else {
                1.0 - smoothstep(
                    f64::from(edge - soft_px),
                    f64::from(edge + soft_px),
                    f64::from(pos),
                ) as f32
            };
            if m <= 0.0 {
                continue;
            }
            let i = (y * w + x) * 4;
            let out = over(
                [dst[i], dst[i + 1], dst[i + 2], dst[i + 3]],
                [src[i], src[i + 1], src[i + 2], src[i + 3]],
                m,
            );
            dst[i..i + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Premultiply a straight RGBA8 color.
pub fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> PremulRgba8 {
    let p = |c: u8| mul_div255_u8(u16::from(c), u16::from(a));
    [p(r), p(g), p(b), a]
}

/// Convert premultiplied pixels to straight alpha.
pub fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
