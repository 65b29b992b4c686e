//! Rasterization of inline SVG icons.

use crate::foundation::color::Color;
use crate::foundation::core::Affine;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::icons::IconId;

/// Largest raster edge accepted for a single icon.
const MAX_DIM: u32 = 16_384;

/// Cache key of a rasterized icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconRasterKey {
    /// Which icon.
    pub icon: IconId,
    /// Straight RGBA8 stroke color.
    pub rgba: [u8; 4],
    /// Raster width.
    pub width: u32,
    /// Raster height.
    pub height: u32,
}

/// Parse the markup of `icon` drawn in `color`.
pub fn icon_tree(icon: IconId, color: Color) -> ReelResult<usvg::Tree> {
    usvg::Tree::from_str(&icon.svg_markup(color), &usvg::Options::default())
        .map_err(|e| ReelError::render(format!("parse svg for icon '{}': {e}", icon.name())))
}

/// Raster size for drawing `tree` under `transform`.
///
/// Returns `(width, height, transform_adjust)`: rasterize into `width x height` pixels, then
/// draw the image with `transform_adjust` so that it lands where the SVG would have.
pub fn svg_raster_params(tree: &usvg::Tree, transform: Affine) -> ReelResult<(u32, u32, Affine)> {
    let size = tree.size();
    let (base_w, base_h) = (f64::from(size.width()), f64::from(size.height()));
    if !(base_w.is_finite() && base_h.is_finite() && base_w > 0.0 && base_h > 0.0) {
        return Err(ReelError::render("svg has invalid width/height"));
    }

    let [a, b, c, d, _e, _f] = transform.as_coeffs();
    let sx = (a * a + b * b).sqrt().max(1e-6);
    let sy = (c * c + d * d).sqrt().max(1e-6);

    let w = (base_w * sx).ceil().max(1.0) as u32;
    let h = (base_h * sy).ceil().max(1.0) as u32;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(ReelError::render(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let inv = Affine::scale_non_uniform(base_w / f64::from(w), base_h / f64::from(h));
    Ok((w, h, transform * inv))
}

/// Render `tree` scaled to `width x height` into premultiplied RGBA8.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> ReelResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ReelError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg_raster.rs"]
mod tests;
