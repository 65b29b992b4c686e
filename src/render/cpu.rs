use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::compile::plan::{
    CompositeOp, CompositePass, RenderPlan, ScenePass, SurfaceDesc, SurfaceId,
};
use crate::eval::evaluator::EvaluatedFrame;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::{FrameRGBA, PassBackend, RenderBackend, RenderSettings};
use crate::render::blur::{blur_rgba8_premul, radius_for_sigma};
use crate::render::composite::{WipeParams, over_in_place, premul_rgba8, wipe_over_in_place};
use crate::render::paint::{GradientKey, MAX_GRADIENT_DIM, gradient_premul_rgba8};
use crate::render::svg_raster::{
    IconRasterKey, icon_tree, rasterize_svg_to_premul_rgba8, svg_raster_params,
};
use crate::render::text::TextEngine;
use crate::scene::icons::IconId;
use crate::scene::model::{GlowNode, IconNode, Node, NodeKind, Paint, Shape, ShapeNode, TextNode};
use crate::text::fonts::FontBook;
use crate::text::layout::layout_units;

/// Flattening tolerance for curves, in local units.
const TOLERANCE: f64 = 0.1;

/// Largest glow raster edge; glows are blurred at reduced resolution and stretched.
const MAX_GLOW_DIM: f64 = 1024.0;

/// Blur sigma (in raster pixels) above which glows are rasterized at reduced resolution.
const GLOW_SIGMA_PX: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GlowKey {
    rgb: [u8; 3],
    size: u32,
    radius_q: u32,
    sigma_q: u32,
}

/// `vello_cpu` implementation of [`RenderBackend`].
pub struct CpuBackend {
    settings: RenderSettings,
    text: TextEngine,
    icon_trees: HashMap<(IconId, [u8; 4]), usvg::Tree>,
    icon_cache: HashMap<IconRasterKey, vello_cpu::Image>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    glow_cache: HashMap<GlowKey, vello_cpu::Image>,
    surfaces: HashMap<SurfaceId, CpuSurface>,
    scratch: Option<vello_cpu::Pixmap>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// Backend drawing text with the faces of `fonts`.
    pub fn new(settings: RenderSettings, fonts: &FontBook) -> Self {
        Self {
            settings,
            text: TextEngine::new(fonts),
            icon_trees: HashMap::new(),
            icon_cache: HashMap::new(),
            gradient_cache: HashMap::new(),
            glow_cache: HashMap::new(),
            surfaces: HashMap::new(),
            scratch: None,
        }
    }

    fn take_scratch(&mut self, width: u16, height: u16) -> vello_cpu::Pixmap {
        match self.scratch.take() {
            Some(mut p) if p.width() == width && p.height() == height => {
                p.data_as_u8_slice_mut().fill(0);
                p
            }
            _ => vello_cpu::Pixmap::new(width, height),
        }
    }
}

impl PassBackend for CpuBackend {
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> ReelResult<()> {
        let width_u16: u16 = desc
            .width
            .try_into()
            .map_err(|_| ReelError::render("surface width exceeds u16"))?;
        let height_u16: u16 = desc
            .height
            .try_into()
            .map_err(|_| ReelError::render("surface height exceeds u16"))?;

        let fresh = || CpuSurface {
            width: width_u16,
            height: height_u16,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
        };
        match self.surfaces.get_mut(&id) {
            Some(surface) if surface.width == width_u16 && surface.height == height_u16 => {}
            Some(surface) => *surface = fresh(),
            None => {
                self.surfaces.insert(id, fresh());
            }
        }

        if id == SurfaceId(0) {
            let premul = self
                .settings
                .clear_rgba
                .map(|[r, g, b, a]| premul_rgba8(r, g, b, a))
                .unwrap_or([0, 0, 0, 0]);
            let s = self
                .surfaces
                .get_mut(&SurfaceId(0))
                .ok_or_else(|| ReelError::render("surface 0 missing"))?;
            clear_pixmap(&mut s.pixmap, premul);
        }
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass, eval: &EvaluatedFrame) -> ReelResult<()> {
        let layer = eval.layers.get(pass.layer).ok_or_else(|| {
            ReelError::render(format!(
                "scene pass references layer {} but the frame has {}",
                pass.layer,
                eval.layers.len()
            ))
        })?;
        let mut surface = self.surfaces.remove(&pass.target).ok_or_else(|| {
            ReelError::render(format!(
                "scene target surface {:?} was not initialized",
                pass.target
            ))
        })?;

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        let drawn = self.draw_node(&mut ctx, &layer.root, pass.transform, 1.0);
        let blended = drawn.and_then(|()| {
            ctx.flush();
            let mut scratch = self.take_scratch(surface.width, surface.height);
            ctx.render_to_pixmap(&mut scratch);
            let res = if pass.clear_to_transparent {
                surface
                    .pixmap
                    .data_as_u8_slice_mut()
                    .copy_from_slice(scratch.data_as_u8_slice());
                Ok(())
            } else {
                over_in_place(
                    surface.pixmap.data_as_u8_slice_mut(),
                    scratch.data_as_u8_slice(),
                    1.0,
                )
            };
            self.scratch = Some(scratch);
            res
        });
        self.surfaces.insert(pass.target, surface);
        blended
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> ReelResult<()> {
        let mut dst = self.surfaces.remove(&pass.target).ok_or_else(|| {
            ReelError::render(format!(
                "composite target surface {:?} was not initialized",
                pass.target
            ))
        })?;

        let result = pass.ops.iter().try_for_each(|op| {
            let src_id = match *op {
                CompositeOp::Over { src, .. } | CompositeOp::Wipe { src, .. } => src,
            };
            let src = self.surfaces.get(&src_id).ok_or_else(|| {
                ReelError::render(format!(
                    "composite src surface {:?} was not initialized",
                    src_id
                ))
            })?;
            match *op {
                CompositeOp::Over { opacity, .. } => over_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    src.pixmap.data_as_u8_slice(),
                    opacity,
                ),
                CompositeOp::Wipe {
                    t, dir, soft_edge, ..
                } => wipe_over_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    src.pixmap.data_as_u8_slice(),
                    WipeParams {
                        width: u32::from(dst.width),
                        height: u32::from(dst.height),
                        t,
                        dir,
                        soft_edge,
                    },
                ),
            }
        });
        self.surfaces.insert(pass.target, dst);
        result
    }

    fn readback_rgba8(&mut self, surface: SurfaceId, plan: &RenderPlan) -> ReelResult<FrameRGBA> {
        let s = self.surfaces.get(&surface).ok_or_else(|| {
            ReelError::render(format!(
                "readback surface {:?} was not initialized",
                surface
            ))
        })?;
        let frame_data = s.pixmap.data_as_u8_slice().to_vec();
        let surface_cap = plan.surfaces.len() as u32;
        self.surfaces.retain(|id, _| id.0 < surface_cap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: frame_data,
            premultiplied: true,
        })
    }
}

impl RenderBackend for CpuBackend {}

impl CpuBackend {
    fn draw_node(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &Node,
        parent: Affine,
        alpha: f64,
    ) -> ReelResult<()> {
        let opacity = node.opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 || alpha <= 0.0 {
            return Ok(());
        }
        let tf = parent * node.transform;

        match &node.kind {
            NodeKind::Group(children) => {
                // Overlapping children must fade as one image, not one by one.
                if opacity < 1.0 && children.len() > 1 {
                    ctx.push_opacity_layer(opacity as f32);
                    let res = children
                        .iter()
                        .try_for_each(|c| self.draw_node(ctx, c, tf, alpha));
                    ctx.pop_layer();
                    res
                } else {
                    children
                        .iter()
                        .try_for_each(|c| self.draw_node(ctx, c, tf, alpha * opacity))
                }
            }
            NodeKind::Shape(s) => self.draw_shape(ctx, s, tf, alpha * opacity),
            NodeKind::Text(t) => self.draw_text(ctx, t, tf, alpha * opacity),
            NodeKind::Icon(i) => self.draw_icon(ctx, i, tf, alpha * opacity),
            NodeKind::Glow(g) => self.draw_glow(ctx, g, tf, alpha * opacity),
        }
    }

    fn draw_shape(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        s: &ShapeNode,
        tf: Affine,
        alpha: f64,
    ) -> ReelResult<()> {
        let path = shape_path(&s.shape);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_transform(affine_to_cpu(tf));

        match &s.fill {
            None => {}
            Some(Paint::Solid(c)) => {
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(solid(*c, alpha));
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
            Some(paint) => {
                let bbox = path.bounding_box();
                if bbox.width() > 0.0 && bbox.height() > 0.0 {
                    let (image, pw, ph) = self.gradient_paint_for(paint, bbox, tf)?;
                    let paint_tf = Affine::translate(Vec2::new(bbox.x0, bbox.y0))
                        * Affine::scale_non_uniform(bbox.width() / pw, bbox.height() / ph);
                    ctx.set_paint_transform(affine_to_cpu(paint_tf));
                    ctx.set_paint(image);
                    with_opacity(ctx, alpha, |ctx| ctx.fill_path(&bezpath_to_cpu(&path)));
                    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                }
            }
        }

        if let Some(stroke) = s.stroke
            && stroke.width > 0.0
        {
            let style = kurbo::Stroke::new(stroke.width)
                .with_caps(kurbo::Cap::Round)
                .with_join(kurbo::Join::Round);
            let outline = kurbo::stroke(
                path.iter(),
                &style,
                &kurbo::StrokeOpts::default(),
                TOLERANCE * 0.5,
            );
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(solid(stroke.color, alpha));
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }
        Ok(())
    }

    fn gradient_paint_for(
        &mut self,
        paint: &Paint,
        bbox: Rect,
        tf: Affine,
    ) -> ReelResult<(vello_cpu::Image, f64, f64)> {
        let (sx, sy) = axis_scales(tf);
        let max = f64::from(MAX_GRADIENT_DIM);
        let pw = (bbox.width() * sx).ceil().clamp(1.0, max);
        let ph = (bbox.height() * sy).ceil().clamp(1.0, max);
        let key = GradientKey::new(paint, pw as u32, ph as u32);
        if let Some(image) = self.gradient_cache.get(&key) {
            return Ok((image.clone(), pw, ph));
        }

        let bytes = gradient_premul_rgba8(paint, key.width, key.height)?;
        let image = premul_image(&bytes, key.width, key.height)?;
        if self.gradient_cache.len() >= 256 {
            self.gradient_cache.clear();
        }
        self.gradient_cache.insert(key, image.clone());
        Ok((image, pw, ph))
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        t: &TextNode,
        tf: Affine,
        alpha: f64,
    ) -> ReelResult<()> {
        if t.revealed.is_invisible() {
            return Ok(());
        }
        let Some(font) = self.text.font(t.style.role).cloned() else {
            return Ok(());
        };

        let layout = layout_units(&t.revealed, &t.style, t.width, t.align, &mut self.text);
        let line_px = t.style.line_px();
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        for placed in &layout.units {
            let unit = &t.revealed.units[placed.index];
            if unit.is_space || unit.state.opacity <= 0.0 {
                continue;
            }
            let Some(shaped) = self.text.shape(&unit.text, &t.style) else {
                continue;
            };
            let Some(line) = layout.lines.get(placed.line) else {
                continue;
            };

            let top = line.y + (line_px - shaped.height) * 0.5 + unit.state.rise * t.style.size;
            let center = Vec2::new(shaped.width * 0.5, shaped.height * 0.5);
            let unit_tf = tf
                * Affine::translate(Vec2::new(placed.x, top) + center)
                * Affine::scale(unit.state.scale)
                * Affine::translate(-center);

            ctx.set_transform(affine_to_cpu(unit_tf));
            ctx.set_paint(solid(t.style.color, alpha * unit.state.opacity.clamp(0.0, 1.0)));
            for shaped_line in shaped.layout.lines() {
                for item in shaped_line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }

        if let Some(strike) = t.strike {
            let thickness = (t.style.size * 0.07).max(2.0);
            ctx.set_transform(affine_to_cpu(tf));
            ctx.set_paint(solid(strike, alpha));
            for line in &layout.lines {
                let mid = line.y + line_px * 0.5;
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    line.x,
                    mid - thickness * 0.5,
                    line.x + line.width,
                    mid + thickness * 0.5,
                ));
            }
        }
        Ok(())
    }

    fn draw_icon(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        icon: &IconNode,
        tf: Affine,
        alpha: f64,
    ) -> ReelResult<()> {
        let opacity = icon.color.a * alpha;
        if icon.size <= 0.0 || opacity <= 0.0 {
            return Ok(());
        }
        // Rasterized opaque; alpha is applied when drawing so fades reuse the raster.
        let color = icon.color.with_alpha(1.0);
        let rgba = color.to_rgba8();
        let tree_key = (icon.icon, rgba);
        if !self.icon_trees.contains_key(&tree_key) {
            self.icon_trees.insert(tree_key, icon_tree(icon.icon, color)?);
        }
        let tree = self
            .icon_trees
            .get(&tree_key)
            .ok_or_else(|| ReelError::render("icon tree cache miss"))?;

        let size = tree.size();
        let to_box = Affine::scale_non_uniform(
            icon.size / f64::from(size.width()),
            icon.size / f64::from(size.height()),
        );
        let (w, h, adjust) = svg_raster_params(tree, tf * to_box)?;
        let key = IconRasterKey {
            icon: icon.icon,
            rgba,
            width: w,
            height: h,
        };
        let image = match self.icon_cache.get(&key) {
            Some(image) => image.clone(),
            None => {
                let bytes = rasterize_svg_to_premul_rgba8(tree, w, h)?;
                let image = premul_image(&bytes, w, h)?;
                self.icon_cache.insert(key, image.clone());
                image
            }
        };

        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_transform(affine_to_cpu(adjust));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(image);
        with_opacity(ctx, opacity, |ctx| {
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
        });
        Ok(())
    }

    fn draw_glow(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        g: &GlowNode,
        tf: Affine,
        alpha: f64,
    ) -> ReelResult<()> {
        let opacity = g.color.a * alpha;
        let radius = g.radius.max(0.0);
        let sigma = g.blur.max(0.0);
        let extent = radius + 3.0 * sigma;
        if opacity <= 0.0 || extent <= 0.0 {
            return Ok(());
        }

        let (sx, sy) = axis_scales(tf);
        let device_scale = sx.max(sy);
        let sigma_dev = sigma * device_scale;
        let quality = if sigma_dev > GLOW_SIGMA_PX {
            GLOW_SIGMA_PX / sigma_dev
        } else {
            1.0
        };
        let size = (2.0 * extent * device_scale * quality)
            .ceil()
            .clamp(2.0, MAX_GLOW_DIM);
        let px_per_unit = size / (2.0 * extent);
        let [r, gr, b, _] = g.color.to_rgba8();
        let key = GlowKey {
            rgb: [r, gr, b],
            size: size as u32,
            radius_q: (radius * px_per_unit * 2.0).round() as u32,
            sigma_q: (sigma * px_per_unit * 2.0).round() as u32,
        };

        let image = match self.glow_cache.get(&key) {
            Some(image) => image.clone(),
            None => {
                let image = glow_image(key)?;
                if self.glow_cache.len() >= 64 {
                    self.glow_cache.clear();
                }
                self.glow_cache.insert(key, image.clone());
                image
            }
        };

        let draw_tf =
            tf * Affine::translate(Vec2::new(-extent, -extent)) * Affine::scale(1.0 / px_per_unit);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_transform(affine_to_cpu(draw_tf));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(image);
        with_opacity(ctx, opacity, |ctx| {
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, size, size));
        });
        Ok(())
    }
}

/// Blurred opaque disc centered in a square raster.
fn glow_image(key: GlowKey) -> ReelResult<vello_cpu::Image> {
    let n = key.size;
    let radius = f64::from(key.radius_q) * 0.5;
    let sigma = f64::from(key.sigma_q) * 0.5;
    let c = f64::from(n) * 0.5;
    let [r, g, b] = key.rgb;

    let mut disc = vec![0u8; n as usize * n as usize * 4];
    for (i, px) in disc.chunks_exact_mut(4).enumerate() {
        let x = (i % n as usize) as f64 + 0.5 - c;
        let y = (i / n as usize) as f64 + 0.5 - c;
        let cov = (radius - (x * x + y * y).sqrt() + 0.5).clamp(0.0, 1.0);
        if cov > 0.0 {
            let a = (cov * 255.0).round() as u8;
            px.copy_from_slice(&premul_rgba8(r, g, b, a));
        }
    }

    let blurred = if sigma > 0.0 {
        let sigma = sigma as f32;
        blur_rgba8_premul(&disc, n, n, radius_for_sigma(sigma), sigma)?
    } else {
        disc
    };
    premul_image(&blurred, n, n)
}

fn shape_path(shape: &Shape) -> BezPath {
    match shape {
        Shape::Rect { w, h } => Rect::new(0.0, 0.0, *w, *h).to_path(TOLERANCE),
        Shape::RoundedRect { w, h, radius } => {
            let r = radius.clamp(0.0, (w.min(*h) * 0.5).max(0.0));
            kurbo::RoundedRect::new(0.0, 0.0, *w, *h, r).to_path(TOLERANCE)
        }
        Shape::Ellipse { w, h } => {
            kurbo::Ellipse::from_rect(Rect::new(0.0, 0.0, *w, *h)).to_path(TOLERANCE)
        }
        Shape::Path(p) => p.clone(),
    }
}

/// Length of the transformed unit x and y vectors.
fn axis_scales(tf: Affine) -> (f64, f64) {
    let [a, b, c, d, _e, _f] = tf.as_coeffs();
    ((a * a + b * b).sqrt().max(1e-6), (c * c + d * d).sqrt().max(1e-6))
}

fn solid(c: Color, alpha: f64) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.with_alpha(c.a * alpha.clamp(0.0, 1.0)).to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn with_opacity(
    ctx: &mut vello_cpu::RenderContext,
    opacity: f64,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) {
    let opacity = opacity.clamp(0.0, 1.0) as f32;
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
        draw(ctx);
        ctx.pop_layer();
    } else {
        draw(ctx);
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Wrap premultiplied RGBA8 bytes as an image paint.
fn premul_image(rgba8_premul: &[u8], width: u32, height: u32) -> ReelResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ReelError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ReelError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ReelError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
