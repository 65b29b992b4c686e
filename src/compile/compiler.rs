use crate::compile::plan::{
    CompositeOp, CompositePass, Pass, PixelFormat, RenderPlan, ScenePass, SurfaceDesc, SurfaceId,
};
use crate::eval::evaluator::EvaluatedFrame;
use crate::foundation::core::{Affine, Canvas, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scenes::{DESIGN_H, DESIGN_W};

/// Uniform scale that fits the design space into `canvas`, letterboxed and centered.
pub fn design_to_canvas(canvas: Canvas) -> Affine {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let s = (w / DESIGN_W).min(h / DESIGN_H);
    let tx = (w - DESIGN_W * s) * 0.5;
    let ty = (h - DESIGN_H * s) * 0.5;
    Affine::translate(Vec2::new(tx, ty)) * Affine::scale(s)
}

/// Lower an evaluated frame into passes.
///
/// Plain layers draw straight into the output surface. Layers with partial opacity or a wipe
/// mask are drawn into their own transparent surface and composited on top.
pub fn compile_frame(eval: &EvaluatedFrame, canvas: Canvas) -> ReelResult<RenderPlan> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ReelError::validation("canvas width/height must be > 0"));
    }
    let desc = SurfaceDesc {
        width: canvas.width,
        height: canvas.height,
        format: PixelFormat::Rgba8Premul,
    };
    let fit = design_to_canvas(canvas);

    let mut surfaces = vec![desc];
    let mut passes = Vec::new();
    let root = SurfaceId(0);

    for (i, layer) in eval.layers.iter().enumerate() {
        let opacity = layer.opacity.clamp(0.0, 1.0) as f32;
        let wipe_t = layer.wipe.map(|w| w.t.clamp(0.0, 1.0) as f32);
        if opacity <= 0.0 || wipe_t.is_some_and(|t| t <= 0.0) {
            continue;
        }
        let transform = fit * Affine::translate(layer.offset);

        let blend = match (layer.wipe, wipe_t) {
            (Some(w), Some(t)) if t < 1.0 => Some((w.from, t)),
            _ => None,
        };
        if blend.is_none() && opacity >= 1.0 {
            passes.push(Pass::Scene(ScenePass {
                target: root,
                layer: i,
                transform,
                clear_to_transparent: false,
            }));
            continue;
        }

        let src = SurfaceId(surfaces.len() as u32);
        surfaces.push(desc);
        passes.push(Pass::Scene(ScenePass {
            target: src,
            layer: i,
            transform,
            clear_to_transparent: true,
        }));
        let mut ops = Vec::with_capacity(1);
        match blend {
            Some((dir, t)) if opacity >= 1.0 => ops.push(CompositeOp::Wipe {
                src,
                t,
                dir,
                soft_edge: 0.0,
            }),
            Some(_) => {
                return Err(ReelError::evaluation(
                    "layers combining a wipe with partial opacity are not supported",
                ));
            }
            None => ops.push(CompositeOp::Over { src, opacity }),
        }
        passes.push(Pass::Composite(CompositePass { target: root, ops }));
    }

    Ok(RenderPlan {
        canvas,
        surfaces,
        passes,
        final_surface: root,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
