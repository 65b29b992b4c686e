use crate::compile::plan::{CompositePass, RenderPlan, ScenePass, SurfaceDesc, SurfaceId};
use crate::eval::evaluator::EvaluatedFrame;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::cpu::CpuBackend;
use crate::text::fonts::FontBook;

/// A rendered frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub data: Vec<u8>,
    /// `true` when `data` holds premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels, flattened over `background` when given.
    pub fn to_straight_rgba8(&self, background: Option<[u8; 4]>) -> Vec<u8> {
        let mut out = self.data.clone();
        if let Some(bg) = background {
            let bg = crate::render::composite::premul_rgba8(bg[0], bg[1], bg[2], bg[3]);
            for px in out.chunks_exact_mut(4) {
                let src = [px[0], px[1], px[2], px[3]];
                px.copy_from_slice(&crate::render::composite::over(bg, src, 1.0));
            }
        }
        if self.premultiplied {
            crate::render::composite::unpremultiply_in_place(&mut out);
        }
        out
    }
}

/// Executes the passes of a [`RenderPlan`].
pub trait PassBackend {
    /// Allocate (or reuse) surface `id`. Surface 0 is cleared to the clear color.
    fn ensure_surface(&mut self, id: SurfaceId, desc: &SurfaceDesc) -> ReelResult<()>;

    /// Draw one layer of `eval` into the pass target.
    fn exec_scene(&mut self, pass: &ScenePass, eval: &EvaluatedFrame) -> ReelResult<()>;

    /// Blend sources into the pass target.
    fn exec_composite(&mut self, pass: &CompositePass) -> ReelResult<()>;

    /// Copy `surface` out and drop surfaces the plan no longer declares.
    fn readback_rgba8(&mut self, surface: SurfaceId, plan: &RenderPlan) -> ReelResult<FrameRGBA>;
}

/// Run every pass of `plan` and read back its final surface.
pub fn execute_plan<B: PassBackend + ?Sized>(
    backend: &mut B,
    plan: &RenderPlan,
    eval: &EvaluatedFrame,
) -> ReelResult<FrameRGBA> {
    for (idx, desc) in plan.surfaces.iter().enumerate() {
        let id = SurfaceId(
            u32::try_from(idx).map_err(|_| ReelError::render("surface id overflow"))?,
        );
        backend.ensure_surface(id, desc)?;
    }

    for pass in &plan.passes {
        match pass {
            crate::compile::plan::Pass::Scene(p) => backend.exec_scene(p, eval)?,
            crate::compile::plan::Pass::Composite(p) => backend.exec_composite(p)?,
        }
    }

    backend.readback_rgba8(plan.final_surface, plan)
}

/// A backend that turns plans into frames.
pub trait RenderBackend: PassBackend {
    /// Execute `plan` for `eval`.
    fn render_plan(&mut self, plan: &RenderPlan, eval: &EvaluatedFrame) -> ReelResult<FrameRGBA> {
        execute_plan(self, plan, eval)
    }
}

/// Backend-independent render options.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Straight RGBA the output surface is cleared to; transparent when `None`.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Build the CPU backend.
pub fn create_backend(settings: &RenderSettings, fonts: &FontBook) -> Box<dyn RenderBackend> {
    Box::new(CpuBackend::new(settings.clone(), fonts))
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
