use crate::foundation::core::{Affine, Canvas};
use crate::timeline::transition::Direction;

/// Backend-agnostic render plan for a single frame.
///
/// Surface 0 is the output and is cleared to the backend's clear color before the first pass.
/// Passes run in order.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    /// Output size.
    pub canvas: Canvas,
    /// Surface declarations, indexed by [`SurfaceId`].
    pub surfaces: Vec<SurfaceDesc>,
    /// Passes in execution order.
    pub passes: Vec<Pass>,
    /// Surface read back as the frame.
    pub final_surface: SurfaceId,
}

impl RenderPlan {
    /// Deterministic text dump, for logs and tests.
    pub fn dump(&self) -> String {
        let mut s = String::new();
        s.push_str("RenderPlan\n");
        s.push_str(&format!("surfaces: {}\n", self.surfaces.len()));
        for (i, surf) in self.surfaces.iter().enumerate() {
            s.push_str(&format!(
                "  S{}: {}x{} {:?}\n",
                i, surf.width, surf.height, surf.format
            ));
        }
        s.push_str(&format!("passes: {}\n", self.passes.len()));
        for (i, p) in self.passes.iter().enumerate() {
            match p {
                Pass::Scene(sp) => s.push_str(&format!(
                    "  P{}: scene layer={} -> S{} clear={} transform={:?}\n",
                    i,
                    sp.layer,
                    sp.target.0,
                    sp.clear_to_transparent,
                    sp.transform.as_coeffs()
                )),
                Pass::Composite(cp) => s.push_str(&format!(
                    "  P{}: composite -> S{} ops={:?}\n",
                    i, cp.target.0, cp.ops
                )),
            }
        }
        s.push_str(&format!("final: S{}\n", self.final_surface.0));
        s
    }
}

/// Identifier of a surface declared in [`RenderPlan::surfaces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Pixel formats of render surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGBA, premultiplied alpha.
    Rgba8Premul,
}

/// Surface declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
}

/// One step of a [`RenderPlan`].
#[derive(Clone, Debug)]
pub enum Pass {
    /// Draw a layer's display list.
    Scene(ScenePass),
    /// Blend surfaces.
    Composite(CompositePass),
}

/// Draw `layer` of the evaluated frame into `target`.
#[derive(Clone, Debug)]
pub struct ScenePass {
    /// Destination surface.
    pub target: SurfaceId,
    /// Index into the evaluated frame's layers.
    pub layer: usize,
    /// Design space to surface pixels, including the layer offset.
    pub transform: Affine,
    /// Clear the target to transparent first.
    pub clear_to_transparent: bool,
}

/// Blend sources into `target`.
#[derive(Clone, Debug)]
pub struct CompositePass {
    /// Destination surface.
    pub target: SurfaceId,
    /// Operations in order.
    pub ops: Vec<CompositeOp>,
}

/// Compositing operation onto a pass target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompositeOp {
    /// Source-over with a global opacity.
    Over {
        /// Source surface.
        src: SurfaceId,
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Source-over restricted to a region growing from one edge.
    Wipe {
        /// Source surface.
        src: SurfaceId,
        /// Revealed fraction in `[0, 1]`.
        t: f32,
        /// Edge the revealed region grows from.
        dir: Direction,
        /// Width of the soft transition band as a fraction of the wipe axis.
        soft_edge: f32,
    },
}
