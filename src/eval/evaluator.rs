//! Reel frame to ordered scene layers plus the artifacts due at that frame.

use serde::Serialize;

use crate::composition::reel::{ArtifactSpec, Reel};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::Node;
use crate::scenes::{DESIGN_H, DESIGN_W, SceneCtx, SceneId};
use crate::timeline::series::{Active, Sequence};
use crate::timeline::transition::{Presentation, Side, SideEffect, WipeMask};

/// One scene's display list placed on the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Which scene.
    pub scene: SceneId,
    /// Scene-local frame the display list was built at.
    pub local_frame: u64,
    /// Display list in design-space coordinates.
    pub root: Node,
    /// Translation in design pixels.
    pub offset: Vec2,
    /// Opacity multiplier for the whole layer.
    pub opacity: f64,
    /// Reveal mask for the whole layer.
    pub wipe: Option<WipeMask>,
}

/// Transition in progress at an evaluated frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActiveTransition {
    /// Visual treatment.
    pub presentation: Presentation,
    /// Eased progress.
    pub progress: f64,
}

/// Everything needed to draw one reel frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedFrame {
    /// Reel frame.
    pub frame: FrameIndex,
    /// Layers bottom to top (exiting scene first during transitions).
    pub layers: Vec<Layer>,
    /// Transition in progress, if any.
    pub transition: Option<ActiveTransition>,
    /// Stills to capture from this frame.
    pub artifacts: Vec<ArtifactSpec>,
}

/// Maps reel frames to layers.
#[derive(Debug)]
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `frame` of `reel`.
    ///
    /// Frames in the trailing buffer have no layers. Frames at or past the reel's end are an
    /// error.
    #[tracing::instrument(level = "trace", skip(reel))]
    pub fn eval_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<EvaluatedFrame> {
        if frame.0 >= reel.duration_frames() {
            return Err(ReelError::validation(format!(
                "frame {} is out of range (reel has {} frames)",
                frame.0,
                reel.duration_frames()
            )));
        }

        let seqs = reel.series.sequences();
        let (layers, transition) = match reel.series.resolve(frame.0) {
            Active::Idle => (Vec::new(), None),
            Active::Single { index, local } => (
                vec![layer(reel, &seqs[index], local, SideEffect::IDENTITY)],
                None,
            ),
            Active::Transition {
                exiting,
                exiting_local,
                entering,
                entering_local,
                progress,
                presentation,
            } => {
                let out = presentation.effect(Side::Exiting, progress);
                let inn = presentation.effect(Side::Entering, progress);
                (
                    vec![
                        layer(reel, &seqs[exiting], exiting_local, out),
                        layer(reel, &seqs[entering], entering_local, inn),
                    ],
                    Some(ActiveTransition {
                        presentation,
                        progress,
                    }),
                )
            }
        };

        Ok(EvaluatedFrame {
            frame,
            layers,
            transition,
            artifacts: reel.artifacts_at(frame),
        })
    }
}

fn layer(reel: &Reel, seq: &Sequence, local: u64, fx: SideEffect) -> Layer {
    let cx = SceneCtx::new(local as i64, reel.fps, seq.duration_frames);
    Layer {
        scene: seq.scene.id(),
        local_frame: local,
        root: seq.scene.build(&cx),
        offset: Vec2::new(fx.offset.x * DESIGN_W, fx.offset.y * DESIGN_H),
        opacity: fx.opacity,
        wipe: fx.wipe,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
