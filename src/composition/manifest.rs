use serde::Serialize;

use crate::composition::reel::ArtifactSpec;
use crate::foundation::core::{Canvas, Fps};
use crate::scenes::SceneId;
use crate::timeline::transition::{Presentation, Timing};

/// One scene's place on the reel timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneEntry {
    /// Scene identifier.
    pub id: SceneId,
    /// First frame.
    pub start: u64,
    /// Length in frames.
    pub duration_frames: u64,
    /// Frame after the last one.
    pub end: u64,
}

/// One transition window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionEntry {
    /// Exiting scene.
    pub from: SceneId,
    /// Entering scene.
    pub to: SceneId,
    /// Visual treatment.
    pub presentation: Presentation,
    /// Window length and curve.
    pub timing: Timing,
    /// First frame of the window.
    pub window_start: u64,
}

/// Machine-readable description of a reel, printed by `info --json`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReelManifest {
    /// Output size.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Frames covered by scenes.
    pub series_frames: u64,
    /// Trailing idle frames.
    pub buffer_frames: u64,
    /// Total output frames.
    pub total_frames: u64,
    /// Scenes in play order.
    pub scenes: Vec<SceneEntry>,
    /// Transitions in play order.
    pub transitions: Vec<TransitionEntry>,
    /// Stills written during a render.
    pub artifacts: Vec<ArtifactSpec>,
}
