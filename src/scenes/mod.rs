//! The five scenes of the training reel.
//!
//! Every scene is a pure function of its local frame: [`Scene::build`] returns a fresh display
//! list and keeps no state between calls.

pub(crate) mod closing;
pub(crate) mod guidelines;
pub(crate) mod quiz;
pub(crate) mod scenario;
pub(crate) mod title;

use crate::animation::ease::Ease;
use crate::animation::interp::Tween;
use crate::foundation::core::Fps;
use crate::scene::model::Node;
use crate::text::reveal::{RevealedText, TextReveal, reveal_units};

/// Width of the design space scenes are authored in.
pub const DESIGN_W: f64 = 1280.0;
/// Height of the design space scenes are authored in.
pub const DESIGN_H: f64 = 720.0;

/// Stable scene identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Title card.
    Title,
    /// Workplace feedback scenario.
    Scenario,
    /// Knowledge check.
    Quiz,
    /// Key guidelines.
    Guidelines,
    /// Summary and call to action.
    Closing,
}

impl SceneId {
    /// Identifier as used in manifests and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Scenario => "scenario",
            Self::Quiz => "quiz",
            Self::Guidelines => "guidelines",
            Self::Closing => "closing",
        }
    }
}

/// Per-call inputs of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Scene-local frame; 0 is the first frame the scene is visible.
    pub frame: i64,
    /// Frame rate.
    pub fps: Fps,
    /// Scene length in frames.
    pub duration: u64,
}

impl SceneCtx {
    /// Context at `frame`.
    pub fn new(frame: i64, fps: Fps, duration: u64) -> Self {
        Self {
            frame,
            fps,
            duration,
        }
    }

    /// Local frame as a float.
    pub fn f(&self) -> f64 {
        self.frame as f64
    }

    /// Local time in seconds.
    pub fn secs(&self) -> f64 {
        self.fps.frames_to_secs(self.f())
    }

    /// Seconds converted to whole frames (rounded).
    pub fn frames(&self, secs: f64) -> i64 {
        self.fps.secs_to_frames_round(secs)
    }

    /// Eased progress over `len` frames starting at `start`, clamped to `[0, 1]` (before the
    /// overshoot of back curves).
    pub fn progress(&self, start: f64, len: f64, ease: Ease) -> f64 {
        Tween::unit(start, start + len).ease(ease).at(self.f())
    }

    /// Clamped linear mapping of the local frame.
    pub fn tween(&self, input: [f64; 2], output: [f64; 2]) -> f64 {
        Tween::new(input, output).at(self.f())
    }

    /// Split `text` and evaluate `reveal` at the current frame.
    pub fn reveal(&self, text: &str, reveal: TextReveal) -> RevealedText {
        reveal_units(text, reveal, self.frame, self.fps)
    }
}

/// Words fading up one after another (`power3.out`).
pub fn fade_in_words(stagger_s: f64, duration_s: f64, start_frame: i64) -> TextReveal {
    TextReveal::FadeInWords {
        stagger_s,
        duration_s,
        ease: Ease::OutQuart,
        start_frame,
    }
}

/// Characters fading up one after another (`power2.out`).
pub fn fade_in_chars(stagger_s: f64, duration_s: f64, start_frame: i64) -> TextReveal {
    TextReveal::FadeInChars {
        stagger_s,
        duration_s,
        ease: Ease::OutCubic,
        start_frame,
    }
}

/// A frame-driven scene.
pub trait Scene: Send + Sync {
    /// Identifier.
    fn id(&self) -> SceneId;

    /// Display list at `cx.frame`, in design-space coordinates.
    fn build(&self, cx: &SceneCtx) -> Node;
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/ctx.rs"]
mod tests;
