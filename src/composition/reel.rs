use std::sync::Arc;

use serde::Serialize;

use crate::composition::manifest::{ReelManifest, SceneEntry, TransitionEntry};
use crate::config::ReelConfig;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scenes::closing::ClosingScene;
use crate::scenes::guidelines::GuidelinesScene;
use crate::scenes::quiz::QuizScene;
use crate::scenes::scenario::ScenarioScene;
use crate::scenes::title::TitleScene;
use crate::timeline::series::{TransitionSeries, TransitionStep};
use crate::timeline::transition::{Direction, Presentation, Timing};

/// Frame rate of the training reel.
pub const REEL_FPS: Fps = Fps::whole(30);

/// Idle frames appended after the last scene.
pub const BUFFER_FRAMES: u64 = 30;

/// Length of every default transition.
pub const TRANSITION_FRAMES: u64 = 20;

/// Still image written while rendering a given frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    /// File name inside the artifact directory.
    pub name: String,
    /// Frame the still is taken from.
    pub frame: FrameIndex,
}

/// The composed training video: five scenes in a transition series, a trailing buffer and a
/// thumbnail.
#[derive(Clone, Debug)]
pub struct Reel {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Scene sequencing.
    pub series: TransitionSeries,
    /// Frames after the series during which nothing is drawn.
    pub buffer_frames: u64,
    /// Thumbnail still, if any.
    pub thumbnail: Option<ArtifactSpec>,
    /// Clear color of every frame.
    pub background: Color,
}

impl Reel {
    /// Transitions between title, scenario, quiz, guidelines and closing.
    pub fn default_transitions() -> [TransitionStep; 4] {
        let step = |presentation| TransitionStep {
            presentation,
            timing: Timing::linear(TRANSITION_FRAMES),
        };
        [
            step(Presentation::Slide(Direction::FromRight)),
            step(Presentation::Wipe(Direction::FromLeft)),
            step(Presentation::Fade),
            step(Presentation::Slide(Direction::FromBottom)),
        ]
    }

    /// The reel with its default transitions at 1280x720.
    pub fn training() -> ReelResult<Self> {
        Self::training_with(Self::default_transitions())
    }

    /// The reel with custom transitions between the five scenes.
    pub fn training_with(transitions: [TransitionStep; 4]) -> ReelResult<Self> {
        let [t0, t1, t2, t3] = transitions;
        let series = TransitionSeries::builder()
            .sequence(120, Arc::new(TitleScene))
            .transition(t0.presentation, t0.timing)
            .sequence(210, Arc::new(ScenarioScene))
            .transition(t1.presentation, t1.timing)
            .sequence(240, Arc::new(QuizScene))
            .transition(t2.presentation, t2.timing)
            .sequence(210, Arc::new(GuidelinesScene))
            .transition(t3.presentation, t3.timing)
            .sequence(180, Arc::new(ClosingScene))
            .build()?;

        let reel = Self {
            canvas: Canvas {
                width: 1280,
                height: 720,
            },
            fps: REEL_FPS,
            series,
            buffer_frames: BUFFER_FRAMES,
            thumbnail: Some(ArtifactSpec {
                name: "thumbnail.jpeg".to_owned(),
                frame: FrameIndex(0),
            }),
            background: Color::BLACK,
        };
        reel.validate()?;
        Ok(reel)
    }

    /// The reel as described by `cfg` (canvas, background and optional transitions).
    pub fn from_config(cfg: &ReelConfig) -> ReelResult<Self> {
        let reel = match &cfg.transitions {
            None => Self::training()?,
            Some(specs) => {
                let mut steps = Self::default_transitions();
                if specs.len() != steps.len() {
                    return Err(ReelError::validation(format!(
                        "transitions must list exactly {} entries, got {}",
                        steps.len(),
                        specs.len()
                    )));
                }
                for (step, spec) in steps.iter_mut().zip(specs) {
                    let (presentation, timing) = spec.resolve()?;
                    *step = TransitionStep {
                        presentation,
                        timing,
                    };
                }
                Self::training_with(steps)?
            }
        };
        let reel = reel
            .with_canvas(cfg.canvas.into())
            .with_background(cfg.output.background);
        reel.validate()?;
        Ok(reel)
    }

    /// Replace the output size; scenes are scaled to fit.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replace the clear color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Series length plus the trailing buffer.
    pub fn duration_frames(&self) -> u64 {
        self.series.total_frames() + self.buffer_frames
    }

    /// Check canvas size and artifact placement.
    pub fn validate(&self) -> ReelResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if let Some(t) = &self.thumbnail {
            if t.name.trim().is_empty() {
                return Err(ReelError::validation("thumbnail name must be non-empty"));
            }
            if t.frame.0 >= self.duration_frames() {
                return Err(ReelError::validation(format!(
                    "thumbnail frame {} is outside the reel ({} frames)",
                    t.frame.0,
                    self.duration_frames()
                )));
            }
        }
        Ok(())
    }

    /// Artifacts captured at `frame`.
    pub fn artifacts_at(&self, frame: FrameIndex) -> Vec<ArtifactSpec> {
        self.thumbnail
            .iter()
            .filter(|a| a.frame == frame)
            .cloned()
            .collect()
    }

    /// Serializable summary of the timeline.
    pub fn manifest(&self) -> ReelManifest {
        let starts = self.series.sequence_starts();
        let seqs = self.series.sequences();
        let scenes = seqs
            .iter()
            .zip(starts)
            .map(|(s, &start)| SceneEntry {
                id: s.scene.id(),
                start,
                duration_frames: s.duration_frames,
                end: start + s.duration_frames,
            })
            .collect();
        let transitions = (0..seqs.len().saturating_sub(1))
            .filter_map(|i| {
                let t = self.series.transition_after(i)?;
                Some(TransitionEntry {
                    from: seqs[i].scene.id(),
                    to: seqs[i + 1].scene.id(),
                    presentation: t.presentation,
                    timing: t.timing,
                    window_start: starts[i + 1],
                })
            })
            .collect();

        ReelManifest {
            canvas: self.canvas,
            fps: self.fps,
            series_frames: self.series.total_frames(),
            buffer_frames: self.buffer_frames,
            total_frames: self.duration_frames(),
            scenes,
            transitions,
            artifacts: self.thumbnail.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/reel.rs"]
mod tests;
