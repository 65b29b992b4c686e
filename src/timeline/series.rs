//! Builder-validated sequence list with per-frame resolution of the active scenes.

use std::sync::Arc;

use crate::foundation::error::{ReelError, ReelResult};
use crate::scenes::Scene;
use crate::timeline::transition::{Presentation, Timing};

/// A scene played for a fixed number of frames.
#[derive(Clone)]
pub struct Sequence {
    /// Scene content.
    pub scene: Arc<dyn Scene>,
    /// Length in frames.
    pub duration_frames: u64,
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("scene", &self.scene.id())
            .field("duration_frames", &self.duration_frames)
            .finish()
    }
}

/// Transition between two neighbouring sequences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStep {
    /// Visual treatment.
    pub presentation: Presentation,
    /// Window length and progress curve.
    pub timing: Timing,
}

#[derive(Debug)]
enum Entry {
    Sequence(Sequence),
    Transition(TransitionStep),
}

/// Collects sequences and transitions in order; see [`TransitionSeries::builder`].
#[derive(Debug, Default)]
pub struct TransitionSeriesBuilder {
    entries: Vec<Entry>,
}

impl TransitionSeriesBuilder {
    /// Append a sequence.
    pub fn sequence(mut self, duration_frames: u64, scene: Arc<dyn Scene>) -> Self {
        self.entries.push(Entry::Sequence(Sequence {
            scene,
            duration_frames,
        }));
        self
    }

    /// Append a transition between the previous and the next sequence.
    pub fn transition(mut self, presentation: Presentation, timing: Timing) -> Self {
        self.entries.push(Entry::Transition(TransitionStep {
            presentation,
            timing,
        }));
        self
    }

    /// Validate and compute sequence start frames.
    pub fn build(self) -> ReelResult<TransitionSeries> {
        let mut sequences = Vec::<Sequence>::new();
        let mut transitions = Vec::<Option<TransitionStep>>::new();
        let mut pending: Option<TransitionStep> = None;

        for (i, entry) in self.entries.into_iter().enumerate() {
            match entry {
                Entry::Sequence(seq) => {
                    if seq.duration_frames == 0 {
                        return Err(ReelError::validation(format!(
                            "sequence {i} ({}) must last at least one frame",
                            seq.scene.id().as_str()
                        )));
                    }
                    if !sequences.is_empty() {
                        transitions.push(pending.take());
                    }
                    sequences.push(seq);
                }
                Entry::Transition(step) => {
                    if sequences.is_empty() {
                        return Err(ReelError::validation(
                            "transition series cannot start with a transition",
                        ));
                    }
                    if pending.is_some() {
                        return Err(ReelError::validation(format!(
                            "entry {i}: two transitions in a row"
                        )));
                    }
                    if step.timing.duration_frames() == 0 {
                        return Err(ReelError::validation(format!(
                            "entry {i}: transition duration must be > 0"
                        )));
                    }
                    pending = Some(step);
                }
            }
        }

        if sequences.is_empty() {
            return Err(ReelError::validation(
                "transition series needs at least one sequence",
            ));
        }
        if pending.is_some() {
            return Err(ReelError::validation(
                "transition series cannot end with a transition",
            ));
        }

        let overlap = |k: usize| transitions[k].map_or(0, |t| t.timing.duration_frames());
        for (k, t) in transitions.iter().enumerate() {
            let Some(t) = t else { continue };
            let d = t.timing.duration_frames();
            let (prev, next) = (&sequences[k], &sequences[k + 1]);
            if d > prev.duration_frames || d > next.duration_frames {
                return Err(ReelError::validation(format!(
                    "transition between {} and {} ({d} frames) is longer than a neighbouring sequence",
                    prev.scene.id().as_str(),
                    next.scene.id().as_str()
                )));
            }
        }
        for (i, seq) in sequences.iter().enumerate() {
            let incoming = if i > 0 { overlap(i - 1) } else { 0 };
            let outgoing = if i < transitions.len() { overlap(i) } else { 0 };
            if incoming + outgoing > seq.duration_frames {
                return Err(ReelError::validation(format!(
                    "transitions around {} overlap ({incoming} + {outgoing} > {} frames)",
                    seq.scene.id().as_str(),
                    seq.duration_frames
                )));
            }
        }

        let mut starts = Vec::with_capacity(sequences.len());
        let mut cursor = 0u64;
        for (i, seq) in sequences.iter().enumerate() {
            if i > 0 {
                cursor -= overlap(i - 1);
            }
            starts.push(cursor);
            cursor += seq.duration_frames;
        }

        Ok(TransitionSeries {
            sequences,
            transitions,
            starts,
            total_frames: cursor,
        })
    }
}

/// What is on screen at a series frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Active {
    /// Past the last sequence.
    Idle,
    /// Exactly one sequence.
    Single {
        /// Sequence index.
        index: usize,
        /// Sequence-local frame.
        local: u64,
    },
    /// Two sequences overlapping inside a transition window.
    Transition {
        /// Index of the leaving sequence.
        exiting: usize,
        /// Its local frame.
        exiting_local: u64,
        /// Index of the arriving sequence.
        entering: usize,
        /// Its local frame (0 at the window start).
        entering_local: u64,
        /// Eased window progress in `[0, 1)`.
        progress: f64,
        /// Visual treatment.
        presentation: Presentation,
    },
}

/// Sequences played back to back, overlapping by the length of the transitions between them.
#[derive(Clone, Debug)]
pub struct TransitionSeries {
    sequences: Vec<Sequence>,
    transitions: Vec<Option<TransitionStep>>,
    starts: Vec<u64>,
    total_frames: u64,
}

impl TransitionSeries {
    /// Empty builder.
    pub fn builder() -> TransitionSeriesBuilder {
        TransitionSeriesBuilder::default()
    }

    /// Sum of sequence lengths minus the sum of transition lengths.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// First frame of every sequence.
    pub fn sequence_starts(&self) -> &[u64] {
        &self.starts
    }

    /// Sequences in play order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Transition after sequence `i`, if any.
    pub fn transition_after(&self, i: usize) -> Option<TransitionStep> {
        self.transitions.get(i).copied().flatten()
    }

    /// Resolve which sequences are visible at `frame`.
    pub fn resolve(&self, frame: u64) -> Active {
        if frame >= self.total_frames {
            return Active::Idle;
        }

        for (k, t) in self.transitions.iter().enumerate() {
            let Some(t) = t else { continue };
            let window_start = self.starts[k + 1];
            let elapsed = frame.wrapping_sub(window_start);
            if frame >= window_start && elapsed < t.timing.duration_frames() {
                return Active::Transition {
                    exiting: k,
                    exiting_local: frame - self.starts[k],
                    entering: k + 1,
                    entering_local: elapsed,
                    progress: t.timing.progress(elapsed),
                    presentation: t.presentation,
                };
            }
        }

        let index = self.starts.partition_point(|&s| s <= frame).saturating_sub(1);
        Active::Single {
            index,
            local: frame - self.starts[index],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/series.rs"]
mod tests;
