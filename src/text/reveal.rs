//! Staggered text reveals.
//!
//! A reveal splits a string into units (whole words or single characters) and gives each unit
//! its own start frame, so an entrance ripples across the text. Units are laid out by
//! [`crate::text::layout`]; this module only decides per-unit visual state.

use crate::animation::ease::Ease;
use crate::animation::interp::Tween;
use crate::foundation::core::Fps;

/// How a text run appears over time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TextReveal {
    /// Always fully visible.
    Static,
    /// Invisible before `frame`, fully visible from it.
    AppearAt {
        /// First visible frame (scene-local).
        frame: i64,
    },
    /// Words fade in and rise into place one after another.
    FadeInWords {
        /// Delay between consecutive words, in seconds.
        stagger_s: f64,
        /// Per-word animation length, in seconds.
        duration_s: f64,
        /// Curve applied to each word's progress.
        ease: Ease,
        /// Scene-local frame at which the first word starts.
        start_frame: i64,
    },
    /// Characters fade in and rise into place one after another.
    FadeInChars {
        /// Delay between consecutive characters, in seconds.
        stagger_s: f64,
        /// Per-character animation length, in seconds.
        duration_s: f64,
        /// Curve applied to each character's progress.
        ease: Ease,
        /// Scene-local frame at which the first character starts.
        start_frame: i64,
    },
    /// Characters drop in from above and bounce on the baseline.
    BounceChars {
        /// Delay between consecutive characters, in seconds.
        stagger_s: f64,
        /// Per-character animation length, in seconds.
        duration_s: f64,
        /// Scene-local frame at which the first character starts.
        start_frame: i64,
    },
}

/// Split granularity produced by a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Granularity {
    /// Whitespace-separated words, joined by single spaces when laid out.
    Words,
    /// Individual characters; whitespace characters are kept as break opportunities.
    Chars,
}

/// Visual state of one unit at the current frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct UnitState {
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset as a fraction of the font size (positive moves down).
    pub rise: f64,
    /// Uniform scale around the unit center.
    pub scale: f64,
}

impl UnitState {
    /// Fully settled state.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        rise: 0.0,
        scale: 1.0,
    };

    /// Fully hidden state.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        rise: 0.0,
        scale: 1.0,
    };
}

/// One laid-out piece of a revealed string.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealUnit {
    /// Unit text (a word or a single character).
    pub text: String,
    /// `true` for whitespace characters in [`Granularity::Chars`] mode.
    pub is_space: bool,
    /// Current visual state.
    pub state: UnitState,
}

/// A string split into units with their per-frame state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealedText {
    /// Split granularity.
    pub granularity: Granularity,
    /// Units in reading order.
    pub units: Vec<RevealUnit>,
}

impl RevealedText {
    /// `true` when no unit is visible at all.
    pub fn is_invisible(&self) -> bool {
        self.units
            .iter()
            .all(|u| u.is_space || u.state.opacity <= 0.0)
    }

    /// `true` when every unit is settled.
    pub fn is_settled(&self) -> bool {
        self.units
            .iter()
            .all(|u| u.is_space || u.state == UnitState::SETTLED)
    }

    /// Reassemble the source text (words joined by single spaces).
    pub fn joined(&self) -> String {
        match self.granularity {
            Granularity::Words => self
                .units
                .iter()
                .map(|u| u.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Granularity::Chars => self.units.iter().map(|u| u.text.as_str()).collect(),
        }
    }
}

const WORD_RISE_EM: f64 = 0.35;
const CHAR_RISE_EM: f64 = 0.25;
const BOUNCE_DROP_EM: f64 = 0.8;

/// Split `text` according to `reveal` and compute every unit's state at scene-local `frame`.
pub fn reveal_units(text: &str, reveal: TextReveal, frame: i64, fps: Fps) -> RevealedText {
    let frame = frame as f64;
    let secs = |s: f64| fps.secs_to_frames_round(s) as f64;

    match reveal {
        TextReveal::Static => words(text, |_| UnitState::SETTLED),
        TextReveal::AppearAt { frame: at } => words(text, |_| {
            if frame >= at as f64 {
                UnitState::SETTLED
            } else {
                UnitState::HIDDEN
            }
        }),
        TextReveal::FadeInWords {
            stagger_s,
            duration_s,
            ease,
            start_frame,
        } => words(text, |i| {
            let start = start_frame as f64 + secs(stagger_s * i as f64);
            let p = Tween::unit(start, start + secs(duration_s).max(1.0))
                .ease(ease)
                .at(frame);
            rising(p, WORD_RISE_EM)
        }),
        TextReveal::FadeInChars {
            stagger_s,
            duration_s,
            ease,
            start_frame,
        } => chars(text, |i| {
            let start = start_frame as f64 + secs(stagger_s * i as f64);
            let p = Tween::unit(start, start + secs(duration_s).max(1.0))
                .ease(ease)
                .at(frame);
            rising(p, CHAR_RISE_EM)
        }),
        TextReveal::BounceChars {
            stagger_s,
            duration_s,
            start_frame,
        } => chars(text, |i| {
            let start = start_frame as f64 + secs(stagger_s * i as f64);
            let window = Tween::unit(start, start + secs(duration_s).max(1.0));
            let p = window.at(frame);
            if p <= 0.0 {
                return UnitState::HIDDEN;
            }
            if p >= 1.0 {
                return UnitState::SETTLED;
            }
            let drop = 1.0 - Ease::OutBounce.apply(p);
            UnitState {
                opacity: (p * 4.0).min(1.0),
                rise: -BOUNCE_DROP_EM * drop,
                scale: 0.6 + 0.4 * Ease::OutCubic.apply(p),
            }
        }),
    }
}

fn rising(p: f64, rise_em: f64) -> UnitState {
    UnitState {
        opacity: p.clamp(0.0, 1.0),
        rise: (1.0 - p) * rise_em,
        scale: 1.0,
    }
}

fn words(text: &str, state: impl Fn(usize) -> UnitState) -> RevealedText {
    RevealedText {
        granularity: Granularity::Words,
        units: text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| RevealUnit {
                text: w.to_owned(),
                is_space: false,
                state: state(i),
            })
            .collect(),
    }
}

fn chars(text: &str, state: impl Fn(usize) -> UnitState) -> RevealedText {
    RevealedText {
        granularity: Granularity::Chars,
        units: text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let is_space = c.is_whitespace();
                RevealUnit {
                    text: c.to_string(),
                    is_space,
                    state: if is_space {
                        UnitState::SETTLED
                    } else {
                        state(i)
                    },
                }
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/reveal.rs"]
mod tests;
