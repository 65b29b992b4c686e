//! Transition presentations, timings and their JSON form.

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::foundation::error::{ReelError, ReelResult};

/// Side of the canvas a transition moves in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

impl Direction {
    /// Parse a direction name, accepting a few common spellings.
    pub fn parse(s: &str) -> ReelResult<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "from-left" | "from_left" | "fromleft" | "left" | "ltr" | "left_to_right" => {
                Self::FromLeft
            }
            "from-right" | "from_right" | "fromright" | "right" | "rtl" | "right_to_left" => {
                Self::FromRight
            }
            "from-top" | "from_top" | "fromtop" | "top" | "ttb" | "top_to_bottom" => {
                Self::FromTop
            }
            "from-bottom" | "from_bottom" | "frombottom" | "bottom" | "btt" | "bottom_to_top" => {
                Self::FromBottom
            }
            other => {
                return Err(ReelError::validation(format!(
                    "unknown transition direction '{other}'"
                )));
            }
        })
    }

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FromLeft => "from-left",
            Self::FromRight => "from-right",
            Self::FromTop => "from-top",
            Self::FromBottom => "from-bottom",
        }
    }

    /// Unit vector pointing at the side content enters from (`+x` right, `+y` down).
    pub fn origin(self) -> Vec2 {
        match self {
            Self::FromLeft => Vec2::new(-1.0, 0.0),
            Self::FromRight => Vec2::new(1.0, 0.0),
            Self::FromTop => Vec2::new(0.0, -1.0),
            Self::FromBottom => Vec2::new(0.0, 1.0),
        }
    }
}

/// Visual treatment of a transition window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "direction", rename_all = "snake_case")]
pub enum Presentation {
    /// Entering scene pushes the exiting scene off the opposite edge.
    Slide(Direction),
    /// Entering scene is uncovered behind a straight edge moving away from `Direction`.
    Wipe(Direction),
    /// Entering scene fades in over the opaque exiting scene.
    Fade,
}

/// Which scene of a transition window an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Scene that is leaving.
    Exiting,
    /// Scene that is arriving.
    Entering,
}

/// Straight-edge reveal mask.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WipeMask {
    /// Side the revealed area grows from.
    pub from: Direction,
    /// Revealed fraction in `[0, 1]`.
    pub t: f64,
}

/// Per-side result of a presentation at some progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideEffect {
    /// Translation as a fraction of the canvas size.
    pub offset: Vec2,
    /// Opacity multiplier.
    pub opacity: f64,
    /// Reveal mask, if any.
    pub wipe: Option<WipeMask>,
}

impl SideEffect {
    /// No change.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        opacity: 1.0,
        wipe: None,
    };
}

impl Presentation {
    /// Short kind name (`slide`, `wipe`, `fade`).
    pub fn kind(self) -> &'static str {
        match self {
            Self::Slide(_) => "slide",
            Self::Wipe(_) => "wipe",
            Self::Fade => "fade",
        }
    }

    /// Effect on `side` at transition progress `p` (`0` at the window start, `1` at its end).
    pub fn effect(self, side: Side, p: f64) -> SideEffect {
        let p = p.clamp(0.0, 1.0);
        match (self, side) {
            (Self::Slide(d), Side::Entering) => SideEffect {
                offset: d.origin() * (1.0 - p),
                ..SideEffect::IDENTITY
            },
            (Self::Slide(d), Side::Exiting) => SideEffect {
                offset: -d.origin() * p,
                ..SideEffect::IDENTITY
            },
            (Self::Wipe(d), Side::Entering) => SideEffect {
                wipe: Some(WipeMask { from: d, t: p }),
                ..SideEffect::IDENTITY
            },
            (Self::Fade, Side::Entering) => SideEffect {
                opacity: p,
                ..SideEffect::IDENTITY
            },
            (Self::Wipe(_) | Self::Fade, Side::Exiting) => SideEffect::IDENTITY,
        }
    }
}

/// Progress curve of a transition window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Timing {
    /// Fixed length with an easing curve over it.
    Linear {
        /// Window length in frames.
        duration_frames: u64,
        /// Curve applied to the linear progress.
        ease: Ease,
    },
}

impl Timing {
    /// Linear timing without easing.
    pub fn linear(duration_frames: u64) -> Self {
        Self::Linear {
            duration_frames,
            ease: Ease::Linear,
        }
    }

    /// Window length in frames.
    pub fn duration_frames(self) -> u64 {
        match self {
            Self::Linear {
                duration_frames, ..
            } => duration_frames,
        }
    }

    /// Eased progress `elapsed` frames into the window.
    pub fn progress(self, elapsed: u64) -> f64 {
        match self {
            Self::Linear {
                duration_frames,
                ease,
            } => {
                if duration_frames == 0 {
                    return 1.0;
                }
                ease.apply(elapsed as f64 / duration_frames as f64)
            }
        }
    }
}

/// Declarative transition descriptor, as found in configuration files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// `slide`, `wipe` or `fade`.
    pub kind: String,
    /// Kind-specific parameters (`{"direction": "from-right"}`).
    #[serde(default)]
    pub params: serde_json::Value,
    /// Window length in frames.
    #[serde(default = "default_transition_frames")]
    pub duration_frames: u64,
    /// Named easing curve (`linear`, `power2.out`, ...).
    #[serde(default)]
    pub ease: Option<String>,
}

fn default_transition_frames() -> u64 {
    20
}

impl TransitionSpec {
    /// Resolve into a presentation and its timing.
    pub fn resolve(&self) -> ReelResult<(Presentation, Timing)> {
        let presentation = parse_presentation(&self.kind, &self.params)?;
        let ease = match self.ease.as_deref() {
            None => Ease::Linear,
            Some(name) => Ease::parse(name)?,
        };
        Ok((
            presentation,
            Timing::Linear {
                duration_frames: self.duration_frames,
                ease,
            },
        ))
    }
}

/// Parse a presentation from its kind name and a JSON params object.
///
/// `slide` and `wipe` read an optional `direction` (alias `dir`); slide defaults to
/// `from-right`, wipe to `from-left`.
pub fn parse_presentation(kind: &str, params: &serde_json::Value) -> ReelResult<Presentation> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(ReelError::validation("transition kind must be non-empty"));
    }

    let params = if params.is_null() {
        None
    } else {
        Some(params.as_object().ok_or_else(|| {
            ReelError::validation(format!("{kind} params must be an object"))
        })?)
    };
    let direction = |default: Direction| -> ReelResult<Direction> {
        let raw = params.and_then(|p| p.get("direction").or_else(|| p.get("dir")));
        match raw {
            None => Ok(default),
            Some(v) => {
                let s = v.as_str().ok_or_else(|| {
                    ReelError::validation(format!("{kind}.direction must be a string"))
                })?;
                Direction::parse(s)
            }
        }
    };

    match kind.as_str() {
        "slide" => Ok(Presentation::Slide(direction(Direction::FromRight)?)),
        "wipe" => Ok(Presentation::Wipe(direction(Direction::FromLeft)?)),
        "fade" | "crossfade" => Ok(Presentation::Fade),
        _ => Err(ReelError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/transition.rs"]
mod tests;
