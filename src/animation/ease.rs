use crate::foundation::error::{ReelError, ReelResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Ease-out that overshoots the target before settling.
    OutBack {
        /// Overshoot amount; `1.70158` is the conventional default.
        overshoot: f64,
    },
    /// Piecewise parabolic bounce into the target.
    OutBounce,
}

impl Ease {
    /// `OutBack` with the given overshoot.
    pub const fn out_back(overshoot: f64) -> Self {
        Self::OutBack { overshoot }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::OutBack { overshoot } => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            }
            Self::OutBounce => bounce_out(t),
        }
    }

    /// Parse a named curve.
    ///
    /// Accepts `linear`/`none`, the `powerN.{in,out,inOut}` family (`power1` = quad,
    /// `power2` = cubic, `power3` = quart), `back.out` with an optional `(overshoot)`
    /// suffix, and `bounce.out`.
    pub fn parse(name: &str) -> ReelResult<Self> {
        let name = name.trim();
        if let Some(rest) = name.strip_prefix("back.out") {
            let overshoot = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                Some(v) => v.trim().parse::<f64>().map_err(|_| {
                    ReelError::animation(format!("invalid back.out overshoot in \"{name}\""))
                })?,
                None if rest.is_empty() => 1.70158,
                None => {
                    return Err(ReelError::animation(format!("unknown ease \"{name}\"")));
                }
            };
            return Ok(Self::OutBack { overshoot });
        }

        Ok(match name {
            "linear" | "none" => Self::Linear,
            "power1.in" => Self::InQuad,
            "power1.out" | "power1" => Self::OutQuad,
            "power1.inOut" => Self::InOutQuad,
            "power2.in" => Self::InCubic,
            "power2.out" | "power2" => Self::OutCubic,
            "power2.inOut" => Self::InOutCubic,
            "power3.in" => Self::InQuart,
            "power3.out" | "power3" => Self::OutQuart,
            "power3.inOut" => Self::InOutQuart,
            "bounce.out" | "bounce" => Self::OutBounce,
            other => return Err(ReelError::animation(format!("unknown ease \"{other}\""))),
        })
    }
}

fn bounce_out(t: f64) -> f64 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
