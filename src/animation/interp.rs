use crate::animation::ease::Ease;

/// Behavior outside the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the boundary segment linearly.
    Extend,
    /// Hold the boundary output.
    #[default]
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Two-point mapping from an input range (usually frames) to an output range.
///
/// Both sides clamp by default, which covers the "before delay / during / after" phases of
/// a reveal in one expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    input: [f64; 2],
    output: [f64; 2],
    ease: Ease,
    left: Extrapolate,
    right: Extrapolate,
}

impl Tween {
    /// Linear, clamped mapping `input -> output`.
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input,
            output,
            ease: Ease::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    /// Normalized clamped progress over `[start, end]`.
    pub fn unit(start: f64, end: f64) -> Self {
        Self::new([start, end], [0.0, 1.0])
    }

    /// Replace the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Replace left-side extrapolation.
    pub fn left(mut self, e: Extrapolate) -> Self {
        self.left = e;
        self
    }

    /// Replace right-side extrapolation.
    pub fn right(mut self, e: Extrapolate) -> Self {
        self.right = e;
        self
    }

    /// Extend on both sides.
    pub fn extend(self) -> Self {
        self.left(Extrapolate::Extend).right(Extrapolate::Extend)
    }

    /// Evaluate at `x`.
    pub fn at(&self, x: f64) -> f64 {
        let [i0, i1] = self.input;
        let [o0, o1] = self.output;
        if i0 == i1 {
            return if x < i0 { o0 } else { o1 };
        }

        let t = (x - i0) / (i1 - i0);
        let side = if t < 0.0 {
            Some(self.left)
        } else if t > 1.0 {
            Some(self.right)
        } else {
            None
        };
        match side {
            None => o0 + (o1 - o0) * self.ease.apply(t),
            Some(Extrapolate::Clamp) => {
                if t < 0.0 {
                    o0
                } else {
                    o1
                }
            }
            Some(Extrapolate::Identity) => x,
            // Easing is only defined on [0, 1]; outside it the segment continues linearly
            // from the nearer endpoint.
            Some(Extrapolate::Extend) => {
                if t < 0.0 {
                    o0 + (o1 - o0) * t
                } else {
                    o1 + (o1 - o0) * (t - 1.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
