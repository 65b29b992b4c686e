use crate::foundation::core::Fps;

/// Sine oscillator sampled in seconds: `offset + amplitude * sin(rad_per_sec * t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    /// Peak deviation from `offset`.
    pub amplitude: f64,
    /// Angular speed in radians per second.
    pub rad_per_sec: f64,
    /// Phase offset in radians.
    pub phase: f64,
    /// Resting value.
    pub offset: f64,
}

impl Oscillator {
    /// Oscillator centered on `offset`.
    pub const fn new(offset: f64, amplitude: f64, rad_per_sec: f64) -> Self {
        Self {
            amplitude,
            rad_per_sec,
            phase: 0.0,
            offset,
        }
    }

    /// Same oscillator with a phase offset.
    pub const fn phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Sample at `secs`.
    pub fn at(&self, secs: f64) -> f64 {
        self.offset + self.amplitude * (self.rad_per_sec * secs + self.phase).sin()
    }
}

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Mass.
    pub mass: f64,
    /// Stiffness.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Clamp output to `<= 1` once the spring crosses its target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            overshoot_clamping: false,
        }
    }
}

/// Spring progress from 0 toward 1 at `frame` frames after release.
///
/// Negative frames have not started yet and return 0.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame <= 0.0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(frame);
    let v = spring_step(t, config.stiffness, config.damping, config.mass);
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 1.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
