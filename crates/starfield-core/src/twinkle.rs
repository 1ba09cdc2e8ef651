use std::f32::consts::PI;

use rand::prelude::*;

use crate::params::ParameterSet;
use crate::particle::Particle;

/// Mean number of twinkles to start this frame.
#[inline]
pub fn expected_starts(particle_count: usize, rate_per_sec: f32, dt_ms: f64) -> f64 {
    particle_count as f64 * rate_per_sec.max(0.0) as f64 * (dt_ms.max(0.0) / 1000.0)
}

/// Integer draw with the right mean: the floor, plus one more with
/// probability equal to the fractional part.
pub fn round_stochastic<R: Rng + ?Sized>(expected: f64, rng: &mut R) -> usize {
    if !expected.is_finite() || expected <= 0.0 {
        return 0;
    }
    let whole = expected.floor();
    let extra = rng.gen::<f64>() < expected - whole;
    whole as usize + usize::from(extra)
}

/// Start this frame's twinkles. Targets are picked uniformly with
/// replacement, so an already twinkling particle just gets a later deadline.
/// Returns how many were started.
pub fn start_twinkles<R: Rng + ?Sized>(
    particles: &mut [Particle],
    params: &ParameterSet,
    now_ms: f64,
    dt_ms: f64,
    rng: &mut R,
) -> usize {
    if particles.is_empty() {
        return 0;
    }
    let expected = expected_starts(particles.len(), params.twinkle_rate, dt_ms);
    let count = round_stochastic(expected, rng);
    let deadline = now_ms + params.twinkle_ms as f64;
    for _ in 0..count {
        let i = rng.gen_range(0..particles.len());
        particles[i].twinkle_until = Some(deadline);
    }
    count
}

/// `sin(π t)` over `t` clamped to `[0, 1]`: rises 0 → 1 → 0.
#[inline]
pub fn bell(t: f32) -> f32 {
    (PI * t.clamp(0.0, 1.0)).sin()
}

/// Multipliers a twinkle applies at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub alpha_mul: f32,
    pub size_mul: f32,
}

impl Pulse {
    pub const NONE: Pulse = Pulse {
        alpha_mul: 1.0,
        size_mul: 1.0,
    };

    pub fn from_bell(bell: f32, depth: f32, size_pulse: f32) -> Self {
        Self {
            alpha_mul: 1.0 - depth * bell,
            size_mul: 1.0 + size_pulse * bell,
        }
    }

    /// Pulse for a particle whose twinkle ends at `until`. Expired or unset
    /// deadlines give [`Pulse::NONE`].
    pub fn at(until: Option<f64>, now_ms: f64, params: &ParameterSet) -> Self {
        match until {
            Some(deadline) if now_ms < deadline && params.twinkle_ms > 0.0 => {
                let t = 1.0 - ((deadline - now_ms) / params.twinkle_ms as f64) as f32;
                Self::from_bell(bell(t), params.twinkle_depth, params.twinkle_size_pulse)
            }
            _ => Self::NONE,
        }
    }
}
