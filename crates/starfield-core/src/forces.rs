//! Per-particle force model.
//!
//! A [`ForceField`] is built once per frame from the parameters, the smoothed
//! input signals and the accumulated [`Rotation`]; [`ForceField::advance`] then
//! moves one particle and returns where to draw it. Only the swirl velocity
//! and the wrapped base position persist between frames. Cursor parallax,
//! scroll parallax and rotation are applied to the returned draw position
//! alone.

use std::f64::consts::TAU;

use glam::Vec2;

use crate::constants::*;
use crate::input::InputSignals;
use crate::params::ParameterSet;
use crate::particle::{Particle, Viewport};

/// Depth-scaled offset from the smoothed normalized pointer.
#[inline]
pub fn cursor_parallax(pointer_smoothed: Vec2, z: f32) -> Vec2 {
    let depth = PARALLAX_DEPTH_BASE - z;
    Vec2::new(
        pointer_smoothed.x * depth * PARALLAX_X,
        pointer_smoothed.y * depth * PARALLAX_Y,
    )
}

/// Vertical offset from the smoothed scroll position; nearer particles move
/// more.
#[inline]
pub fn scroll_parallax(scroll_offset: f32, strength: f32, z: f32) -> f32 {
    scroll_offset * strength * (SCROLL_DEPTH_BASE - z)
}

/// `(1 - dist/radius)^exponent`: one at the pointer, zero at the radius and
/// beyond.
#[inline]
pub fn swirl_falloff(dist: f32, radius: f32, exponent: f32) -> f32 {
    if radius <= 0.0 || dist >= radius {
        return 0.0;
    }
    (1.0 - dist / radius).max(0.0).powf(exponent)
}

/// Swirl settings for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swirl {
    pub radius: f32,
    pub strength: f32,
    pub falloff: f32,
    /// 0..1 pointer recency.
    pub activity: f32,
}

impl Swirl {
    pub fn from_params(params: &ParameterSet, activity: f32) -> Self {
        Self {
            radius: params.swirl_radius,
            strength: params.swirl_strength,
            falloff: params.swirl_falloff,
            activity,
        }
    }

    pub fn is_active(&self) -> bool {
        self.activity > SWIRL_ACTIVITY_MIN
    }

    /// Tangential velocity impulse for a particle at `offset` from the
    /// pointer. Counter-clockwise in screen space, zero outside the radius
    /// and at the pointer itself.
    pub fn impulse(&self, offset: Vec2, z: f32) -> Vec2 {
        let dist = offset.length();
        if !self.is_active() || dist >= self.radius {
            return Vec2::ZERO;
        }
        let inv = if dist > SWIRL_MIN_DIST { 1.0 / dist } else { 0.0 };
        let tangent = offset.perp() * inv;
        let k = self.strength
            * swirl_falloff(dist, self.radius, self.falloff)
            * (SWIRL_DEPTH_BASE + SWIRL_DEPTH_SPAN * z)
            * self.activity;
        tangent * k
    }
}

/// Drift plus swirl velocity, then geometric damping of the swirl velocity.
#[inline]
pub fn integrate(particle: &mut Particle, vel_damp: f32) {
    particle.pos += particle.drift * (DRIFT_SCALE * particle.z) + particle.vel;
    particle.vel *= vel_damp;
}

/// Leaving `[-margin, size + margin]` re-enters at the opposite edge.
#[inline]
pub fn wrap_axis(value: f32, size: f32, margin: f32) -> f32 {
    if value < -margin {
        size + margin
    } else if value > size + margin {
        -margin
    } else {
        value
    }
}

#[inline]
pub fn wrap(pos: Vec2, viewport: Viewport, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, viewport.width, margin),
        wrap_axis(pos.y, viewport.height, margin),
    )
}

/// Blend between the active and idle angular velocity (rad/ms).
#[inline]
pub fn rotation_rate(rot_active: f32, rot_idle: f32, idle_factor: f32) -> f64 {
    let active = rot_active as f64;
    active + (rot_idle as f64 - active) * idle_factor.clamp(0.0, 1.0) as f64
}

/// Accumulated sky rotation.
///
/// The angle only ever grows; it is reduced modulo 2π when it is turned into
/// a rotor, so long sessions keep full precision in the trigonometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    theta: f64,
}

impl Rotation {
    pub fn advance(&mut self, rate: f64, dt_ms: f64) {
        self.theta += rate * dt_ms;
    }

    /// Total accumulated angle in radians.
    pub fn angle(&self) -> f64 {
        self.theta
    }

    /// Unit vector `(cos θ, sin θ)` for `Vec2::rotate`.
    pub fn rotor(&self) -> Vec2 {
        let (sin, cos) = self.theta.rem_euclid(TAU).sin_cos();
        Vec2::new(cos as f32, sin as f32)
    }
}

#[inline]
pub fn rotate_about(point: Vec2, center: Vec2, rotor: Vec2) -> Vec2 {
    center + rotor.rotate(point - center)
}

/// Everything the force model needs for one frame, resolved up front.
#[derive(Clone, Copy, Debug)]
pub struct ForceField {
    pub viewport: Viewport,
    pub margin: f32,
    pub pointer: Vec2,
    pub pointer_smoothed: Vec2,
    pub scroll_offset: f32,
    pub scroll_strength: f32,
    pub swirl: Swirl,
    pub vel_damp: f32,
    pub center: Vec2,
    pub rotor: Vec2,
}

impl ForceField {
    pub fn new(
        params: &ParameterSet,
        signals: &InputSignals,
        viewport: Viewport,
        rotation: &Rotation,
        now_ms: f64,
    ) -> Self {
        Self {
            viewport,
            margin: params.edge_margin,
            pointer: signals.pointer,
            pointer_smoothed: signals.pointer_smoothed,
            scroll_offset: signals.scroll_offset,
            scroll_strength: params.scroll_strength,
            swirl: Swirl::from_params(params, signals.swirl_activity(now_ms)),
            vel_damp: params.vel_damp,
            center: viewport.center(),
            rotor: rotation.rotor(),
        }
    }

    /// Move `particle` one frame and return its draw-space position.
    pub fn advance(&self, particle: &mut Particle) -> Vec2 {
        let parallax = cursor_parallax(self.pointer_smoothed, particle.z);

        particle.vel += self.swirl.impulse(particle.pos - self.pointer, particle.z);
        integrate(particle, self.vel_damp);
        particle.pos = wrap(particle.pos, self.viewport, self.margin);

        let scroll = scroll_parallax(self.scroll_offset, self.scroll_strength, particle.z);
        let draw = particle.pos + parallax + Vec2::new(0.0, scroll);
        rotate_about(draw, self.center, self.rotor)
    }
}
