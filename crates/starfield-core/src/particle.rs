use glam::Vec2;
use rand::prelude::*;

use crate::color::{Palette, Rgb};
use crate::constants::*;
use crate::params::{ParamKey, ParameterSet};

/// Logical (CSS pixel) size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw into.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn max_dim(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// One drifting light.
///
/// `pos` is the persistent simulation-space position; parallax, scroll and
/// rotation are applied on top of it every frame and never written back.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Depth in `[0.2, 1.2]`; smaller is nearer and reacts more.
    pub z: f32,
    pub radius: f32,
    /// Fixed signed drift chosen at spawn.
    pub drift: Vec2,
    /// Swirl velocity, damped every frame.
    pub vel: Vec2,
    pub alpha: f32,
    pub color: Rgb,
    /// Absolute time (ms) the current twinkle ends.
    pub twinkle_until: Option<f64>,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(
        viewport: Viewport,
        margin: f32,
        dominant_weight: f32,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let color = palette.pick(dominant_weight, rng);
        let x = rng.gen::<f32>() * (viewport.width + margin * 2.0) - margin;
        let y = rng.gen::<f32>() * (viewport.height + margin * 2.0) - margin;
        Self {
            pos: Vec2::new(x, y),
            z: DEPTH_MIN + rng.gen::<f32>() * DEPTH_SPAN,
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            drift: Vec2::new(
                signed_speed(rng, DRIFT_X_MIN, DRIFT_X_SPAN),
                signed_speed(rng, DRIFT_Y_MIN, DRIFT_Y_SPAN),
            ),
            vel: Vec2::ZERO,
            alpha: ALPHA_MIN + rng.gen::<f32>() * ALPHA_SPAN,
            color,
            twinkle_until: None,
        }
    }
}

fn signed_speed<R: Rng + ?Sized>(rng: &mut R, min: f32, span: f32) -> f32 {
    let speed = rng.gen::<f32>() * span + min;
    if rng.gen_bool(0.5) {
        -speed
    } else {
        speed
    }
}

/// Number of particles for a viewport: one per 2800 px², clamped to
/// `[220, 1200]`, then scaled by `density`.
pub fn particle_count(viewport: Viewport, density: f32) -> usize {
    if viewport.is_empty() {
        return 0;
    }
    let base = (viewport.area() / AREA_PER_PARTICLE).round() as usize;
    let clamped = base.clamp(MIN_BASE_COUNT, MAX_BASE_COUNT);
    let density = if density.is_finite() {
        ParamKey::Density.clamp(density)
    } else {
        ParamKey::Density.default_value()
    };
    (clamped as f32 * density).round() as usize
}

#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection for `viewport`. Nothing from the previous
    /// generation survives.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        params: &ParameterSet,
        palette: &Palette,
        rng: &mut R,
    ) {
        let count = particle_count(viewport, params.density);
        let margin = params.edge_margin;
        self.viewport = viewport;
        self.particles = (0..count)
            .map(|_| Particle::spawn(viewport, margin, params.dominant_weight, palette, rng))
            .collect();
        log::debug!(
            "[pool] {} particles for {}x{} (density {:.2}, margin {})",
            count,
            viewport.width,
            viewport.height,
            params.density,
            margin
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
