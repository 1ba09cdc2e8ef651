use rand::prelude::*;

use crate::color::Palette;
use crate::compositor::{draw_frame, Sprite, Surface};
use crate::constants::MAX_FRAME_DT_MS;
use crate::error::Result;
use crate::forces::{rotation_rate, ForceField, Rotation};
use crate::input::InputSignals;
use crate::params::{ParamKey, ParameterSet};
use crate::particle::{Particle, ParticlePool, Viewport};
use crate::presets::preset;
use crate::twinkle::{start_twinkles, Pulse};

/// Clamp a raw frame interval to `[0, 50]` ms.
#[inline]
pub fn clamp_dt(raw_ms: f64) -> f64 {
    if raw_ms.is_nan() {
        return 0.0;
    }
    raw_ms.clamp(0.0, MAX_FRAME_DT_MS)
}

/// What one call to [`Simulation::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub dt_ms: f64,
    pub twinkles_started: usize,
    pub sprites: usize,
    pub drawn: usize,
}

/// The whole backdrop state, owned by the frame loop.
///
/// Event adapters write into [`Simulation::signals`] and the tuning surface
/// goes through [`Simulation::set_param`] / [`Simulation::apply_preset`];
/// each frame then observes whatever those left behind.
///
/// Typical usage:
/// - Construct with `Simulation::new(viewport, params, seed)`
/// - Feed pointer and scroll readings into `signals`
/// - Call `step(now_ms, &mut surface)` once per display refresh
/// - Call `resize` on viewport changes and `reseed` on demand
pub struct Simulation {
    pub signals: InputSignals,
    params: ParameterSet,
    pool: ParticlePool,
    palette: Palette,
    rotation: Rotation,
    rng: StdRng,
    sprites: Vec<Sprite>,
    last_frame_ms: Option<f64>,
}

impl Simulation {
    pub fn new(viewport: Viewport, params: ParameterSet, seed: u64) -> Self {
        Self::with_palette(viewport, params, Palette::galaxy(), seed)
    }

    pub fn with_palette(
        viewport: Viewport,
        params: ParameterSet,
        palette: Palette,
        seed: u64,
    ) -> Self {
        let mut sim = Self {
            signals: InputSignals::default(),
            params,
            pool: ParticlePool::new(),
            palette,
            rotation: Rotation::default(),
            rng: StdRng::seed_from_u64(seed),
            sprites: Vec::new(),
            last_frame_ms: None,
        };
        sim.pool.initialize(viewport, &sim.params, &sim.palette, &mut sim.rng);
        sim
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Direct access for bulk edits. Changes to `density`, `dominant_weight`
    /// or `edge_margin` made here only take effect on the next
    /// [`Simulation::reseed`].
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.pool.particles_mut()
    }

    pub fn viewport(&self) -> Viewport {
        self.pool.viewport()
    }

    /// Total rotation accumulated so far, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation.angle()
    }

    /// Sprites produced by the last frame, in pool order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Rebuild the pool from scratch with the current parameters.
    pub fn reseed(&mut self) {
        let viewport = self.pool.viewport();
        self.pool.initialize(viewport, &self.params, &self.palette, &mut self.rng);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.pool.initialize(viewport, &self.params, &self.palette, &mut self.rng);
    }

    /// Merge a named preset and rebuild the pool.
    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset = preset(name)?;
        self.params.apply_preset(preset);
        log::info!("[params] preset '{}' applied", preset.name);
        self.reseed();
        Ok(())
    }

    /// Write one control (clamped). Spawn-time controls rebuild the pool.
    pub fn set_param(&mut self, key: ParamKey, value: f32) -> Result<f32> {
        let stored = self.params.set(key, value)?;
        if key.reseeds_pool() {
            self.reseed();
        }
        Ok(stored)
    }

    pub fn set_param_by_name(&mut self, name: &str, value: f32) -> Result<f32> {
        let key = ParamKey::from_name(name)
            .ok_or_else(|| crate::error::Error::UnknownParameter(name.to_string()))?;
        self.set_param(key, value)
    }

    fn tick_clock(&mut self, now_ms: f64) -> f64 {
        let dt = self.last_frame_ms.map_or(0.0, |last| clamp_dt(now_ms - last));
        self.last_frame_ms = Some(now_ms);
        dt
    }

    /// Advance the simulation to `now_ms` and rebuild the sprite list without
    /// drawing.
    pub fn advance(&mut self, now_ms: f64) -> FrameStats {
        let dt_ms = self.tick_clock(now_ms);
        let params = &self.params;

        self.signals.smooth(params.scroll_damp);

        let idle = self
            .signals
            .idle_factor(now_ms, params.idle_delay_ms, params.idle_fade_ms);
        self.rotation
            .advance(rotation_rate(params.rot_active, params.rot_idle, idle), dt_ms);

        let twinkles_started = start_twinkles(
            self.pool.particles_mut(),
            params,
            now_ms,
            dt_ms,
            &mut self.rng,
        );

        let field = ForceField::new(
            params,
            &self.signals,
            self.pool.viewport(),
            &self.rotation,
            now_ms,
        );
        self.sprites.clear();
        for particle in self.pool.particles_mut() {
            let pos = field.advance(particle);
            let pulse = Pulse::at(particle.twinkle_until, now_ms, params);
            self.sprites.push(Sprite {
                pos,
                radius: particle.radius * pulse.size_mul,
                alpha: particle.alpha * pulse.alpha_mul,
                color: particle.color,
            });
        }

        FrameStats {
            dt_ms,
            twinkles_started,
            sprites: self.sprites.len(),
            drawn: 0,
        }
    }

    /// One full frame: advance, then paint onto `surface`.
    pub fn step<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameStats {
        let mut stats = self.advance(now_ms);
        stats.drawn = draw_frame(
            surface,
            self.pool.viewport(),
            self.signals.scroll_offset,
            self.params.vignette_outer,
            &self.sprites,
        );
        stats
    }
}
