//! Live-tunable controls.
//!
//! [`ParameterSet`] is a single mutable record: the frame loop reads the
//! typed fields directly, while the tuning surface goes through the
//! name-keyed [`ParamKey`] table, which also owns each control's default and
//! documented range. Writes through the table are clamped to that range.

use crate::error::{Error, Result};
use crate::presets::{Preset, DEFAULT_PRESET};

/// Every numeric control, in the order a tuning panel lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    DominantWeight,
    Density,
    EdgeMargin,
    TwinkleRate,
    TwinkleMs,
    TwinkleDepth,
    TwinkleSizePulse,
    SwirlRadius,
    SwirlStrength,
    SwirlFalloff,
    VelDamp,
    ScrollStrength,
    ScrollDamp,
    RotActive,
    RotIdle,
    IdleDelayMs,
    IdleFadeMs,
    VignetteOuter,
}

impl ParamKey {
    pub const ALL: [ParamKey; 18] = [
        ParamKey::DominantWeight,
        ParamKey::Density,
        ParamKey::EdgeMargin,
        ParamKey::TwinkleRate,
        ParamKey::TwinkleMs,
        ParamKey::TwinkleDepth,
        ParamKey::TwinkleSizePulse,
        ParamKey::SwirlRadius,
        ParamKey::SwirlStrength,
        ParamKey::SwirlFalloff,
        ParamKey::VelDamp,
        ParamKey::ScrollStrength,
        ParamKey::ScrollDamp,
        ParamKey::RotActive,
        ParamKey::RotIdle,
        ParamKey::IdleDelayMs,
        ParamKey::IdleFadeMs,
        ParamKey::VignetteOuter,
    ];

    /// Control name as exposed to the tuning surface.
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::DominantWeight => "dominantWeight",
            ParamKey::Density => "density",
            ParamKey::EdgeMargin => "edgeMargin",
            ParamKey::TwinkleRate => "twinkleRate",
            ParamKey::TwinkleMs => "twinkleMs",
            ParamKey::TwinkleDepth => "twinkleDepth",
            ParamKey::TwinkleSizePulse => "twinkleSizePulse",
            ParamKey::SwirlRadius => "swirlRadius",
            ParamKey::SwirlStrength => "swirlStrength",
            ParamKey::SwirlFalloff => "swirlFalloff",
            ParamKey::VelDamp => "velDamp",
            ParamKey::ScrollStrength => "scrollStrength",
            ParamKey::ScrollDamp => "scrollDamp",
            ParamKey::RotActive => "rotActive",
            ParamKey::RotIdle => "rotIdle",
            ParamKey::IdleDelayMs => "idleDelayMs",
            ParamKey::IdleFadeMs => "idleFadeMs",
            ParamKey::VignetteOuter => "vignetteOuter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Inclusive `(min, max)` the control is clamped to.
    pub fn range(self) -> (f32, f32) {
        match self {
            ParamKey::DominantWeight => (0.5, 1.0),
            ParamKey::Density => (0.5, 2.0),
            ParamKey::EdgeMargin => (0.0, 200.0),
            ParamKey::TwinkleRate => (0.0, 0.2),
            ParamKey::TwinkleMs => (400.0, 2000.0),
            ParamKey::TwinkleDepth => (0.5, 0.99),
            ParamKey::TwinkleSizePulse => (0.0, 0.3),
            ParamKey::SwirlRadius => (60.0, 400.0),
            ParamKey::SwirlStrength => (0.02, 0.25),
            ParamKey::SwirlFalloff => (1.2, 3.0),
            ParamKey::VelDamp => (0.85, 0.98),
            ParamKey::ScrollStrength => (0.02, 0.2),
            ParamKey::ScrollDamp => (0.04, 0.2),
            ParamKey::RotActive => (0.000_001, 0.000_01),
            ParamKey::RotIdle => (0.000_004, 0.000_04),
            ParamKey::IdleDelayMs => (500.0, 3000.0),
            ParamKey::IdleFadeMs => (200.0, 2000.0),
            ParamKey::VignetteOuter => (0.9, 1.6),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            ParamKey::DominantWeight => 0.85,
            ParamKey::Density => 1.0,
            ParamKey::EdgeMargin => 80.0,
            ParamKey::TwinkleRate => 0.08,
            ParamKey::TwinkleMs => 1100.0,
            ParamKey::TwinkleDepth => 0.85,
            ParamKey::TwinkleSizePulse => 0.12,
            ParamKey::SwirlRadius => 200.0,
            ParamKey::SwirlStrength => 0.10,
            ParamKey::SwirlFalloff => 2.0,
            ParamKey::VelDamp => 0.92,
            ParamKey::ScrollStrength => 0.10,
            ParamKey::ScrollDamp => 0.10,
            ParamKey::RotActive => 0.000_003,
            ParamKey::RotIdle => 0.000_010,
            ParamKey::IdleDelayMs => 1200.0,
            ParamKey::IdleFadeMs => 800.0,
            ParamKey::VignetteOuter => 1.2,
        }
    }

    pub fn clamp(self, value: f32) -> f32 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }

    /// Controls whose change only shows up once the pool is rebuilt.
    pub fn reseeds_pool(self) -> bool {
        matches!(
            self,
            ParamKey::Density | ParamKey::DominantWeight | ParamKey::EdgeMargin
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSet {
    pub dominant_weight: f32,
    pub density: f32,
    pub edge_margin: f32,
    pub twinkle_rate: f32,
    pub twinkle_ms: f32,
    pub twinkle_depth: f32,
    pub twinkle_size_pulse: f32,
    pub swirl_radius: f32,
    pub swirl_strength: f32,
    pub swirl_falloff: f32,
    pub vel_damp: f32,
    pub scroll_strength: f32,
    pub scroll_damp: f32,
    pub rot_active: f32,
    pub rot_idle: f32,
    pub idle_delay_ms: f32,
    pub idle_fade_ms: f32,
    pub vignette_outer: f32,
    /// Name of the last preset merged in.
    pub preset: String,
}

impl Default for ParameterSet {
    fn default() -> Self {
        let mut params = Self {
            dominant_weight: 0.0,
            density: 0.0,
            edge_margin: 0.0,
            twinkle_rate: 0.0,
            twinkle_ms: 0.0,
            twinkle_depth: 0.0,
            twinkle_size_pulse: 0.0,
            swirl_radius: 0.0,
            swirl_strength: 0.0,
            swirl_falloff: 0.0,
            vel_damp: 0.0,
            scroll_strength: 0.0,
            scroll_damp: 0.0,
            rot_active: 0.0,
            rot_idle: 0.0,
            idle_delay_ms: 0.0,
            idle_fade_ms: 0.0,
            vignette_outer: 0.0,
            preset: DEFAULT_PRESET.to_string(),
        };
        for key in ParamKey::ALL {
            *params.slot_mut(key) = key.default_value();
        }
        params
    }
}

impl ParameterSet {
    fn slot_mut(&mut self, key: ParamKey) -> &mut f32 {
        match key {
            ParamKey::DominantWeight => &mut self.dominant_weight,
            ParamKey::Density => &mut self.density,
            ParamKey::EdgeMargin => &mut self.edge_margin,
            ParamKey::TwinkleRate => &mut self.twinkle_rate,
            ParamKey::TwinkleMs => &mut self.twinkle_ms,
            ParamKey::TwinkleDepth => &mut self.twinkle_depth,
            ParamKey::TwinkleSizePulse => &mut self.twinkle_size_pulse,
            ParamKey::SwirlRadius => &mut self.swirl_radius,
            ParamKey::SwirlStrength => &mut self.swirl_strength,
            ParamKey::SwirlFalloff => &mut self.swirl_falloff,
            ParamKey::VelDamp => &mut self.vel_damp,
            ParamKey::ScrollStrength => &mut self.scroll_strength,
            ParamKey::ScrollDamp => &mut self.scroll_damp,
            ParamKey::RotActive => &mut self.rot_active,
            ParamKey::RotIdle => &mut self.rot_idle,
            ParamKey::IdleDelayMs => &mut self.idle_delay_ms,
            ParamKey::IdleFadeMs => &mut self.idle_fade_ms,
            ParamKey::VignetteOuter => &mut self.vignette_outer,
        }
    }

    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::DominantWeight => self.dominant_weight,
            ParamKey::Density => self.density,
            ParamKey::EdgeMargin => self.edge_margin,
            ParamKey::TwinkleRate => self.twinkle_rate,
            ParamKey::TwinkleMs => self.twinkle_ms,
            ParamKey::TwinkleDepth => self.twinkle_depth,
            ParamKey::TwinkleSizePulse => self.twinkle_size_pulse,
            ParamKey::SwirlRadius => self.swirl_radius,
            ParamKey::SwirlStrength => self.swirl_strength,
            ParamKey::SwirlFalloff => self.swirl_falloff,
            ParamKey::VelDamp => self.vel_damp,
            ParamKey::ScrollStrength => self.scroll_strength,
            ParamKey::ScrollDamp => self.scroll_damp,
            ParamKey::RotActive => self.rot_active,
            ParamKey::RotIdle => self.rot_idle,
            ParamKey::IdleDelayMs => self.idle_delay_ms,
            ParamKey::IdleFadeMs => self.idle_fade_ms,
            ParamKey::VignetteOuter => self.vignette_outer,
        }
    }

    /// Write a control, clamped to its range. Returns the stored value.
    pub fn set(&mut self, key: ParamKey, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue {
                name: key.name(),
                value,
            });
        }
        let stored = key.clamp(value);
        *self.slot_mut(key) = stored;
        Ok(stored)
    }

    pub fn get_by_name(&self, name: &str) -> Result<f32> {
        ParamKey::from_name(name)
            .map(|key| self.get(key))
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))
    }

    pub fn set_by_name(&mut self, name: &str, value: f32) -> Result<f32> {
        let key =
            ParamKey::from_name(name).ok_or_else(|| Error::UnknownParameter(name.to_string()))?;
        self.set(key, value)
    }

    /// Bulk merge: every control the preset names is overwritten, the rest
    /// keep whatever was last written.
    pub fn apply_preset(&mut self, preset: &Preset) {
        for &(key, value) in preset.values {
            *self.slot_mut(key) = key.clamp(value);
        }
        self.preset = preset.name.to_string();
    }
}
