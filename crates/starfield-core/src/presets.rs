use crate::error::{Error, Result};
use crate::params::ParamKey;

/// Immutable named override bundle, merged wholesale into a `ParameterSet`.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub values: &'static [(ParamKey, f32)],
}

impl Preset {
    pub fn value(&self, key: ParamKey) -> Option<f32> {
        self.values
            .iter()
            .find_map(|&(k, v)| (k == key).then_some(v))
    }
}

pub const DEFAULT_PRESET: &str = "Calm Nebula";

use ParamKey::*;

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Calm Nebula",
        values: &[
            (DominantWeight, 0.9),
            (Density, 1.0),
            (TwinkleRate, 0.06),
            (TwinkleMs, 1200.0),
            (TwinkleDepth, 0.8),
            (SwirlRadius, 180.0),
            (SwirlStrength, 0.07),
            (SwirlFalloff, 2.0),
            (ScrollStrength, 0.08),
            (RotActive, 0.000_003),
            (RotIdle, 0.000_010),
            (VignetteOuter, 1.2),
        ],
    },
    Preset {
        name: "Spiral Galaxy",
        values: &[
            (DominantWeight, 0.8),
            (Density, 1.2),
            (TwinkleRate, 0.07),
            (TwinkleMs, 1400.0),
            (TwinkleDepth, 0.9),
            (SwirlRadius, 260.0),
            (SwirlStrength, 0.12),
            (SwirlFalloff, 1.8),
            (ScrollStrength, 0.12),
            (RotActive, 0.000_004),
            (RotIdle, 0.000_014),
            (VignetteOuter, 1.35),
        ],
    },
    Preset {
        name: "Starfield (calm)",
        values: &[
            (DominantWeight, 0.95),
            (Density, 0.9),
            (TwinkleRate, 0.04),
            (TwinkleMs, 1000.0),
            (TwinkleDepth, 0.7),
            (SwirlRadius, 140.0),
            (SwirlStrength, 0.05),
            (SwirlFalloff, 2.4),
            (ScrollStrength, 0.06),
            (RotActive, 0.000_002),
            (RotIdle, 0.000_007),
            (VignetteOuter, 1.15),
        ],
    },
    Preset {
        name: "Swirl Storm",
        values: &[
            (DominantWeight, 0.75),
            (Density, 1.4),
            (TwinkleRate, 0.10),
            (TwinkleMs, 1200.0),
            (TwinkleDepth, 0.95),
            (SwirlRadius, 300.0),
            (SwirlStrength, 0.16),
            (SwirlFalloff, 1.6),
            (ScrollStrength, 0.14),
            (RotActive, 0.000_005),
            (RotIdle, 0.000_018),
            (VignetteOuter, 1.4),
        ],
    },
];

pub fn preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}
