use rand::prelude::*;

use crate::constants::{ACCENT_HEX, DOMINANT_HEX};
use crate::error::{Error, Result};

/// Opaque 8-bit RGB color. Opacity is supplied separately at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, hex digits are
    /// case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Malformed palette entries render as opaque white instead of failing.
    pub fn from_hex_or_white(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|e| {
            log::warn!("[palette] {e}; using white");
            Self::WHITE
        })
    }

    pub fn to_css_rgba(self, alpha: f32) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

/// Spawn palette split into a dominant group and a rarer accent group.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub dominant: Vec<Rgb>,
    pub accents: Vec<Rgb>,
}

impl Palette {
    pub fn from_hex(dominant: &[&str], accents: &[&str]) -> Self {
        Self {
            dominant: dominant.iter().map(|h| Rgb::from_hex_or_white(h)).collect(),
            accents: accents.iter().map(|h| Rgb::from_hex_or_white(h)).collect(),
        }
    }

    /// Warm yellows with orange and cyan accents.
    pub fn galaxy() -> Self {
        Self::from_hex(&DOMINANT_HEX, &ACCENT_HEX)
    }

    /// Draw from the dominant group with probability `dominant_weight`,
    /// otherwise from the accents. An empty group yields white.
    pub fn pick<R: Rng + ?Sized>(&self, dominant_weight: f32, rng: &mut R) -> Rgb {
        let group = if rng.gen::<f32>() < dominant_weight {
            &self.dominant
        } else {
            &self.accents
        };
        group.choose(rng).copied().unwrap_or(Rgb::WHITE)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::galaxy()
    }
}
