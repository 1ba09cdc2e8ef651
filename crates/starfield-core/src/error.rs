use thiserror::Error;

/// Failures surfaced by the name-keyed control interface and color parsing.
///
/// The per-frame path never produces these; they only come back from calls
/// made by the tuning surface or while building palettes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("parameter `{name}` rejected non-finite value {value}")]
    NonFiniteValue { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
