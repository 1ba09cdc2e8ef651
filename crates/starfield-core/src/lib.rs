//! Platform-free core of the starfield backdrop.
//!
//! Everything here runs on the host as well as on `wasm32`: the parameter set
//! and presets, the particle pool, the input signal struct fed by the web
//! front-end, the per-frame force model, the twinkle scheduler and the
//! compositor, which paints through the [`Surface`] trait.

pub mod color;
pub mod compositor;
pub mod constants;
pub mod error;
pub mod forces;
pub mod input;
pub mod params;
pub mod particle;
pub mod presets;
pub mod simulation;
pub mod twinkle;

pub use color::*;
pub use compositor::*;
pub use error::*;
pub use forces::*;
pub use input::*;
pub use params::*;
pub use particle::*;
pub use presets::*;
pub use simulation::*;
pub use twinkle::*;
