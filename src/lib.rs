//! # driftfield
//!
//! An ambient background particle field: faint white dots drifting across
//! the window, bouncing off the edges, pushed away by the pointer and
//! brightening as it gets close.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::Simulation;
//!
//! fn main() -> Result<(), driftfield::RunError> {
//!     Simulation::new()
//!         .with_particle_count(40)
//!         .run()
//! }
//! ```
//!
//! ## Architecture
//!
//! The simulation core ([`ParticleField`]) is plain CPU state with a
//! synchronous [`ParticleField::tick`], decoupled from windowing, timing,
//! and the GPU. Rendering goes through the [`Surface`] trait; the built-in
//! wgpu backend batches particles into an instanced draw, and tests swap in
//! a recording surface instead.
//!
//! Initial particle state is randomized through a seedable
//! [`SpawnContext`], so a fixed seed reproduces the exact same field.
//!
//! ## Reduced motion
//!
//! [`Simulation::with_reduced_motion`] disables the pointer repulsion while
//! leaving the ambient drift and the render loop untouched.

pub mod error;
pub mod field;
pub mod input;
pub mod spawn;
pub mod surface;
pub mod time;

mod gpu;
mod simulation;

pub use error::{GpuError, RunError};
pub use field::{
    Particle, ParticleField, Viewport, ALPHA_BOOST, DEFAULT_PARTICLE_COUNT, REPULSION_RADIUS,
    REPULSION_STRENGTH,
};
pub use glam::Vec2;
pub use simulation::Simulation;
pub use spawn::SpawnContext;
pub use surface::Surface;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::error::{GpuError, RunError};
    pub use crate::field::{Particle, ParticleField, Viewport};
    pub use crate::input::Pointer;
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SpawnContext;
    pub use crate::surface::Surface;
    pub use crate::time::Time;
    pub use crate::Vec2;
}
