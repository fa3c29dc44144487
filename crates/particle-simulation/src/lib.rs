//! # Particle Simulation Engine
//!
//! Event-driven 1D elastic collision simulation: particle initialization,
//! collision search, sub-stepping and energy drift correction.

pub mod error;
pub mod params;
pub mod simulation;

pub use error::*;
pub use params::*;
pub use simulation::*;
