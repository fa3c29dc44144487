//! # Particle Physics Engine
//!
//! Core physics for one-dimensional elastic collisions between particles
//! on an LED strip: the particle record, collision timing, collision
//! response and kinetic energy bookkeeping.

pub mod collision;
pub mod constants;
pub mod particle;

pub use collision::*;
pub use constants::*;
pub use particle::*;
