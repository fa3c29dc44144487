//! # Particle Renderer
//!
//! Paints particle state onto an LED buffer.

pub mod renderer;

pub use renderer::*;
