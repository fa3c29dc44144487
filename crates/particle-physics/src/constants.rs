//! Physical constants for the strip simulation
//!
//! Units are LEDs (position, size) and seconds (time).

/// Mass of a boundary particle
///
/// Orders of magnitude above any mobile particle so walls win every
/// momentum exchange.
pub const WALL_MASS: f32 = 1.0e9;

/// Footprint and collision diameter of a boundary particle
pub const WALL_SIZE: f32 = 1.0;

/// Upper bound on collision events resolved within one frame
pub const MAX_SUB_STEPS: usize = 10_000;
