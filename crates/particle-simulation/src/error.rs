//! Error types for the particle simulation.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur while building or stepping a particle system.
#[derive(Debug)]
pub enum SimulationError {
    /// Construction parameters are out of range.
    InvalidParams(&'static str),
    /// The particle store could not be allocated.
    Allocation(TryReserveError),
    /// The frame delta was NaN, infinite or negative.
    InvalidTimeStep(f32),
    /// Too many collision events in one frame.
    SubStepLimit { remaining: f32 },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParams(msg) => write!(f, "Invalid particle parameters: {}", msg),
            SimulationError::Allocation(e) => write!(f, "Failed to allocate particles: {}", e),
            SimulationError::InvalidTimeStep(dt) => write!(f, "Invalid time step: {}", dt),
            SimulationError::SubStepLimit { remaining } => write!(
                f,
                "Collision sub-step limit reached with {}s of the frame left",
                remaining
            ),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for SimulationError {
    fn from(e: TryReserveError) -> Self {
        SimulationError::Allocation(e)
    }
}
