//! Construction parameters for the particle animation

use crate::SimulationError;

/// Parameters used to seed a [`crate::ParticleSystem`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    /// Number of mobile particles (walls not included)
    pub particle_count: usize,
    /// Speed range, in LEDs per second; the sign is chosen at random
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Size range, in LEDs; mass equals size
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            particle_count: 8,
            min_velocity: 30.0,
            max_velocity: 50.0,
            min_size: 1.0,
            max_size: 5.0,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            self.min_velocity,
            self.max_velocity,
            self.min_size,
            self.max_size,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(SimulationError::InvalidParams("ranges must be finite"));
        }
        if self.min_velocity < 0.0 || self.min_velocity > self.max_velocity {
            return Err(SimulationError::InvalidParams(
                "velocity range must satisfy 0 <= min <= max",
            ));
        }
        if self.min_size <= 0.0 || self.min_size > self.max_size {
            return Err(SimulationError::InvalidParams(
                "size range must satisfy 0 < min <= max",
            ));
        }
        Ok(())
    }
}
