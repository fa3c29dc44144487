//! Error types for the animation binary.

use std::fmt;

use led_strip::{DriverError, TimingError};
use particle_simulation::SimulationError;

/// Errors that can occur while producing a frame.
#[derive(Debug)]
pub enum AnimationError {
    /// The time source could not be read.
    Timing(TimingError),
    /// The particle physics failed.
    Simulation(SimulationError),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::Timing(e) => write!(f, "Timing error: {}", e),
            AnimationError::Simulation(e) => write!(f, "Simulation error: {}", e),
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimationError::Timing(e) => Some(e),
            AnimationError::Simulation(e) => Some(e),
        }
    }
}

impl From<TimingError> for AnimationError {
    fn from(e: TimingError) -> Self {
        AnimationError::Timing(e)
    }
}

impl From<SimulationError> for AnimationError {
    fn from(e: SimulationError) -> Self {
        AnimationError::Simulation(e)
    }
}

/// Errors that stop the main loop.
#[derive(Debug)]
pub enum AppError {
    /// Opening or writing the LED device failed.
    Driver(DriverError),
    /// Building or running the animation failed.
    Animation(AnimationError),
    /// The Ctrl-C handler could not be installed.
    Signal(ctrlc::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Driver(e) => write!(f, "LED driver error: {}", e),
            AppError::Animation(e) => write!(f, "Animation error: {}", e),
            AppError::Signal(e) => write!(f, "Signal handler error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Driver(e) => Some(e),
            AppError::Animation(e) => Some(e),
            AppError::Signal(e) => Some(e),
        }
    }
}

impl From<DriverError> for AppError {
    fn from(e: DriverError) -> Self {
        AppError::Driver(e)
    }
}

impl From<AnimationError> for AppError {
    fn from(e: AnimationError) -> Self {
        AppError::Animation(e)
    }
}

impl From<SimulationError> for AppError {
    fn from(e: SimulationError) -> Self {
        AppError::Animation(AnimationError::Simulation(e))
    }
}

impl From<ctrlc::Error> for AppError {
    fn from(e: ctrlc::Error) -> Self {
        AppError::Signal(e)
    }
}
