//! Error types for LED output and timing.

use std::fmt;

/// Errors that can occur while sending a frame to the strip.
#[derive(Debug)]
pub enum DriverError {
    /// Writing to the device failed.
    Io(std::io::Error),
    /// The LED buffer does not match the strip the driver was created for.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(e) => write!(f, "Failed to write LED frame: {}", e),
            DriverError::LengthMismatch { expected, actual } => write!(
                f,
                "LED buffer has {} entries but the driver was configured for {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DriverError {
    fn from(e: std::io::Error) -> Self {
        DriverError::Io(e)
    }
}

/// Errors reported by a time source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingError {
    /// The clock produced a NaN, infinite or negative reading.
    InvalidReading(f64),
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::InvalidReading(value) => {
                write!(f, "Time source returned an invalid reading: {}", value)
            }
        }
    }
}

impl std::error::Error for TimingError {}
