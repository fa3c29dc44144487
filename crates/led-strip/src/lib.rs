//! # LED Strip
//!
//! Hardware-facing pieces shared by every animation: the LED record and
//! colour types, the time source, the SK9822/APA102 frame writer and a few
//! buffer helpers.

pub mod colour;
pub mod driver;
pub mod error;
pub mod led;
pub mod mirror;
pub mod timing;

pub use colour::*;
pub use driver::*;
pub use error::*;
pub use led::*;
pub use mirror::*;
pub use timing::*;
