//! LED record shared by animations and drivers

use crate::Rgb;

/// One addressable LED: a global brightness and a colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Led {
    pub brightness: f32,
    pub colour: Rgb,
}

impl Led {
    /// Dark LED, used to blank the strip on shutdown
    pub const OFF: Led = Led {
        brightness: 0.0,
        colour: Rgb::BLACK,
    };

    pub const fn new(brightness: f32, colour: Rgb) -> Self {
        Self { brightness, colour }
    }
}

impl Default for Led {
    fn default() -> Self {
        Self::OFF
    }
}

/// Set every LED in the buffer to `led`
pub fn fill(leds: &mut [Led], led: Led) {
    leds.iter_mut().for_each(|it| *it = led);
}
