//! Rainbow pulse: a drifting rainbow with white pulses sweeping along it

use led_strip::{Hsv, Led};

const BRIGHTNESS_TIME_WAVELENGTH: f64 = -0.2;
const BRIGHTNESS_SPACE_WAVELENGTH: f32 = 800.0;
const HUE_TIME_WAVELENGTH: f64 = 0.5;
const HUE_SPACE_WAVELENGTH: f32 = 1000.0;

/// Paint the pattern for `time` seconds after start
pub fn paint(leds: &mut [Led], time: f64) {
    for (i, led) in leds.iter_mut().enumerate() {
        let space = (i as f32).powf(1.5);
        let h = (time / HUE_TIME_WAVELENGTH).sin() as f32 + space / HUE_SPACE_WAVELENGTH;
        let wave = (time / BRIGHTNESS_TIME_WAVELENGTH
            + f64::from(space / BRIGHTNESS_SPACE_WAVELENGTH))
        .sin() as f32;
        let s = 1.0 - (-800.0 * (wave * 0.5 + 0.5)).exp();
        // Desaturated (white) regions are brighter than the rainbow
        let v = (20.0 - 19.0 * s) / 20.0;
        led.brightness = 1.0;
        led.colour = Hsv::new(h, s, v).to_rgb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_strip_at_time_zero() {
        let mut leds = vec![Led::OFF; 4];
        paint(&mut leds, 0.0);
        // Fully saturated red at the dimmest value
        assert!((leds[0].colour.r - 0.05).abs() < 1e-6);
        assert!(leds[0].colour.g.abs() < 1e-6);
        assert!(leds[0].colour.b.abs() < 1e-6);
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut leds = vec![Led::OFF; 288];
        for step in 0..50 {
            paint(&mut leds, step as f64 * 0.37);
            for led in &leds {
                assert_eq!(led.brightness, 1.0);
                for c in [led.colour.r, led.colour.g, led.colour.b] {
                    assert!((0.0..=1.0).contains(&c), "channel out of range: {c}");
                }
                let max = led.colour.r.max(led.colour.g).max(led.colour.b);
                assert!(max >= 0.05 - 1e-6);
            }
        }
    }
}
