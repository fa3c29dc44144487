//! Launch: narrow white-blue pulses racing along the strip, bunching up
//! toward the start

use led_strip::{Hsv, Led};

const TIME_WAVELENGTH: f64 = -0.3;
const SPACE_WAVELENGTH: f64 = 30.0;
const THRESHOLD: f32 = 0.8;
const HUE: f32 = 0.6;

/// Paint the pattern for `time` seconds after start
pub fn paint(leds: &mut [Led], time: f64) {
    let n = leds.len() as f32;
    for (i, led) in leds.iter_mut().enumerate() {
        let space = (i as f32 / n).powf(0.1) * n;
        let phase = time / TIME_WAVELENGTH + f64::from(space) / SPACE_WAVELENGTH;
        let wave = (std::f64::consts::TAU * phase).sin() as f32;
        let arg = if wave < THRESHOLD {
            0.0
        } else {
            ((wave - THRESHOLD) / (1.0 - THRESHOLD)).powi(8)
        };
        led.brightness = 1.0;
        led.colour = Hsv::new(HUE, 1.0 - arg.powi(4), arg).to_rgb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_strip::Rgb;

    #[test]
    fn test_dark_below_threshold() {
        let mut leds = vec![Led::OFF; 8];
        paint(&mut leds, 0.0);
        assert_eq!(leds[0].colour, Rgb::BLACK);
        assert_eq!(leds[0].brightness, 1.0);
    }

    #[test]
    fn test_peak_is_white() {
        let mut leds = vec![Led::OFF; 8];
        // 2π(0.225 / -0.3) = -3π/2, where sin peaks at 1
        paint(&mut leds, 0.225);
        let c = leds[0].colour;
        assert!((c.r - 1.0).abs() < 1e-3, "{c:?}");
        assert!((c.g - 1.0).abs() < 1e-3, "{c:?}");
        assert!((c.b - 1.0).abs() < 1e-3, "{c:?}");
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut leds = vec![Led::OFF; 144];
        for step in 0..40 {
            paint(&mut leds, step as f64 * 0.013);
            for led in &leds {
                for c in [led.colour.r, led.colour.g, led.colour.b] {
                    assert!((0.0..=1.0).contains(&c));
                }
            }
        }
    }
}
