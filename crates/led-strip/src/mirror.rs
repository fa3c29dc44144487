//! Strip mirroring

use crate::Led;

/// Copy the first half of the strip onto the second half, reversed
///
/// The result is symmetric about the centre; the middle LED of an odd-length
/// strip is left as is.
pub fn mirror(leds: &mut [Led]) {
    let len = leds.len();
    for i in 0..len / 2 {
        leds[len - 1 - i] = leds[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn led(level: f32) -> Led {
        Led::new(1.0, Rgb::new(level, 0.0, 0.0))
    }

    #[test]
    fn test_mirror_even() {
        let mut leds: Vec<Led> = (0..6).map(|i| led(i as f32)).collect();
        mirror(&mut leds);
        let reds: Vec<f32> = leds.iter().map(|l| l.colour.r).collect();
        assert_eq!(reds, vec![0.0, 1.0, 2.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mirror_odd_keeps_centre() {
        let mut leds: Vec<Led> = (0..5).map(|i| led(i as f32)).collect();
        mirror(&mut leds);
        let reds: Vec<f32> = leds.iter().map(|l| l.colour.r).collect();
        assert_eq!(reds, vec![0.0, 1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mirror_tiny_strips() {
        let mut empty: Vec<Led> = Vec::new();
        mirror(&mut empty);
        let mut single = vec![led(3.0)];
        mirror(&mut single);
        assert_eq!(single[0].colour.r, 3.0);
    }
}
