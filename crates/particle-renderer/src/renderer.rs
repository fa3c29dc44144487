//! Gaussian-footprint particle rendering
//!
//! Each particle is drawn as a bell curve centred on its (continuous)
//! position, so motion between LEDs stays smooth. Contributions are summed,
//! which lets overlapping particles saturate beyond 1.0; the driver clamps on
//! output.

use led_strip::{fill, Led, Rgb};
use particle_physics::Particle;

/// Blank LED with full brightness, the starting point of every frame
pub const CLEAR: Led = Led::new(1.0, Rgb::BLACK);

/// Index range covered by `[centre - halfwidth, centre + halfwidth]`,
/// truncated toward zero and clamped to the strip
fn footprint(num_leds: usize, centre: f32, halfwidth: f32) -> Option<(usize, usize)> {
    if num_leds == 0 {
        return None;
    }
    let last = num_leds as isize - 1;
    let start = ((centre - halfwidth) as isize).clamp(0, last) as usize;
    let end = ((centre + halfwidth) as isize).clamp(0, last) as usize;
    Some((start, end))
}

/// Blend a Gaussian profile of `colour` into the buffer
///
/// LED `x` receives `colour * alpha * exp(-((x - mean) / sigma)²)` for every
/// index within `halfwidth` of `mean`.
pub fn draw_gaussian(
    leds: &mut [Led],
    mean: f32,
    sigma: f32,
    halfwidth: f32,
    colour: &Rgb,
    alpha: f32,
) {
    let Some((start, end)) = footprint(leds.len(), mean, halfwidth) else {
        return;
    };
    for (x, led) in leds.iter_mut().enumerate().take(end + 1).skip(start) {
        let arg = (x as f32 - mean) / sigma;
        let value = (-arg * arg).exp();
        led.colour.add_scaled(colour, alpha * value);
    }
}

/// Clear the buffer and draw every particle, walls included
pub fn render(leds: &mut [Led], particles: &[Particle]) {
    fill(leds, CLEAR);
    for p in particles {
        draw_gaussian(leds, p.position, p.size / 2.0, p.size, &p.colour, 1.0);
    }
}
