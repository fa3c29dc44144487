//! Animations that paint one frame per call into the LED buffer

use led_strip::{Led, TimeSource};
use particle_simulation::ParticleSystem;

use crate::error::AnimationError;
use crate::{launch, rainbow_pulse};

/// A frame generator
pub trait Animation {
    fn name(&self) -> &'static str;

    /// Paint the next frame into `leds`
    fn run(&mut self, leds: &mut [Led]) -> Result<(), AnimationError>;
}

/// Sinusoidal rainbow with sweeping white pulses
pub struct RainbowPulse<T: TimeSource> {
    clock: T,
}

impl<T: TimeSource> RainbowPulse<T> {
    pub fn new(clock: T) -> Self {
        Self { clock }
    }
}

impl<T: TimeSource> Animation for RainbowPulse<T> {
    fn name(&self) -> &'static str {
        "rainbow_pulse"
    }

    fn run(&mut self, leds: &mut [Led]) -> Result<(), AnimationError> {
        let time = self.clock.elapsed()?;
        rainbow_pulse::paint(leds, time);
        Ok(())
    }
}

/// Blue-white pulses racing along the strip
pub struct Launch<T: TimeSource> {
    clock: T,
}

impl<T: TimeSource> Launch<T> {
    pub fn new(clock: T) -> Self {
        Self { clock }
    }
}

impl<T: TimeSource> Animation for Launch<T> {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn run(&mut self, leds: &mut [Led]) -> Result<(), AnimationError> {
        let time = self.clock.elapsed()?;
        launch::paint(leds, time);
        Ok(())
    }
}

/// Elastic particles bouncing between the ends of the strip
pub struct Particles<T: TimeSource> {
    system: ParticleSystem,
    clock: T,
}

impl<T: TimeSource> Particles<T> {
    pub fn new(system: ParticleSystem, clock: T) -> Self {
        Self { system, clock }
    }

    #[cfg(test)]
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }
}

impl<T: TimeSource> Animation for Particles<T> {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn run(&mut self, leds: &mut [Led]) -> Result<(), AnimationError> {
        let dt = self.clock.step()?;
        self.system.advance(dt)?;
        particle_renderer::render(leds, self.system.particles());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_strip::{validate_reading, Rgb, TimingError};
    use particle_physics::Particle;

    /// Clock that advances by a fixed amount on every step
    struct FixedStep {
        now: f64,
        delta: f64,
    }

    impl TimeSource for FixedStep {
        fn elapsed(&self) -> Result<f64, TimingError> {
            validate_reading(self.now)
        }

        fn step(&mut self) -> Result<f32, TimingError> {
            self.now += self.delta;
            validate_reading(self.delta).map(|d| d as f32)
        }
    }

    #[test]
    fn test_particles_frame_moves_and_renders() {
        let interior = [Particle::new(5.0, 2.0, 1.0, Rgb::new(1.0, 0.0, 0.0))];
        let system = ParticleSystem::with_particles(20, &interior).unwrap();
        let mut animation = Particles::new(system, FixedStep { now: 0.0, delta: 0.5 });
        let mut leds = vec![Led::OFF; 20];

        animation.run(&mut leds).unwrap();

        assert_eq!(animation.system().particles()[1].position, 6.0);
        assert_eq!(leds[6].colour.r, 1.0);
        assert_eq!(leds[6].colour.g, 0.0);
        assert!(leds.iter().all(|led| led.brightness == 1.0));
    }

    #[test]
    fn test_invalid_clock_reading_is_fatal() {
        let interior = [Particle::new(5.0, 2.0, 1.0, Rgb::WHITE)];
        let system = ParticleSystem::with_particles(20, &interior).unwrap();
        let mut animation = Particles::new(
            system,
            FixedStep {
                now: 0.0,
                delta: f64::NAN,
            },
        );
        let mut leds = vec![Led::OFF; 20];

        let err = animation.run(&mut leds).unwrap_err();
        assert!(matches!(err, AnimationError::Timing(_)));
        assert_eq!(animation.system().particles()[1].position, 5.0);
        // Nothing was rendered
        assert!(leds.iter().all(|led| *led == Led::OFF));
    }

    #[test]
    fn test_sinusoidal_animations_fill_strip() {
        let mut leds = vec![Led::OFF; 30];
        let mut pulse = RainbowPulse::new(FixedStep { now: 1.25, delta: 0.0 });
        pulse.run(&mut leds).unwrap();
        assert!(leds.iter().all(|led| led.brightness == 1.0));

        let mut leds = vec![Led::OFF; 30];
        let mut launch = Launch::new(FixedStep { now: 0.7, delta: 0.0 });
        launch.run(&mut leds).unwrap();
        assert!(leds.iter().all(|led| led.brightness == 1.0));
        assert_eq!(launch.name(), "launch");
    }
}
