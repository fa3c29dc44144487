//! Particle record for the strip simulation

use led_strip::Rgb;

use crate::constants::{WALL_MASS, WALL_SIZE};

/// A point-like object moving along the strip
///
/// Boundary walls and mobile particles share this record; they differ only
/// by the `immobile` flag and the wall's oversized mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Centre of the particle, in LEDs
    pub position: f32,
    /// Signed velocity, in LEDs per second
    pub velocity: f32,
    /// Staged position for the current sub-step
    pub next_position: f32,
    /// Staged velocity for the current sub-step
    pub next_velocity: f32,
    pub mass: f32,
    /// Footprint width and collision diameter
    pub size: f32,
    pub colour: Rgb,
    pub immobile: bool,
}

impl Particle {
    /// Create a mobile particle whose mass equals its size
    pub fn new(position: f32, velocity: f32, size: f32, colour: Rgb) -> Self {
        Self {
            position,
            velocity,
            next_position: position,
            next_velocity: velocity,
            mass: size,
            size,
            colour,
            immobile: false,
        }
    }

    /// Create an immobile boundary wall
    pub fn wall(position: f32, colour: Rgb) -> Self {
        Self {
            position,
            velocity: 0.0,
            next_position: position,
            next_velocity: 0.0,
            mass: WALL_MASS,
            size: WALL_SIZE,
            colour,
            immobile: true,
        }
    }

    /// Override the mass (by default mass equals size)
    #[must_use]
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Kinetic energy, `m v² / 2`
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    #[inline]
    pub fn momentum(&self) -> f32 {
        self.mass * self.velocity
    }

    /// Stage linear motion over `dt` seconds
    #[inline]
    pub fn propagate(&mut self, dt: f32) {
        self.next_position = self.position + dt * self.velocity;
        self.next_velocity = self.velocity;
    }

    /// Apply staged kinematics; walls never move
    #[inline]
    pub fn commit(&mut self) {
        if self.immobile {
            return;
        }
        self.position = self.next_position;
        self.velocity = self.next_velocity;
    }
}

/// Total kinetic energy of a set of particles
pub fn total_kinetic_energy(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

/// Total momentum of a set of particles
pub fn total_momentum(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::momentum).sum()
}
