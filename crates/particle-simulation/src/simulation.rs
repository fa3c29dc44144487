//! Event-driven particle simulation
//!
//! Each frame advances the system by exactly `dt` seconds. Instead of fixed
//! integration steps, the frame is split at every collision: find the earliest
//! collision, move everything up to it, resolve it, and repeat with the time
//! that is left. Walls are ordinary particles with a huge mass and the
//! `immobile` flag set, sitting at both ends of the strip.

use led_strip::{Hsv, Rgb};
use particle_physics::{
    collision_time, post_collision_velocity, total_kinetic_energy, total_momentum, Particle,
    MAX_SUB_STEPS, WALL_SIZE,
};
use rand::Rng;

use crate::{ParticleParams, SimulationError};

/// Earliest collision found in a sub-step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    /// Index of the mobile particle that found the collision
    pub a: usize,
    /// Index of its partner
    pub b: usize,
    /// Seconds from the start of the sub-step
    pub time: f32,
}

/// 1D elastic collision simulation on a strip of `num_leds` LEDs
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    num_leds: usize,
    /// Left wall, mobile particles, right wall, in that order
    particles: Vec<Particle>,
    /// Kinetic energy right after construction; target for drift correction
    total_energy: f32,
}

impl ParticleSystem {
    /// Create a system with randomized particles spread evenly along the strip
    pub fn new<R: Rng>(
        num_leds: usize,
        params: &ParticleParams,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        if num_leds < 3 {
            return Err(SimulationError::InvalidParams(
                "strip needs at least 3 LEDs",
            ));
        }

        let count = params.particle_count + 2;
        let span = (num_leds - 3) as f32;
        let last = (count - 1) as f32;
        if params.particle_count > 0 {
            // The largest particles must start clear of each other and of the walls
            let spacing = span / last;
            let wall_gap = 1.0 + spacing - params.max_size / 2.0;
            if spacing < params.max_size || wall_gap < WALL_SIZE / 2.0 {
                return Err(SimulationError::InvalidParams(
                    "particles do not fit on the strip without overlapping",
                ));
            }
        }

        let mut particles = Vec::new();
        particles.try_reserve_exact(count)?;

        particles.push(Particle::wall(0.0, Rgb::WHITE));
        for i in 1..=params.particle_count {
            let size = rng.random_range(params.min_size..=params.max_size);
            let speed = rng.random_range(params.min_velocity..=params.max_velocity);
            let velocity = if rng.random_bool(0.5) { speed } else { -speed };
            let position = 1.0 + span * i as f32 / last;
            // Hue stops short of 1 so the spectrum does not wrap onto itself
            let hue = (i - 1) as f32 / params.particle_count as f32;
            let colour = Hsv::new(hue, 1.0, 1.0).to_rgb();
            particles.push(Particle::new(position, velocity, size, colour));
        }
        particles.push(Particle::wall((num_leds - 1) as f32, Rgb::WHITE));

        let system = Self::from_particles(num_leds, particles);
        log::debug!(
            "Initialized {} particles on {} LEDs (energy {:.2})",
            params.particle_count,
            num_leds,
            system.total_energy
        );
        Ok(system)
    }

    /// Create a system from hand-placed interior particles
    ///
    /// Walls are added at both ends of the strip.
    pub fn with_particles(num_leds: usize, interior: &[Particle]) -> Result<Self, SimulationError> {
        if num_leds < 2 {
            return Err(SimulationError::InvalidParams(
                "strip needs at least 2 LEDs",
            ));
        }
        let mut particles = Vec::new();
        particles.try_reserve_exact(interior.len() + 2)?;
        particles.push(Particle::wall(0.0, Rgb::WHITE));
        particles.extend_from_slice(interior);
        particles.push(Particle::wall((num_leds - 1) as f32, Rgb::WHITE));
        Ok(Self::from_particles(num_leds, particles))
    }

    fn from_particles(num_leds: usize, particles: Vec<Particle>) -> Self {
        let total_energy = total_kinetic_energy(&particles);
        Self {
            num_leds,
            particles,
            total_energy,
        }
    }

    pub fn num_leds(&self) -> usize {
        self.num_leds
    }

    /// All particles, walls included, ordered along the strip
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of mobile particles
    pub fn mobile_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.immobile).count()
    }

    /// Energy captured at construction
    pub fn total_energy(&self) -> f32 {
        self.total_energy
    }

    /// Current kinetic energy
    pub fn kinetic_energy(&self) -> f32 {
        total_kinetic_energy(&self.particles)
    }

    pub fn momentum(&self) -> f32 {
        total_momentum(&self.particles)
    }

    /// Find the earliest collision within `limit` seconds
    ///
    /// `previous` is the pair resolved in the preceding sub-step; it is
    /// skipped in both orderings so that rounding residue cannot make it
    /// collide again at t ≈ 0. Exact ties go to the pair scanned last.
    pub fn next_collision(&self, limit: f32, previous: Option<(usize, usize)>) -> Option<Collision> {
        let mut best = limit;
        let mut found = None;
        for (a, p) in self.particles.iter().enumerate() {
            if p.immobile {
                continue;
            }
            for (b, q) in self.particles.iter().enumerate() {
                if a == b {
                    continue;
                }
                if let Some((pa, pb)) = previous {
                    if (a == pa && b == pb) || (a == pb && b == pa) {
                        continue;
                    }
                }
                let t = collision_time(p, q);
                if t.is_finite() && t >= 0.0 && t <= best {
                    best = t;
                    found = Some(Collision { a, b, time: t });
                }
            }
        }
        found
    }

    fn propagate(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.propagate(dt);
        }
    }

    /// Stage post-collision velocities for the pair `(a, b)`
    fn resolve(&mut self, a: usize, b: usize) {
        let p = self.particles[a];
        let q = self.particles[b];
        self.particles[a].next_velocity = post_collision_velocity(&p, &q);
        self.particles[b].next_velocity = post_collision_velocity(&q, &p);
    }

    fn commit(&mut self) {
        for p in &mut self.particles {
            p.commit();
        }
    }

    /// Advance the physics by exactly `dt` seconds, resolving every collision
    /// in time order
    pub fn step(&mut self, dt: f32) -> Result<(), SimulationError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }

        let mut remaining = dt;
        let mut previous = None;
        for _ in 0..MAX_SUB_STEPS {
            let Some(collision) = self.next_collision(remaining, previous) else {
                self.propagate(remaining);
                self.commit();
                return Ok(());
            };
            log::trace!(
                "collision {} <-> {} at +{:.6}s",
                collision.a,
                collision.b,
                collision.time
            );
            self.propagate(collision.time);
            self.resolve(collision.a, collision.b);
            self.commit();
            remaining -= collision.time;
            previous = Some((collision.a, collision.b));
        }

        log::error!(
            "Gave up after {} collisions with {}s of the frame left",
            MAX_SUB_STEPS,
            remaining
        );
        Err(SimulationError::SubStepLimit { remaining })
    }

    /// Nudge velocities back toward the energy captured at construction
    ///
    /// The deficit is spread evenly over the mobile particles. A particle whose
    /// rescale factor is not finite (zero velocity, or a deficit larger than
    /// its own energy) keeps its velocity this frame.
    pub fn correct_energy(&mut self) {
        let mobile = self.mobile_count();
        if mobile == 0 {
            return;
        }
        let current = self.kinetic_energy();
        let deficit = (self.total_energy - current) / mobile as f32;
        log::debug!(
            "energy {:.3} / {:.3}, deficit per particle {:.5}",
            current,
            self.total_energy,
            deficit
        );

        // 1/2 m v^2 = 1/2 m u^2 + e  =>  v = u sqrt(1 + 2e / (m u^2))
        for (i, p) in self.particles.iter_mut().enumerate() {
            if p.immobile {
                continue;
            }
            let factor = (1.0 + 2.0 * deficit / (p.mass * p.velocity * p.velocity)).sqrt();
            if factor.is_finite() {
                p.velocity *= factor;
            } else {
                log::trace!("skipping energy correction for particle {}", i);
            }
        }
    }

    /// Run the physics for one frame: step, then correct energy drift
    pub fn advance(&mut self, dt: f32) -> Result<(), SimulationError> {
        self.step(dt)?;
        self.correct_energy();
        Ok(())
    }
}
