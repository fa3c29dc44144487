//! Collision timing and response
//!
//! Both functions work on a pair of particles with constant velocities over
//! the remainder of a sub-step.

use crate::particle::Particle;

/// Time until the facing edges of `p` and `q` meet
///
/// Solves `r_p + t.v_p = r_q + t.v_q` for the edges of `p` and `q` that face
/// each other. The result may be negative (already separating or
/// overlapping) or non-finite (equal velocities); callers filter those out.
#[inline]
pub fn collision_time(p: &Particle, q: &Particle) -> f32 {
    let sign = if p.position < q.position { 1.0 } else { -1.0 };
    let r1 = p.position + sign * p.size / 2.0;
    let r2 = q.position - sign * q.size / 2.0;
    (r2 - r1) / (p.velocity - q.velocity)
}

/// Post-collision velocity of `p` after hitting `q`
///
/// Conserves momentum and kinetic energy:
///
/// ```text
/// v1 = [(m1 - m2).u1 + 2.m2.u2] / (m1 + m2)
/// ```
///
/// Walls keep their velocity, and a particle hitting a wall is reflected.
pub fn post_collision_velocity(p: &Particle, q: &Particle) -> f32 {
    let m1 = p.mass;
    let m2 = q.mass;
    let u1 = p.velocity;
    let u2 = q.velocity;
    if p.immobile {
        u1
    } else if q.immobile {
        2.0 * u2 - u1
    } else {
        ((m1 - m2) * u1 + 2.0 * m2 * u2) / (m1 + m2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_strip::Rgb;

    fn particle(position: f32, velocity: f32, size: f32, mass: f32) -> Particle {
        Particle::new(position, velocity, size, Rgb::WHITE).with_mass(mass)
    }

    #[test]
    fn test_collision_time_approaching() {
        let p = particle(5.0, 4.0, 1.0, 2.0);
        let q = particle(7.0, 0.0, 1.0, 3.0);
        assert_eq!(collision_time(&p, &q), 0.25);
        // Symmetric from the other side
        assert_eq!(collision_time(&q, &p), 0.25);
    }

    #[test]
    fn test_collision_time_separating_is_negative() {
        let p = particle(5.0, -4.0, 1.0, 1.0);
        let q = particle(7.0, 0.0, 1.0, 1.0);
        assert!(collision_time(&p, &q) < 0.0);
    }

    #[test]
    fn test_collision_time_equal_velocity_is_not_finite() {
        let p = particle(5.0, 2.0, 1.0, 1.0);
        let q = particle(7.0, 2.0, 1.0, 1.0);
        assert!(!collision_time(&p, &q).is_finite());
    }

    #[test]
    fn test_mobile_collision_conserves_momentum_and_energy() {
        let p = particle(5.0, 4.0, 1.0, 2.0);
        let q = particle(7.0, 0.0, 1.0, 3.0);
        let v1 = post_collision_velocity(&p, &q);
        let v2 = post_collision_velocity(&q, &p);
        assert!((v1 - -0.8).abs() < 1e-6);
        assert!((v2 - 3.2).abs() < 1e-6);

        let momentum_before = 2.0 * 4.0 + 3.0 * 0.0;
        let momentum_after = 2.0 * v1 + 3.0 * v2;
        assert!((momentum_after - momentum_before).abs() < 1e-5);

        let energy_before = 2.0 * 16.0 + 3.0 * 0.0;
        let energy_after = 2.0 * v1 * v1 + 3.0 * v2 * v2;
        assert!((energy_after - energy_before).abs() < 1e-4);
    }

    #[test]
    fn test_unequal_masses_head_on() {
        let p = particle(2.0, 3.0, 1.5, 1.5);
        let q = particle(8.0, -5.0, 4.0, 4.0);
        let v1 = post_collision_velocity(&p, &q);
        let v2 = post_collision_velocity(&q, &p);
        let momentum = |a: f32, b: f32| 1.5 * a + 4.0 * b;
        let energy = |a: f32, b: f32| 1.5 * a * a + 4.0 * b * b;
        assert!((momentum(v1, v2) - momentum(3.0, -5.0)).abs() < 1e-4);
        assert!((energy(v1, v2) - energy(3.0, -5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_wall_reflection() {
        let wall = Particle::wall(0.0, Rgb::WHITE);
        let p = particle(3.0, -2.5, 1.0, 1.0);
        assert_eq!(post_collision_velocity(&p, &wall), 2.5);
        // The wall itself does not move
        assert_eq!(post_collision_velocity(&wall, &p), 0.0);
    }
}
