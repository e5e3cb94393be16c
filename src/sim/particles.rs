//! Particle bursts
//!
//! Cosmetic only: particles never feed back into score or collisions.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::tuning::Tuning;

/// Append a burst of particles centered on `origin`
pub fn burst<R: Rng + ?Sized>(particles: &mut Vec<Particle>, origin: Vec2, tuning: &Tuning, rng: &mut R) {
    let speed = tuning.particle_max_speed;
    particles.reserve(tuning.particle_burst);
    for _ in 0..tuning.particle_burst {
        let vel = Vec2::new(
            rng.random_range(-speed..=speed),
            rng.random_range(-speed..=speed),
        );
        particles.push(Particle {
            pos: origin,
            vel,
            lifetime: tuning.particle_lifetime,
        });
    }
}

/// Advance every particle one tick and drop the expired ones
pub fn step(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.lifetime = particle.lifetime.saturating_sub(1);
    }
    particles.retain(|p| p.lifetime > 0);
}
