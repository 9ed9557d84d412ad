//! Removal effects - short particle bursts where debris was removed
//!
//! Particles are plain values kept outside the ECS world. They only exist
//! for the renderer and never feed back into the simulation.

use orlp_logic::constants::effects::*;
use orlp_logic::geometry::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One fading particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    /// Remaining life, 1.0 at spawn; doubles as opacity.
    pub life: f64,
    pub size: f64,
}

/// All live particles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst at `origin`.
    pub fn burst(&mut self, origin: Vec2, rng: &mut impl Rng) {
        for _ in 0..PARTICLES_PER_BURST {
            self.particles.push(Particle {
                position: origin,
                velocity: Vec2::new(
                    rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                    rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                ),
                life: 1.0,
                size: rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            });
        }
    }

    /// Move and fade every particle by one frame, dropping dead ones.
    pub fn tick(&mut self) {
        self.particles.retain_mut(|p| {
            p.position = p.position + p.velocity * PARTICLE_FRAME_SECONDS;
            p.life -= PARTICLE_DECAY_PER_FRAME;
            p.life > 0.0
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
