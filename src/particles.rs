use crate::config::*;
use ::rand::Rng;
use macroquad::math::Vec2;

// What a particle looks like when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Bubble,
    Burst,
}

// Represents a single particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2, // World units per tick, not per second
    pub life: f32,      // Time remaining in seconds
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, life: f32, kind: ParticleKind) -> Self {
        Particle {
            position,
            velocity,
            life,
            kind,
        }
    }

    // Moves once per tick regardless of dt; only life is time-scaled
    fn update(&mut self, dt: f32) {
        self.position += self.velocity;
        self.life -= dt;
    }

    fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Opacity used when drawing, clamped to `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Rising bubble with a slight horizontal wobble.
pub fn spawn_bubble<R: Rng + ?Sized>(rng: &mut R, position: Vec2) -> Particle {
    let velocity = Vec2::new(
        (rng.gen_range(0..21) - 10) as f32 / 50.0,
        0.5 + rng.gen_range(0..10) as f32 / 100.0,
    );
    let life = 1.0 + rng.gen_range(0..100) as f32 / 200.0;
    Particle::new(position, velocity, life, ParticleKind::Bubble)
}

/// Fast, short-lived debris thrown out when a hazard is hit.
pub fn spawn_burst<R: Rng + ?Sized>(rng: &mut R, position: Vec2) -> Particle {
    let velocity = Vec2::new(
        (rng.gen_range(0..201) - 100) as f32 / 60.0,
        (rng.gen_range(0..201) - 100) as f32 / 60.0,
    );
    let life = 0.5 + rng.gen_range(0..100) as f32 / 200.0;
    Particle::new(position, velocity, life, ParticleKind::Burst)
}

// Manages a collection of particles
#[derive(Debug, Default, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        ParticleSystem {
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    // Bubbles released when a tank is picked up
    pub fn spawn_pickup_bubbles<R: Rng + ?Sized>(&mut self, rng: &mut R, position: Vec2) {
        for _ in 0..PICKUP_BUBBLES {
            self.particles.push(spawn_bubble(rng, position));
        }
    }

    pub fn spawn_hazard_burst<R: Rng + ?Sized>(&mut self, rng: &mut R, position: Vec2) {
        for _ in 0..HAZARD_BURST_PARTICLES {
            self.particles.push(spawn_burst(rng, position));
        }
    }

    pub fn spawn_ambient_bubble<R: Rng + ?Sized>(&mut self, rng: &mut R, position: Vec2) {
        self.particles.push(spawn_bubble(rng, position));
    }

    // Update all particles, dropping the expired ones
    pub fn update(&mut self, dt: f32) {
        self.particles.retain_mut(|p| {
            p.update(dt);
            p.is_alive()
        });
    }
}
