// Seeding of the particle store, sized to the surface area

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;

pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
    let area = width * height;
    if !(area > 0.0) {
        return 0;
    }
    (area / config.density_divisor).floor() as usize
}

// Builds a fresh store; the caller drops whatever it held before
pub fn seed<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<Particle> {
    let count = particle_count(width, height, config);
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(Particle::random(rng, width, height, config.accent));
    }
    particles
}
