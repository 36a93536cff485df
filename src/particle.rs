// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
    // Tracked but never drawn; the fill alpha comes from `color`
    pub opacity: f64,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 2.5;
    pub const MAX_START_SPEED: f64 = 0.15;

    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, color: Color, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
            opacity,
        }
    }

    // Uniformly placed inside width x height with a slow random drift
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, accent: Color) -> Particle {
        let radius =
            Particle::MAX_RADIUS - rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS);
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let alpha = rng.gen::<f64>() * 0.3 + 0.2;
        let vel_x = (rng.gen::<f64>() - 0.5) * Particle::MAX_START_SPEED * 2.0;
        let vel_y = (rng.gen::<f64>() - 0.5) * Particle::MAX_START_SPEED * 2.0;
        let opacity = rng.gen::<f64>() * 0.5 + 0.2;

        Particle::new(
            [pos_x, pos_y],
            [vel_x, vel_y],
            radius,
            accent.with_alpha(alpha),
            opacity,
        )
    }
}
