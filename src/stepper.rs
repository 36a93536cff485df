// Per-tick physics: integrate, bounce off the surface edges, then apply the pointer force

use crate::config::FieldConfig;
use crate::particle::Particle;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }
}

// Linear falloff: `pointer_strength` at distance 0, nothing at or past `pointer_radius`
pub fn pointer_force(distance: f64, config: &FieldConfig) -> f64 {
    if distance < config.pointer_radius {
        config.pointer_strength * (1.0 - distance / config.pointer_radius)
    } else {
        0.0
    }
}

pub fn step(particles: &mut [Particle], pointer: Vector2<f64>, bounds: Bounds, config: &FieldConfig) {
    for particle in particles.iter_mut() {
        step_particle(particle, pointer, bounds, config);
    }
}

fn step_particle(particle: &mut Particle, pointer: Vector2<f64>, bounds: Bounds, config: &FieldConfig) {
    particle.pos = vecmath::vec2_add(particle.pos, particle.vel);

    // Position is left where it is; the flipped velocity carries it back next tick
    if particle.pos[0] < 0.0 || particle.pos[0] > bounds.width {
        particle.vel[0] = -particle.vel[0];
    }
    if particle.pos[1] < 0.0 || particle.pos[1] > bounds.height {
        particle.vel[1] = -particle.vel[1];
    }

    let p_to_pointer = vecmath::vec2_sub(pointer, particle.pos);
    let distance = vecmath::vec2_len(p_to_pointer);
    if distance < config.pointer_radius {
        // atan2(0, 0) is 0, so a particle right under the pointer is pushed along -x
        let angle = p_to_pointer[1].atan2(p_to_pointer[0]);
        let force = pointer_force(distance, config);
        particle.vel[0] -= angle.cos() * force;
        particle.vel[1] -= angle.sin() * force;
    }

    if let Some(max_speed) = config.max_speed {
        let speed = vecmath::vec2_len(particle.vel);
        if speed > max_speed {
            particle.vel = vecmath::vec2_scale(particle.vel, max_speed / speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn particle_at(pos: [f64; 2], vel: [f64; 2]) -> Particle {
        Particle::new(pos, vel, 1.0, Color::from_u32(0xffffff, 0.3), 0.5)
    }

    const FAR_AWAY: [f64; 2] = [-10_000.0, -10_000.0];

    #[test]
    fn integrates_velocity_into_position() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([10.0, 20.0], [0.125, -0.25])];
        step(&mut particles, FAR_AWAY, Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].pos, [10.125, 19.75]);
        assert_eq!(particles[0].vel, [0.125, -0.25]);
    }

    #[test]
    fn bounces_off_left_edge_without_touching_vy() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([0.0, 300.0], [-0.1, 0.05])];
        step(&mut particles, FAR_AWAY, Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].vel, [0.1, 0.05]);
        // not clamped back inside
        assert!(particles[0].pos[0] < 0.0);
    }

    #[test]
    fn bounces_both_axes_in_a_corner() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([800.0, 600.0], [0.1, 0.1])];
        step(&mut particles, FAR_AWAY, Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].vel, [-0.1, -0.1]);
    }

    #[test]
    fn sitting_exactly_on_the_edge_does_not_bounce() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([800.0, 600.0], [0.0, 0.0])];
        step(&mut particles, FAR_AWAY, Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].vel, [0.0, 0.0]);
    }

    #[test]
    fn force_falls_off_linearly_to_zero_at_radius() {
        let config = FieldConfig::default();
        assert_eq!(pointer_force(0.0, &config), 0.2);
        assert!((pointer_force(100.0, &config) - 0.1).abs() < 1e-12);
        assert_eq!(pointer_force(200.0, &config), 0.0);
        assert_eq!(pointer_force(250.0, &config), 0.0);
    }

    #[test]
    fn pointer_at_influence_radius_leaves_velocity_alone() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([300.0, 300.0], [0.0, 0.0])];
        step(&mut particles, [500.0, 300.0], Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].vel, [0.0, 0.0]);
    }

    #[test]
    fn pointer_directly_on_particle_applies_full_strength_along_x() {
        let config = FieldConfig::default();
        let mut particles = vec![particle_at([100.0, 100.0], [0.0, 0.0])];
        step(&mut particles, [100.0, 100.0], Bounds::new(800.0, 600.0), &config);
        assert_eq!(particles[0].vel[0], -0.2);
        assert_eq!(particles[0].vel[1], 0.0);
        assert!(particles[0].vel.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn velocity_change_points_away_from_pointer() {
        let config = FieldConfig::default();
        let mut particles = vec![
            particle_at([100.0, 100.0], [0.0, 0.0]),
            particle_at([100.0, 200.0], [0.0, 0.0]),
        ];
        step(&mut particles, [150.0, 150.0], Bounds::new(800.0, 600.0), &config);

        // above-left of the pointer: pushed further up-left
        assert!(particles[0].vel[0] < 0.0 && particles[0].vel[1] < 0.0);
        // below-left of the pointer: pushed further down-left
        assert!(particles[1].vel[0] < 0.0 && particles[1].vel[1] > 0.0);

        let expected = 0.2 * (1.0 - 50.0 * 2f64.sqrt() / 200.0);
        let got = vecmath::vec2_len(particles[0].vel);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn speed_is_unbounded_by_default() {
        let config = FieldConfig::default();
        let bounds = Bounds::new(10_000.0, 10_000.0);
        let mut particles = vec![particle_at([5000.0, 5000.0], [0.0, 0.0])];
        for _ in 0..20 {
            let pointer = [particles[0].pos[0] + 1.0, particles[0].pos[1]];
            step(&mut particles, pointer, bounds, &config);
        }
        assert!(vecmath::vec2_len(particles[0].vel) > 3.0);
    }

    #[test]
    fn max_speed_caps_accumulated_velocity() {
        let config = FieldConfig {
            max_speed: Some(0.5),
            ..FieldConfig::default()
        };
        let bounds = Bounds::new(10_000.0, 10_000.0);
        let mut particles = vec![particle_at([5000.0, 5000.0], [0.0, 0.0])];
        for _ in 0..20 {
            let pointer = [particles[0].pos[0] + 1.0, particles[0].pos[1]];
            step(&mut particles, pointer, bounds, &config);
        }
        assert!(vecmath::vec2_len(particles[0].vel) <= 0.5 + 1e-12);
    }
}
