// A single simulation session: the particle store plus the pointer target and
// surface bounds it is stepped against. Each session owns its own RNG so several
// can run side by side without sharing state.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::renderer::{self, Surface};
use crate::stepper::{self, Bounds};
use crate::store;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath::Vector2;
use wasm_bindgen::JsValue;

pub struct ParticleField<R: Rng = StdRng> {
    config: FieldConfig,
    bounds: Bounds,
    pointer: Vector2<f64>,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(width: f64, height: f64) -> Self {
        ParticleField::with_rng(FieldConfig::default(), width, height, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, width: f64, height: f64, mut rng: R) -> Self {
        let particles = store::seed(width, height, &config, &mut rng);
        ParticleField {
            config,
            bounds: Bounds::new(width, height),
            pointer: [0.0, 0.0],
            particles,
            rng,
        }
    }

    // Old particles are thrown away, not rescaled
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
        self.particles = store::seed(width, height, &self.config, &mut self.rng);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    pub fn step(&mut self) {
        stepper::step(&mut self.particles, self.pointer, self.bounds, &self.config);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), JsValue> {
        renderer::render(surface, self.bounds, &self.particles, &self.config)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Vector2<f64> {
        self.pointer
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
