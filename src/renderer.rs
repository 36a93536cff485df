// Renderer for the particle field. Drawing goes through the `Surface` trait so the
// same pass can target a canvas 2d context in the browser or a recorder in tests.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::stepper::Bounds;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;
extern crate nalgebra_glm as glm;

pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &Color) -> Result<(), JsValue>;
    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: &Color,
    ) -> Result<(), JsValue>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, bounds: Bounds) {
        self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &Color) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: &Color,
    ) -> Result<(), JsValue> {
        self.begin_path();
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.set_line_width(width);
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

// Alpha of the edge between two particles `distance` apart, if they are close enough to link
pub fn link_alpha(distance: f64, config: &FieldConfig) -> Option<f64> {
    if distance < config.link_radius {
        Some(config.link_max_alpha * (1.0 - distance / config.link_radius))
    } else {
        None
    }
}

// Every unordered pair (a < b) closer than the link radius. Quadratic in the
// particle count, which the seeding density keeps small.
pub fn connections(particles: &[Particle], config: &FieldConfig) -> Vec<Link> {
    let mut links = Vec::new();
    for (a, p1) in particles.iter().enumerate() {
        let p1_pos = glm::vec2(p1.pos[0], p1.pos[1]);
        for (offset, p2) in particles[a + 1..].iter().enumerate() {
            let distance = glm::distance(&p1_pos, &glm::vec2(p2.pos[0], p2.pos[1]));
            if let Some(alpha) = link_alpha(distance, config) {
                links.push(Link {
                    a,
                    b: a + 1 + offset,
                    alpha,
                });
            }
        }
    }
    links
}

// Clears, fills every particle, then strokes the links over them
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    particles: &[Particle],
    config: &FieldConfig,
) -> Result<(), JsValue> {
    surface.clear(bounds);

    for p in particles {
        surface.fill_circle(p.pos, p.radius, &p.color)?;
    }

    for link in connections(particles, config) {
        let color = config.accent.with_alpha(link.alpha);
        surface.stroke_line(
            particles[link.a].pos,
            particles[link.b].pos,
            config.link_width,
            &color,
        )?;
    }
    Ok(())
}
