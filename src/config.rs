// Design constants for the particle field, grouped so tests can tweak them

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    // Surface area (px²) per particle when seeding.
    pub density_divisor: f64,
    pub link_radius: f64,
    pub link_max_alpha: f64,
    pub link_width: f64,
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    // Speed cap applied after the pointer force. `None` leaves velocity unbounded.
    pub max_speed: Option<f64>,
    pub accent: Color,
}

impl FieldConfig {
    pub const ACCENT_RGB: u32 = 0x8b5cf6;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            density_divisor: 15000.0,
            link_radius: 150.0,
            link_max_alpha: 0.1,
            link_width: 0.5,
            pointer_radius: 200.0,
            pointer_strength: 0.2,
            max_speed: None,
            accent: Color::from_u32(FieldConfig::ACCENT_RGB, 1.0),
        }
    }
}
