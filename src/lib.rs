mod utils;

pub mod background;
pub mod color;
pub mod config;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod renderer;
pub mod stepper;
pub mod store;

use wasm_bindgen::prelude::*;

pub use background::ParticleBackground;
pub use config::FieldConfig;
pub use field::ParticleField;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
