//! Scales WASM Module
//!
//! Notes, pitch-class naming and scale construction (major and its modes,
//! minor, harmonic minor, pentatonic, blues), plus helpers that turn a scale
//! into per-cell markers, names and degree labels for reference tables.

pub mod models;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use utils::table::{degree_label_for, marker_for, name_for, names_for, note_for_scale};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Scales WASM module initialized");
}
