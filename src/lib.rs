//! Letterdrift Engine - decorative layout physics in WASM
//!
//! Two cooperating systems drive the animated page background:
//! - collision relaxation scatters glyph shapes inside a walled container,
//!   nudging overlaps apart until stable;
//! - a rectangle packer drops content cards at random non-overlapping
//!   positions while avoiding reserved exclusion zones.
//!
//! Architecture:
//! - core/     - Geometry, RNG, logging
//! - domain/   - Glyph outlines and the letter registry
//! - systems/  - Relaxation solver and packer
//! - scene/    - Orchestration of shapes, walls, reserved boxes
//! - api/      - Public wasm-bindgen API

pub mod api;
pub mod core;
pub mod domain;
pub mod scene;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Letterdrift WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{LetterScene, RectangleLayout};
pub use scene::{LayoutStats, SceneCore};
pub use systems::packer::PackerCore;
