//! Public API: wasm-bindgen facades over the layout cores.

pub mod wasm;
