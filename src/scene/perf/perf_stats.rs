use wasm_bindgen::prelude::*;

/// Snapshot of the last `settle()` run, for host diagnostics overlays.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct LayoutStats {
    pub(super) relax_ms: f64,
    pub(super) iterations_run: u32,
    pub(super) pair_corrections: u32,
    pub(super) obstacle_corrections: u32,
    pub(super) converged: bool,
    pub(super) shape_count: u32,
}

#[wasm_bindgen]
impl LayoutStats {
    #[wasm_bindgen(getter)]
    pub fn relax_ms(&self) -> f64 { self.relax_ms }
    #[wasm_bindgen(getter)]
    pub fn iterations_run(&self) -> u32 { self.iterations_run }
    #[wasm_bindgen(getter)]
    pub fn pair_corrections(&self) -> u32 { self.pair_corrections }
    #[wasm_bindgen(getter)]
    pub fn obstacle_corrections(&self) -> u32 { self.obstacle_corrections }
    #[wasm_bindgen(getter)]
    pub fn converged(&self) -> bool { self.converged }
    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.shape_count }
}
