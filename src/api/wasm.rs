use wasm_bindgen::prelude::*;

use crate::core::rect::Rect;
use crate::scene::{LayoutStats, SceneCore};
use crate::systems::packer::PackerCore;

/// The letter scene as the JS host sees it.
#[wasm_bindgen]
pub struct LetterScene {
    core: SceneCore,
}

#[wasm_bindgen]
impl LetterScene {
    /// Create a scene for a `width x height` container whose top edge sits
    /// at `position_top` (page coordinates).
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, position_top: f32) -> Self {
        Self {
            core: SceneCore::new(width, height, position_top),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.core.shape_count() as u32 }

    /// Resize the container (rebuilds the walls). Zero sizes are ignored.
    pub fn set_size(&mut self, width: f32, height: f32, position_top: f32) {
        self.core.set_size(width, height, position_top);
    }

    /// Reserve a UI box the letters must avoid (center + size from DOM
    /// measurement). Same id replaces the previous box.
    pub fn set_reserved_box(&mut self, id: &str, cx: f32, cy: f32, w: f32, h: f32) {
        self.core.set_reserved_box(id, cx, cy, w, h);
    }

    /// Load the glyph outline bundle produced by the asset pipeline.
    pub fn load_glyph_bundle(&mut self, json: String) -> Result<(), String> {
        self.core.load_glyph_bundle_json(&json)?;
        Ok(())
    }

    /// Spawn one shape per letter of `word` at random in-wall positions.
    /// Returns the shape count.
    pub fn spawn_word(&mut self, word: &str) -> Result<u32, String> {
        let count = self.core.spawn_word(word)?;
        Ok(count as u32)
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn set_relax_params(&mut self, iterations: u32, max_push: f32) {
        self.core.set_relax_params(iterations, max_push);
    }

    /// Relax the current shapes against each other, the walls, and the
    /// reserved boxes. Runs to completion within this call.
    pub fn settle(&mut self) {
        self.core.settle();
    }

    /// Get last settle snapshot (zeros before the first settle)
    pub fn get_layout_stats(&self) -> LayoutStats {
        self.core.layout_stats()
    }

    /// Final shape centers as a JSON array for the host to apply.
    pub fn positions_json(&self) -> String {
        serde_json::to_string(&self.core.positions()).unwrap_or_else(|_| "[]".to_string())
    }
}

/// The card packer as the JS host sees it. Explicitly constructed and owned
/// by the view; there is no ambient global instance.
#[wasm_bindgen]
pub struct RectangleLayout {
    core: PackerCore,
}

#[wasm_bindgen]
impl RectangleLayout {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: PackerCore::new(),
        }
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Bounds for future placements; already-placed cards are not reflowed.
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.core.set_container_size(width, height);
    }

    /// Reserve a region cards must avoid. Same id replaces the previous zone.
    pub fn add_exclusion(&mut self, id: &str, x: f32, y: f32, w: f32, h: f32) {
        self.core.add_exclusion(id, Rect::new(x, y, w, h));
    }

    /// Place a card. Returns the placement as JSON, or `undefined` when no
    /// free position was found (the card is then simply not rendered).
    pub fn add_rectangle(&mut self, id: &str, w: f32, h: f32) -> Option<String> {
        self.core
            .add_rectangle(id, w, h)
            .and_then(|p| serde_json::to_string(&p).ok())
    }

    pub fn remove_rectangle(&mut self, id: &str) {
        self.core.remove_rectangle(id);
    }

    pub fn rectangles_json(&self) -> String {
        serde_json::to_string(&self.core.rectangles()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn exclusions_json(&self) -> String {
        serde_json::to_string(&self.core.exclusions()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for RectangleLayout {
    fn default() -> Self {
        Self::new()
    }
}
