//! Rectangle packer with exclusion zones.
//!
//! Cards are scattered at random non-overlapping positions inside the
//! container. Every candidate is inflated by a 20% margin (10% per side) so
//! placed cards keep visual breathing room; placement failure after the
//! attempt budget is non-fatal and leaves the card unplaced.

use serde::Serialize;

use crate::core::log;
use crate::core::random::{self, DEFAULT_SEED};
use crate::core::rect::Rect;

/// Independent uniform-random placement trials per card.
pub const PLACEMENT_ATTEMPTS: u32 = 500;

/// Total margin added to each axis (10% per side).
pub const MARGIN_FRACTION: f32 = 0.2;

const DEFAULT_CONTAINER_W: f32 = 1200.0;
const DEFAULT_CONTAINER_H: f32 = 800.0;

/// A successfully placed card: the content rect the host renders, centered
/// inside its (internal) margin rect.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Placement {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Clone, Debug)]
struct Slot {
    id: String,
    /// What the host renders.
    content: Rect,
    /// Inflated footprint used for all overlap bookkeeping.
    margin: Rect,
}

/// The packer. Owns all placement state; callers construct one explicitly
/// and keep it for the lifetime of the view.
pub struct PackerCore {
    container_w: f32,
    container_h: f32,
    rectangles: Vec<Slot>,
    exclusions: Vec<(String, Rect)>,
    rng_state: u32,
}

impl Default for PackerCore {
    fn default() -> Self {
        Self::new()
    }
}

impl PackerCore {
    pub fn new() -> Self {
        Self {
            container_w: DEFAULT_CONTAINER_W,
            container_h: DEFAULT_CONTAINER_H,
            rectangles: Vec::new(),
            exclusions: Vec::new(),
            rng_state: DEFAULT_SEED,
        }
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.rng_state = random::sanitize_seed(seed);
    }

    /// Bounds for future placements only; already-placed cards stay put.
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.container_w = width;
        self.container_h = height;
    }

    pub fn container_size(&self) -> (f32, f32) {
        (self.container_w, self.container_h)
    }

    /// Reserve a region. Replaces any exclusion with the same id. Cards
    /// already placed under the new exclusion are NOT moved.
    pub fn add_exclusion(&mut self, id: &str, rect: Rect) {
        self.exclusions.retain(|(eid, _)| eid != id);
        self.exclusions.push((id.to_string(), rect));
    }

    /// Place a `w x h` card at a random free position. Any existing card
    /// with the same id is removed first. Returns `None` when every attempt
    /// collided; the caller treats absence as "not yet placed" and may retry
    /// on a later event.
    pub fn add_rectangle(&mut self, id: &str, w: f32, h: f32) -> Option<Placement> {
        self.rectangles.retain(|s| s.id != id);

        // 10% of the content size on each side.
        let side_x = w * MARGIN_FRACTION * 0.5;
        let side_y = h * MARGIN_FRACTION * 0.5;
        let max_x = (self.container_w - w - 2.0 * side_x).max(0.0);
        let max_y = (self.container_h - h - 2.0 * side_y).max(0.0);

        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = random::uniform(&mut self.rng_state, 0.0, max_x);
            let y = random::uniform(&mut self.rng_state, 0.0, max_y);
            let content = Rect::new(x + side_x, y + side_y, w, h);
            let margin = content.inflated(side_x, side_y);

            if self.can_place(&margin) {
                self.rectangles.push(Slot {
                    id: id.to_string(),
                    content,
                    margin,
                });
                return self.rectangle(id);
            }
        }

        log::warn(&format!(
            "could not place rectangle '{id}' ({w}x{h}) after {PLACEMENT_ATTEMPTS} attempts"
        ));
        None
    }

    /// Delete by id. No-op when the collection is empty or the id is absent.
    pub fn remove_rectangle(&mut self, id: &str) {
        if self.rectangles.is_empty() {
            return;
        }
        self.rectangles.retain(|s| s.id != id);
    }

    pub fn rectangle(&self, id: &str) -> Option<Placement> {
        self.rectangles
            .iter()
            .find(|s| s.id == id)
            .map(|s| placement(&s.id, &s.content))
    }

    pub fn rectangles(&self) -> Vec<Placement> {
        self.rectangles
            .iter()
            .map(|s| placement(&s.id, &s.content))
            .collect()
    }

    pub fn exclusions(&self) -> Vec<Placement> {
        self.exclusions
            .iter()
            .map(|(id, rect)| placement(id, rect))
            .collect()
    }

    fn can_place(&self, margin: &Rect) -> bool {
        !self.rectangles.iter().any(|s| s.margin.overlaps(margin))
            && !self.exclusions.iter().any(|(_, e)| e.overlaps(margin))
    }
}

fn placement(id: &str, rect: &Rect) -> Placement {
    Placement {
        id: id.to_string(),
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
