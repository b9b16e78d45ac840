//! Letter scene: a flat arena of glyph shapes relaxed inside a walled
//! container, avoiding reserved UI boxes.
//!
//! The scene only orchestrates: geometry lives in `core`, glyph data in
//! `domain`, and the solver in `systems::relax`. Shapes are created on each
//! spawn, mutated in place by `settle`, and discarded on the next spawn.

use serde::Serialize;

use crate::core::random::{self, DEFAULT_SEED};
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::domain::glyphs::GlyphLibrary;
use crate::systems::relax::{self, RelaxParams, ShapeBody};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
pub mod walls;

pub use perf_stats::LayoutStats;

use perf_timer::LayoutTimer;

/// One glyph instance in the scene. The AABB footprint is derived from the
/// glyph outline at spawn and fixed afterwards; only `pos` (the center)
/// moves. The host renders the letter from its own copy of the asset.
pub struct LetterShape {
    pub id: u32,
    pub letter: char,
    half: Vec2,
    pub pos: Vec2,
}

impl LetterShape {
    pub fn aabb(&self) -> Rect {
        Rect::from_center(self.pos, self.half.x * 2.0, self.half.y * 2.0)
    }
}

/// Final shape center reported to the host.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ShapePosition {
    pub id: u32,
    pub letter: char,
    pub x: f32,
    pub y: f32,
}

/// The letter scene.
pub struct SceneCore {
    width: f32,
    height: f32,
    position_top: f32,
    walls: Vec<Rect>,
    reserved: Vec<(String, Rect)>,
    glyphs: GlyphLibrary,
    shapes: Vec<LetterShape>,
    next_shape_id: u32,
    params: RelaxParams,
    rng_state: u32,
    stats: LayoutStats,
}

impl SceneCore {
    pub fn new(width: f32, height: f32, position_top: f32) -> Self {
        let mut scene = Self {
            width: 0.0,
            height: 0.0,
            position_top,
            walls: Vec::new(),
            reserved: Vec::new(),
            glyphs: GlyphLibrary::default(),
            shapes: Vec::new(),
            next_shape_id: 1,
            params: RelaxParams::default(),
            rng_state: DEFAULT_SEED,
            stats: LayoutStats::default(),
        };
        scene.set_size(width, height, position_top);
        scene
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.rng_state = random::sanitize_seed(seed);
    }

    pub fn set_relax_params(&mut self, iterations: u32, max_push: f32) {
        self.params = RelaxParams { iterations, max_push };
    }

    /// Resize the container and rebuild the walls. A zero dimension is a
    /// no-op: the host fires resize events before layout has settled.
    pub fn set_size(&mut self, width: f32, height: f32, position_top: f32) {
        if width == 0.0 || height == 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.position_top = position_top;
        self.walls = walls::build_walls(width, height, position_top).to_vec();
    }

    /// Reserve a box (center + size, as the host measures DOM elements).
    /// Replaces any reserved box with the same id.
    pub fn set_reserved_box(&mut self, id: &str, cx: f32, cy: f32, w: f32, h: f32) {
        self.reserved.retain(|(rid, _)| rid != id);
        self.reserved
            .push((id.to_string(), Rect::from_center(Vec2::new(cx, cy), w, h)));
    }

    pub fn load_glyph_bundle_json(&mut self, json: &str) -> Result<(), String> {
        self.glyphs = GlyphLibrary::from_bundle_json(json)?;
        Ok(())
    }

    /// Replace the current shapes with one glyph per letter of `word`, each
    /// spawned at a random position inside the walls.
    pub fn spawn_word(&mut self, word: &str) -> Result<usize, String> {
        let resolved = self.glyphs.outlines_for_word(word)?;

        self.shapes.clear();
        for (letter, outline) in resolved {
            let half = outline.half_extents();
            let x = random::uniform(&mut self.rng_state, half.x, self.width - half.x);
            let y = random::uniform(
                &mut self.rng_state,
                self.position_top + half.y,
                self.position_top + self.height - half.y,
            );
            self.shapes.push(LetterShape {
                id: self.next_shape_id,
                letter,
                half,
                pos: Vec2::new(x, y),
            });
            self.next_shape_id += 1;
        }
        Ok(self.shapes.len())
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[LetterShape] {
        &self.shapes
    }

    pub fn obstacles(&self) -> Vec<Rect> {
        let mut obstacles = self.walls.clone();
        obstacles.extend(self.reserved.iter().map(|(_, r)| *r));
        obstacles
    }

    /// Run the relaxation solver over the current shapes and record a stats
    /// snapshot. Best-effort: non-convergence is not an error.
    pub fn settle(&mut self) {
        let timer = LayoutTimer::start();
        let obstacles = self.obstacles();

        let mut bodies: Vec<ShapeBody> = self
            .shapes
            .iter()
            .map(|s| ShapeBody::new(s.pos, s.half))
            .collect();

        let outcome = relax::relax(&mut bodies, &obstacles, &self.params, &mut self.rng_state);

        for (shape, body) in self.shapes.iter_mut().zip(&bodies) {
            shape.pos = body.pos;
        }

        self.stats = LayoutStats {
            relax_ms: timer.sample_ms(),
            iterations_run: outcome.iterations_run,
            pair_corrections: outcome.pair_corrections,
            obstacle_corrections: outcome.obstacle_corrections,
            converged: outcome.converged,
            shape_count: self.shapes.len() as u32,
        };
    }

    pub fn layout_stats(&self) -> LayoutStats {
        self.stats.clone()
    }

    pub fn positions(&self) -> Vec<ShapePosition> {
        self.shapes
            .iter()
            .map(|s| ShapePosition {
                id: s.id,
                letter: s.letter,
                x: s.pos.x,
                y: s.pos.y,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
