//! Collision relaxation solver.
//!
//! Iteratively nudges overlapping shapes apart: pairs split the correction
//! 50/50, static obstacles push with the full penetration vector. A small
//! random jitter breaks symmetric oscillation, and every displacement is
//! clamped per axis to `max_push`. Terminates early once an iteration applies
//! no correction; exhausting the budget returns best-effort positions.

pub mod contact;

use crate::core::random;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

use contact::penetration;

/// Jitter bound as a fraction of the push magnitude.
pub const JITTER_FRACTION: f32 = 0.05;

/// Movable shape as the solver sees it: a center position and AABB
/// half-extents. Outline geometry stays with the owner.
#[derive(Clone, Copy, Debug)]
pub struct ShapeBody {
    pub pos: Vec2,
    pub half: Vec2,
}

impl ShapeBody {
    pub fn new(pos: Vec2, half: Vec2) -> Self {
        Self { pos, half }
    }

    pub fn aabb(&self) -> Rect {
        Rect::from_center(self.pos, self.half.x * 2.0, self.half.y * 2.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RelaxParams {
    /// Max solver passes before giving up.
    pub iterations: u32,
    /// Per-axis displacement cap per applied correction.
    pub max_push: f32,
}

impl Default for RelaxParams {
    fn default() -> Self {
        Self {
            iterations: 80,
            max_push: 24.0,
        }
    }
}

/// Summary of one solver run, surfaced to the host for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct RelaxOutcome {
    pub iterations_run: u32,
    pub pair_corrections: u32,
    pub obstacle_corrections: u32,
    pub converged: bool,
}

/// Relax `shapes` against each other and against `obstacles`.
///
/// Convergence means the last iteration found no overlap to correct; it is a
/// stop condition, not a zero-overlap guarantee.
pub fn relax(
    shapes: &mut [ShapeBody],
    obstacles: &[Rect],
    params: &RelaxParams,
    rng: &mut u32,
) -> RelaxOutcome {
    let mut outcome = RelaxOutcome::default();

    for _ in 0..params.iterations {
        outcome.iterations_run += 1;
        let mut moved = false;

        // Movable pairs: half the penetration each, in opposing directions.
        for i in 0..shapes.len() {
            for j in (i + 1)..shapes.len() {
                let (a, b) = (shapes[i].aabb(), shapes[j].aabb());
                if let Some(mtv) = penetration(&a, &b) {
                    let half = mtv * 0.5;
                    apply_push(&mut shapes[i], half, params.max_push, rng);
                    apply_push(&mut shapes[j], -half, params.max_push, rng);
                    outcome.pair_corrections += 1;
                    moved = true;
                }
            }
        }

        // Static obstacles never move: the shape takes the full vector.
        for shape in shapes.iter_mut() {
            for obstacle in obstacles {
                if let Some(mtv) = penetration(&shape.aabb(), obstacle) {
                    apply_push(shape, mtv, params.max_push, rng);
                    outcome.obstacle_corrections += 1;
                    moved = true;
                }
            }
        }

        if !moved {
            outcome.converged = true;
            break;
        }
    }

    outcome
}

fn apply_push(shape: &mut ShapeBody, push: Vec2, max_push: f32, rng: &mut u32) {
    let bound = JITTER_FRACTION * push.length();
    let jittered = Vec2::new(
        push.x + random::jitter(rng, bound),
        push.y + random::jitter(rng, bound),
    );
    shape.pos = shape.pos + jittered.clamped_axes(max_push);
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
