use crate::core::vec2::Vec2;

/// Glyph outline: one or more closed polygon loops in local coordinates.
///
/// Loaded once per letter from the asset bundle; the scene derives each
/// spawned shape's AABB footprint from it.
#[derive(Clone, Debug, Default)]
pub struct Outline {
    loops: Vec<Vec<Vec2>>,
}

impl Outline {
    pub fn from_loops(raw: Vec<Vec<[f32; 2]>>) -> Self {
        let loops = raw
            .into_iter()
            .map(|lp| lp.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
            .collect();
        Self { loops }
    }

    /// Uniform scale about the local origin.
    pub fn scaled(&self, factor: f32) -> Self {
        let loops = self
            .loops
            .iter()
            .map(|lp| lp.iter().map(|v| *v * factor).collect())
            .collect();
        Self { loops }
    }

    /// Bounding box of all loops as (min, max). Zero extents when empty.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut any = false;
        for lp in &self.loops {
            for v in lp {
                any = true;
                min.x = min.x.min(v.x);
                min.y = min.y.min(v.y);
                max.x = max.x.max(v.x);
                max.y = max.y.max(v.y);
            }
        }
        if !any {
            return (Vec2::zero(), Vec2::zero());
        }
        (min, max)
    }

    /// AABB half-extents, the shape footprint the relaxation solver works on.
    pub fn half_extents(&self) -> Vec2 {
        let (min, max) = self.bounds();
        Vec2::new((max.x - min.x) * 0.5, (max.y - min.y) * 0.5)
    }
}
