use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

/// Wall thickness in scene pixels.
pub const WALL_THICKNESS: f32 = 50.0;

/// Four static walls hugging a `width x height` container whose top edge
/// sits at `position_top`. Order: top, bottom, left, right.
pub fn build_walls(width: f32, height: f32, position_top: f32) -> [Rect; 4] {
    let t = WALL_THICKNESS;
    [
        Rect::from_center(Vec2::new(width * 0.5, position_top - t * 0.5), width, t),
        Rect::from_center(
            Vec2::new(width * 0.5, position_top + height + t * 0.5),
            width,
            t,
        ),
        Rect::from_center(Vec2::new(-t * 0.5, position_top + height * 0.5), t, height),
        Rect::from_center(
            Vec2::new(width + t * 0.5, position_top + height * 0.5),
            t,
            height,
        ),
    ]
}
