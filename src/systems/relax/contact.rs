use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

/// Minimal translation vector that moves `a` out of `b`, along the axis of
/// least overlap. `None` when the rects do not overlap; touching edges are
/// not an overlap, matching `Rect::overlaps`.
pub fn penetration(a: &Rect, b: &Rect) -> Option<Vec2> {
    let overlap_x = (a.x + a.w).min(b.x + b.w) - a.x.max(b.x);
    let overlap_y = (a.y + a.h).min(b.y + b.h) - a.y.max(b.y);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    let a_center = a.center();
    let b_center = b.center();
    if overlap_x <= overlap_y {
        let sign = if a_center.x < b_center.x { -1.0 } else { 1.0 };
        Some(Vec2::new(sign * overlap_x, 0.0))
    } else {
        let sign = if a_center.y < b_center.y { -1.0 } else { 1.0 };
        Some(Vec2::new(0.0, sign * overlap_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_and_touching_rects_have_no_penetration() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(penetration(&a, &Rect::new(20.0, 0.0, 10.0, 10.0)).is_none());
        assert!(penetration(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn picks_axis_of_least_overlap() {
        // 4px overlap on x, full overlap on y: resolve along x.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(6.0, 0.0, 10.0, 10.0);
        assert_eq!(penetration(&a, &b), Some(Vec2::new(-4.0, 0.0)));
        assert_eq!(penetration(&b, &a), Some(Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn resolves_along_y_when_vertical_overlap_is_smaller() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 8.0, 10.0, 10.0);
        assert_eq!(penetration(&a, &b), Some(Vec2::new(0.0, -2.0)));
    }

    #[test]
    fn zero_area_rect_is_harmless() {
        let a = Rect::new(5.0, 5.0, 0.0, 0.0);
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(penetration(&a, &b).is_none());
    }
}
