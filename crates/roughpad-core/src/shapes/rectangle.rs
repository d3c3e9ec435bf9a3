//! Rectangle shape.

use crate::rough::{Drawable, RoughGenerator};
use kurbo::{Point, Rect};

/// The outline starts at `start` and spans the signed size, so reverse drags
/// draw the same box as forward ones.
pub(super) fn drawable(rough: &mut RoughGenerator, start: Point, end: Point) -> Drawable {
    rough.rectangle(start, end.x - start.x, end.y - start.y)
}

/// Inclusive containment in the normalized box spanned by the two corners.
pub(super) fn contains(start: Point, end: Point, point: Point) -> bool {
    let rect = Rect::from_points(start, end);
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_and_on_edges() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(20.0, 10.0);
        assert!(contains(a, b, Point::new(10.0, 5.0)));
        assert!(contains(a, b, Point::new(0.0, 0.0)));
        assert!(contains(a, b, Point::new(20.0, 10.0)));
        assert!(contains(a, b, Point::new(20.0, 0.0)));
    }

    #[test]
    fn test_outside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(20.0, 10.0);
        assert!(!contains(a, b, Point::new(21.0, 5.0)));
        assert!(!contains(a, b, Point::new(10.0, -0.5)));
        assert!(!contains(a, b, Point::new(-1.0, -1.0)));
    }

    #[test]
    fn test_exhaustive_grid_matches_interval_check() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(9.0, 7.0);
        for x in 0..12 {
            for y in 0..10 {
                let p = Point::new(x as f64, y as f64);
                let expected = (3.0..=9.0).contains(&p.x) && (4.0..=7.0).contains(&p.y);
                assert_eq!(contains(a, b, p), expected, "point {p:?}");
            }
        }
    }

    #[test]
    fn test_reverse_drag_is_normalized() {
        // Dragged from bottom-right to top-left.
        let a = Point::new(20.0, 10.0);
        let b = Point::new(0.0, 0.0);
        assert!(contains(a, b, Point::new(10.0, 5.0)));
        assert!(!contains(a, b, Point::new(25.0, 5.0)));
    }
}
