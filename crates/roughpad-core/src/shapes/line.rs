//! Line shape.

use crate::rough::{Drawable, RoughGenerator};
use kurbo::Point;

/// Slack allowed by the line hit test, in canvas units.
pub const LINE_HIT_TOLERANCE: f64 = 1.0;

pub(super) fn drawable(rough: &mut RoughGenerator, start: Point, end: Point) -> Drawable {
    rough.line(start, end)
}

/// A point is on the segment when going through it is barely longer than the
/// segment itself: `|AP| + |PB| - |AB| < tolerance`.
pub(super) fn contains(start: Point, end: Point, point: Point) -> bool {
    let detour = start.distance(point) + end.distance(point) - start.distance(end);
    detour < LINE_HIT_TOLERANCE
}
