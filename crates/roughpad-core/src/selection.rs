//! The element picked up by the selection tool.

use crate::shapes::{Element, ElementId, ElementKind};
use kurbo::{Point, Vec2};

/// Snapshot of an element taken when it is picked up, plus where on it the
/// pointer grabbed.
///
/// This is a copy, never a reference into the document: the stored element is
/// replaced on every move while the snapshot keeps the original geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub id: ElementId,
    pub kind: ElementKind,
    pub start: Point,
    pub end: Point,
    /// `pointer - start` at pick-up time.
    pub offset: Vec2,
}

impl Selection {
    /// Capture `element` as grabbed at `pointer`.
    pub fn capture(element: &Element, pointer: Point) -> Self {
        Self {
            id: element.id(),
            kind: element.kind(),
            start: element.start(),
            end: element.end(),
            offset: pointer - element.start(),
        }
    }

    /// Signed extent of the element at pick-up.
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    /// New `(start, end)` when the pointer is at `pointer`, keeping the grab offset
    /// and the original size.
    pub fn translated_to(&self, pointer: Point) -> (Point, Point) {
        let start = pointer - self.offset;
        (start, start + self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rough::RoughOptions;

    fn rect(start: Point, end: Point) -> Element {
        Element::new(0, ElementKind::Rectangle, start, end, &RoughOptions::default())
    }

    #[test]
    fn test_capture_records_offset() {
        let element = rect(Point::new(10.0, 20.0), Point::new(50.0, 40.0));
        let selection = Selection::capture(&element, Point::new(13.0, 24.0));

        assert_eq!(selection.id, 0);
        assert_eq!(selection.kind, ElementKind::Rectangle);
        assert_eq!(selection.offset, Vec2::new(3.0, 4.0));
        assert_eq!(selection.size(), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn test_translation_keeps_size() {
        let element = rect(Point::new(10.0, 20.0), Point::new(50.0, 40.0));
        let selection = Selection::capture(&element, Point::new(13.0, 24.0));

        let (start, end) = selection.translated_to(Point::new(103.0, 104.0));
        assert_eq!(start, Point::new(100.0, 100.0));
        assert_eq!(end, Point::new(140.0, 120.0));
    }

    #[test]
    fn test_reverse_drawn_line_keeps_direction() {
        let element = Element::new(
            3,
            ElementKind::Line,
            Point::new(50.0, 50.0),
            Point::new(10.0, 30.0),
            &RoughOptions::default(),
        );
        let selection = Selection::capture(&element, Point::new(30.0, 40.0));

        let (start, end) = selection.translated_to(Point::new(40.0, 40.0));
        assert_eq!(start, Point::new(60.0, 50.0));
        assert_eq!(end, Point::new(20.0, 30.0));
    }
}
