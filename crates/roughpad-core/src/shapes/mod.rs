//! Shape definitions for the whiteboard.

mod line;
mod rectangle;

pub use line::LINE_HIT_TOLERANCE;

use crate::rough::{Drawable, RoughGenerator, RoughOptions};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Identifier of an element: its index in the document.
pub type ElementId = usize;

/// The kinds of shape an element can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Line,
    Rectangle,
}

impl ElementKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
        }
    }
}

/// A drawn shape.
///
/// `start` is where the pointer first went down, `end` is the most recent drag
/// position. The drawable is derived from the other fields at construction time;
/// there is no way to change the coordinates without rebuilding the element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    start: Point,
    end: Point,
    drawable: Drawable,
}

impl Element {
    /// Build an element and its hand-drawn renderable.
    pub fn new(id: ElementId, kind: ElementKind, start: Point, end: Point, options: &RoughOptions) -> Self {
        let mut rough = RoughGenerator::new(*options, options.seed_for(id));
        let drawable = match kind {
            ElementKind::Line => line::drawable(&mut rough, start, end),
            ElementKind::Rectangle => rectangle::drawable(&mut rough, start, end),
        };
        Self {
            id,
            kind,
            start,
            end,
            drawable,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Anchor point `(x1, y1)`.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Free endpoint or corner `(x2, y2)`.
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn drawable(&self) -> &Drawable {
        &self.drawable
    }

    /// Check whether a point lies on (lines) or within (rectangles) this element.
    pub fn contains(&self, point: Point) -> bool {
        match self.kind {
            ElementKind::Line => line::contains(self.start, self.end, point),
            ElementKind::Rectangle => rectangle::contains(self.start, self.end, point),
        }
    }
}
