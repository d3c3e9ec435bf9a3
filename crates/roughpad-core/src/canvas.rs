//! Canvas document: the ordered element store.

use crate::rough::RoughOptions;
use crate::shapes::{Element, ElementId, ElementKind};
use kurbo::Point;
use thiserror::Error;

/// Element store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("element {id} is out of range (document has {len} elements)")]
    OutOfRange { id: ElementId, len: usize },
}

/// All elements on the canvas, in insertion order.
///
/// Insertion order is also the paint order (later elements on top) and the hit-test
/// order (earlier elements win). Elements are never removed or reordered, so an
/// element's id is always its index.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    elements: Vec<Element>,
    rough: RoughOptions,
}

impl CanvasDocument {
    /// Create an empty document with default hand-drawn options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with custom hand-drawn options.
    pub fn with_options(rough: RoughOptions) -> Self {
        Self {
            elements: Vec::new(),
            rough,
        }
    }

    /// Append a new element and return its id.
    pub fn append(&mut self, kind: ElementKind, start: Point, end: Point) -> ElementId {
        let id = self.elements.len();
        self.elements.push(Element::new(id, kind, start, end, &self.rough));
        id
    }

    /// Replace the element at `id` with a freshly derived one.
    pub fn update_at(
        &mut self,
        id: ElementId,
        start: Point,
        end: Point,
        kind: ElementKind,
    ) -> Result<&Element, CanvasError> {
        let len = self.elements.len();
        let rough = self.rough;
        let slot = self.elements.get_mut(id).ok_or_else(|| {
            log::error!("update_at({id}) on a document with {len} elements");
            CanvasError::OutOfRange { id, len }
        })?;
        *slot = Element::new(id, kind, start, end, &rough);
        Ok(&*slot)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Elements in insertion (paint) order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First element in insertion order that contains `point`.
    ///
    /// There is no z-order preference: when elements overlap, the one created
    /// first is picked even though a later one is painted over it.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        self.elements.iter().find(|element| element.contains(point))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
