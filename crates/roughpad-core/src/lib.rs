//! Roughpad Core Library
//!
//! Platform-agnostic data structures and interaction logic for the Roughpad whiteboard:
//! the element store, hit testing, the hand-drawn renderable generator and the
//! pointer-driven interaction state machine.

pub mod canvas;
pub mod controller;
pub mod input;
pub mod rough;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{CanvasDocument, CanvasError};
pub use controller::{Action, CursorHint, InteractionController, Response};
pub use input::{InputState, MouseButton, PointerEvent};
pub use rough::{Drawable, RoughGenerator, RoughOptions};
pub use selection::Selection;
pub use shapes::{Element, ElementId, ElementKind, LINE_HIT_TOLERANCE};
pub use tools::ToolKind;
