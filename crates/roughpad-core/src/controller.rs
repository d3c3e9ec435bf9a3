//! Pointer-driven interaction state machine.
//!
//! `Idle` goes to `Drawing` when a drawing tool is pressed on the canvas, or to
//! `Moving` when the selection tool is pressed over an element. Releasing the
//! pointer always returns to `Idle`.

use crate::canvas::{CanvasDocument, CanvasError};
use crate::input::{MouseButton, PointerEvent};
use crate::selection::Selection;
use crate::shapes::ElementId;
use crate::tools::ToolKind;
use kurbo::Point;

/// Transient interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Action {
    #[default]
    Idle,
    /// Growing the element with this id (always the last appended one).
    Drawing { id: ElementId },
    /// Dragging a picked-up element.
    Moving(Selection),
}

/// Advisory pointer cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Move,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Response {
    /// The document changed; clear and redraw every element.
    pub redraw: bool,
    /// Cursor to show, when the controller has an opinion.
    pub cursor: Option<CursorHint>,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            cursor: None,
        }
    }
}

/// Owns the document, the active tool and the current action.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    document: CanvasDocument,
    tool: ToolKind,
    action: Action,
}

impl InteractionController {
    pub fn new(document: CanvasDocument, tool: ToolKind) -> Self {
        Self {
            document,
            tool,
            action: Action::Idle,
        }
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The picked-up element, while moving.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.action {
            Action::Moving(selection) => Some(selection),
            _ => None,
        }
    }

    /// Switch tools. Any interaction in progress ends here.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.action != Action::Idle {
            log::debug!("Tool changed mid-interaction, returning to idle");
        }
        self.tool = tool;
        self.action = Action::Idle;
    }

    /// Dispatch a pointer event. Only the primary button starts or ends interactions.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Result<Response, CanvasError> {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => Ok(self.pointer_down(position)),
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => Ok(self.pointer_up(position)),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => Ok(Response::default()),
        }
    }

    /// Start drawing or pick up the element under the pointer.
    pub fn pointer_down(&mut self, position: Point) -> Response {
        if self.action != Action::Idle {
            return Response::default();
        }

        match self.tool.element_kind() {
            None => {
                let Some(element) = self.document.element_at(position) else {
                    return Response::default();
                };
                let selection = Selection::capture(element, position);
                log::debug!("Picked up {} {}", element.kind().name(), element.id());
                self.action = Action::Moving(selection);
                Response::default()
            }
            Some(kind) => {
                let id = self.document.append(kind, position, position);
                log::debug!("Started {} {} at ({}, {})", kind.name(), id, position.x, position.y);
                self.action = Action::Drawing { id };
                Response::redraw()
            }
        }
    }

    /// Grow the element being drawn or drag the selected one.
    pub fn pointer_move(&mut self, position: Point) -> Result<Response, CanvasError> {
        let cursor = (self.tool == ToolKind::Selection).then(|| self.cursor_hint());

        let redraw = match self.action {
            Action::Idle => false,
            Action::Drawing { id } => {
                let element = self
                    .document
                    .get(id)
                    .ok_or(CanvasError::OutOfRange { id, len: self.document.len() })?;
                let (start, kind) = (element.start(), element.kind());
                self.document.update_at(id, start, position, kind)?;
                true
            }
            Action::Moving(selection) => {
                let (start, end) = selection.translated_to(position);
                self.document.update_at(selection.id, start, end, selection.kind)?;
                true
            }
        };

        Ok(Response { redraw, cursor })
    }

    /// Finish the current interaction.
    pub fn pointer_up(&mut self, _position: Point) -> Response {
        self.action = Action::Idle;
        Response::default()
    }

    /// Cursor for the selection tool: `Move` while something is held.
    pub fn cursor_hint(&self) -> CursorHint {
        if self.selection().is_some() {
            CursorHint::Move
        } else {
            CursorHint::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ElementKind;
    use kurbo::Vec2;

    fn controller(tool: ToolKind) -> InteractionController {
        InteractionController::new(CanvasDocument::new(), tool)
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn draw(ctl: &mut InteractionController, tool: ToolKind, from: Point, to: Point) {
        ctl.set_tool(tool);
        let _ = ctl.pointer_down(from);
        let _ = ctl.pointer_move(to).unwrap();
        let _ = ctl.pointer_up(to);
    }

    #[test]
    fn test_draw_line() {
        let mut ctl = controller(ToolKind::Line);

        let response = ctl.pointer_down(p(10.0, 10.0));
        assert!(response.redraw);
        assert_eq!(ctl.action(), &Action::Drawing { id: 0 });

        let response = ctl.pointer_move(p(50.0, 50.0)).unwrap();
        assert!(response.redraw);
        assert_eq!(response.cursor, None);

        let doc = ctl.document();
        assert_eq!(doc.len(), 1);
        let line = doc.get(0).unwrap();
        assert_eq!(line.kind(), ElementKind::Line);
        assert_eq!((line.start(), line.end()), (p(10.0, 10.0), p(50.0, 50.0)));
    }

    #[test]
    fn test_pointer_down_creates_zero_length_element() {
        let mut ctl = controller(ToolKind::Rectangle);
        let _ = ctl.pointer_down(p(7.0, 8.0));

        let element = ctl.document().get(0).unwrap();
        assert_eq!(element.start(), p(7.0, 8.0));
        assert_eq!(element.end(), p(7.0, 8.0));
    }

    #[test]
    fn test_draw_then_select_rectangle() {
        let mut ctl = controller(ToolKind::Rectangle);
        let _ = ctl.pointer_down(p(0.0, 0.0));
        let _ = ctl.pointer_move(p(20.0, 10.0)).unwrap();
        let _ = ctl.pointer_up(p(20.0, 10.0));

        assert_eq!(ctl.action(), &Action::Idle);
        let rect = ctl.document().get(0).unwrap();
        assert_eq!(rect.kind(), ElementKind::Rectangle);
        assert_eq!((rect.start(), rect.end()), (p(0.0, 0.0), p(20.0, 10.0)));

        ctl.set_tool(ToolKind::Selection);
        let response = ctl.pointer_down(p(10.0, 5.0));
        assert!(!response.redraw);
        assert_eq!(ctl.selection().map(|s| s.id), Some(0));
        assert_eq!(ctl.document().len(), 1);
    }

    #[test]
    fn test_overlap_picks_first_inserted() {
        let mut ctl = controller(ToolKind::Rectangle);
        draw(&mut ctl, ToolKind::Rectangle, p(0.0, 0.0), p(100.0, 100.0));
        draw(&mut ctl, ToolKind::Rectangle, p(50.0, 50.0), p(150.0, 150.0));

        ctl.set_tool(ToolKind::Selection);
        let _ = ctl.pointer_down(p(75.0, 75.0));
        assert_eq!(ctl.selection().map(|s| s.id), Some(0));
    }

    #[test]
    fn test_move_selected_element() {
        let mut ctl = controller(ToolKind::Rectangle);
        draw(&mut ctl, ToolKind::Rectangle, p(10.0, 20.0), p(60.0, 50.0));

        ctl.set_tool(ToolKind::Selection);
        let _ = ctl.pointer_down(p(13.0, 24.0));
        assert_eq!(ctl.selection().unwrap().offset, Vec2::new(3.0, 4.0));

        let response = ctl.pointer_move(p(103.0, 104.0)).unwrap();
        assert!(response.redraw);
        assert_eq!(response.cursor, Some(CursorHint::Move));

        let rect = ctl.document().get(0).unwrap();
        assert_eq!(rect.start(), p(100.0, 100.0));
        assert_eq!(rect.end() - rect.start(), Vec2::new(50.0, 30.0));

        // Size comes from the snapshot, so repeated moves don't drift.
        let _ = ctl.pointer_move(p(23.0, 14.0)).unwrap();
        let rect = ctl.document().get(0).unwrap();
        assert_eq!((rect.start(), rect.end()), (p(20.0, 10.0), p(70.0, 40.0)));
    }

    #[test]
    fn test_move_picked_line() {
        let mut ctl = controller(ToolKind::Line);
        draw(&mut ctl, ToolKind::Line, p(0.0, 0.0), p(100.0, 0.0));

        ctl.set_tool(ToolKind::Selection);
        let _ = ctl.pointer_down(p(50.0, 0.5));
        let _ = ctl.pointer_move(p(50.0, 30.5)).unwrap();

        let line = ctl.document().get(0).unwrap();
        assert_eq!(line.kind(), ElementKind::Line);
        assert_eq!((line.start(), line.end()), (p(0.0, 30.0), p(100.0, 30.0)));
    }

    #[test]
    fn test_selection_miss_stays_idle() {
        let mut ctl = controller(ToolKind::Rectangle);
        draw(&mut ctl, ToolKind::Rectangle, p(0.0, 0.0), p(10.0, 10.0));

        ctl.set_tool(ToolKind::Selection);
        let response = ctl.pointer_down(p(200.0, 200.0));
        assert_eq!(response, Response::default());
        assert_eq!(ctl.action(), &Action::Idle);
        assert_eq!(ctl.document().len(), 1);

        let response = ctl.pointer_move(p(210.0, 210.0)).unwrap();
        assert!(!response.redraw);
        assert_eq!(response.cursor, Some(CursorHint::Default));
    }

    #[test]
    fn test_selection_on_empty_canvas() {
        let mut ctl = controller(ToolKind::Selection);
        let _ = ctl.pointer_down(p(1.0, 1.0));
        assert!(ctl.document().is_empty());
        assert_eq!(ctl.action(), &Action::Idle);
    }

    #[test]
    fn test_move_before_down_is_noop() {
        let mut ctl = controller(ToolKind::Line);
        let response = ctl.pointer_move(p(5.0, 5.0)).unwrap();
        assert_eq!(response, Response::default());
        assert!(ctl.document().is_empty());
    }

    #[test]
    fn test_pointer_up_clears_selection() {
        let mut ctl = controller(ToolKind::Rectangle);
        draw(&mut ctl, ToolKind::Rectangle, p(0.0, 0.0), p(10.0, 10.0));

        ctl.set_tool(ToolKind::Selection);
        let _ = ctl.pointer_down(p(5.0, 5.0));
        assert_eq!(ctl.cursor_hint(), CursorHint::Move);

        let _ = ctl.pointer_up(p(5.0, 5.0));
        assert!(ctl.selection().is_none());
        assert_eq!(ctl.cursor_hint(), CursorHint::Default);

        // Moving after release no longer drags.
        let _ = ctl.pointer_move(p(50.0, 50.0)).unwrap();
        assert_eq!(ctl.document().get(0).unwrap().start(), p(0.0, 0.0));
    }

    #[test]
    fn test_second_down_while_drawing_is_ignored() {
        let mut ctl = controller(ToolKind::Line);
        let _ = ctl.pointer_down(p(0.0, 0.0));
        let response = ctl.pointer_down(p(30.0, 30.0));
        assert!(!response.redraw);
        assert_eq!(ctl.document().len(), 1);
    }

    #[test]
    fn test_set_tool_ends_interaction() {
        let mut ctl = controller(ToolKind::Line);
        let _ = ctl.pointer_down(p(0.0, 0.0));
        ctl.set_tool(ToolKind::Rectangle);
        assert_eq!(ctl.action(), &Action::Idle);
        assert_eq!(ctl.tool(), ToolKind::Rectangle);
    }

    #[test]
    fn test_drawing_keeps_element_kind() {
        let mut ctl = controller(ToolKind::Rectangle);
        let _ = ctl.pointer_down(p(0.0, 0.0));
        let _ = ctl.pointer_move(p(5.0, 5.0)).unwrap();
        assert_eq!(ctl.document().get(0).unwrap().kind(), ElementKind::Rectangle);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut ctl = controller(ToolKind::Line);
        let response = ctl
            .handle_pointer_event(PointerEvent::Down {
                position: p(1.0, 1.0),
                button: MouseButton::Right,
            })
            .unwrap();
        assert_eq!(response, Response::default());
        assert!(ctl.document().is_empty());
    }

    #[test]
    fn test_handle_pointer_event_sequence() {
        let mut ctl = controller(ToolKind::Line);
        let events = [
            PointerEvent::Down {
                position: p(10.0, 10.0),
                button: MouseButton::Left,
            },
            PointerEvent::Move { position: p(30.0, 20.0) },
            PointerEvent::Move { position: p(50.0, 50.0) },
            PointerEvent::Up {
                position: p(50.0, 50.0),
                button: MouseButton::Left,
            },
        ];
        for event in events {
            let _ = ctl.handle_pointer_event(event).unwrap();
        }

        let line = ctl.document().get(0).unwrap();
        assert_eq!((line.start(), line.end()), (p(10.0, 10.0), p(50.0, 50.0)));
        assert_eq!(ctl.action(), &Action::Idle);
    }

    #[test]
    fn test_later_elements_stay_put_while_drawing() {
        let mut ctl = controller(ToolKind::Line);
        draw(&mut ctl, ToolKind::Line, p(0.0, 0.0), p(10.0, 0.0));
        let first = ctl.document().get(0).unwrap().clone();

        draw(&mut ctl, ToolKind::Rectangle, p(20.0, 20.0), p(40.0, 40.0));
        assert_eq!(ctl.document().get(0).unwrap(), &first);
        assert_eq!(ctl.document().len(), 2);
    }
}
