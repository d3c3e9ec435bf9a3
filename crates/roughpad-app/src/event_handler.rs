//! Translation between winit events and the interaction controller.

use kurbo::Point;
use roughpad_core::controller::{CursorHint, InteractionController, Response};
use roughpad_core::input::{InputState, MouseButton, PointerEvent};
use winit::event::ElementState;
use winit::window::CursorIcon;

/// Map a winit button to the buttons the canvas knows about.
pub fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Cursor icon for a controller hint.
pub fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Default => CursorIcon::Default,
        CursorHint::Move => CursorIcon::Move,
    }
}

/// Feeds pointer events to the controller, tracking position between them.
#[derive(Debug, Default)]
pub struct EventHandler {
    input: InputState,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
        }
    }

    /// Cursor moved to `position` (physical pixels).
    pub fn handle_cursor_moved(
        &mut self,
        controller: &mut InteractionController,
        position: Point,
    ) -> Response {
        self.dispatch(controller, PointerEvent::Move { position })
    }

    /// Button pressed or released at the last known pointer position.
    pub fn handle_mouse_input(
        &mut self,
        controller: &mut InteractionController,
        state: ElementState,
        button: winit::event::MouseButton,
    ) -> Response {
        let Some(button) = map_button(button) else {
            return Response::default();
        };
        let position = self.input.pointer_position;
        let event = match state {
            ElementState::Pressed => PointerEvent::Down { position, button },
            // A press the canvas never saw (e.g. one taken by the toolbar) has nothing to end.
            ElementState::Released if !self.input.is_button_pressed(button) => {
                return Response::default();
            }
            ElementState::Released => PointerEvent::Up { position, button },
        };
        self.dispatch(controller, event)
    }

    fn dispatch(&mut self, controller: &mut InteractionController, event: PointerEvent) -> Response {
        self.input.handle_pointer_event(event);
        match controller.handle_pointer_event(event) {
            Ok(response) => response,
            Err(e) => {
                log::error!("Dropped pointer event {:?}: {}", event, e);
                Response::default()
            }
        }
    }
}
