//! Backend that records draw calls instead of producing pixels.

use crate::renderer::Renderer;
use roughpad_core::canvas::CanvasDocument;
use roughpad_core::rough::Drawable;

/// One call made against a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Draw(Drawable),
}

/// Collects every call in order.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw(&mut self, drawable: &Drawable) {
        self.commands.push(DrawCommand::Draw(drawable.clone()));
    }
}

/// The draw calls needed to show `document` from scratch.
pub fn draw_calls(document: &CanvasDocument) -> Vec<DrawCommand> {
    let mut recorder = CommandRecorder::new();
    recorder.build_scene(document);
    recorder.into_commands()
}
