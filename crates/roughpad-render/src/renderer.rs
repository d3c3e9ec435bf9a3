//! Renderer trait abstraction.

use peniko::Color;
use roughpad_core::canvas::CanvasDocument;
use roughpad_core::rough::Drawable;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Pen used for every element. Shapes carry no style of their own.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSettings {
    pub color: Color,
    pub width: f64,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(30, 30, 30, 255),
            width: 1.0,
        }
    }
}

/// Trait for rendering backends.
///
/// A backend only has to wipe its surface and draw one element's renderable;
/// [`Renderer::build_scene`] does the rest.
pub trait Renderer {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Draw one element on top of what is already there.
    fn draw(&mut self, drawable: &Drawable);

    /// Redraw the whole document: clear, then every element in insertion order
    /// so that later elements end up on top.
    fn build_scene(&mut self, document: &CanvasDocument) {
        self.clear();
        for element in document.elements() {
            self.draw(element.drawable());
        }
    }
}
