//! Vello-based renderer implementation.

use crate::renderer::{Renderer, StrokeSettings};
use kurbo::{Affine, Stroke};
use roughpad_core::rough::Drawable;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Pen applied to every stroke of every element.
    style: StrokeSettings,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer with the default pen.
    pub fn new() -> Self {
        Self::with_style(StrokeSettings::default())
    }

    pub fn with_style(style: StrokeSettings) -> Self {
        Self {
            scene: Scene::new(),
            style,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

}

impl Renderer for VelloRenderer {
    fn clear(&mut self) {
        self.scene.reset();
    }

    fn draw(&mut self, drawable: &Drawable) {
        let stroke = Stroke::new(self.style.width);
        // Each pass is its own path so the double-line look survives overlap.
        for path in drawable.strokes() {
            self.scene
                .stroke(&stroke, Affine::IDENTITY, self.style.color, None, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use peniko::Color;
    use roughpad_core::canvas::CanvasDocument;
    use roughpad_core::shapes::ElementKind;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&CanvasDocument::new());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_shapes() {
        let mut renderer = VelloRenderer::new();
        let mut doc = CanvasDocument::new();
        doc.append(ElementKind::Rectangle, Point::new(100.0, 100.0), Point::new(300.0, 250.0));
        doc.append(ElementKind::Line, Point::new(0.0, 0.0), Point::new(50.0, 80.0));

        renderer.build_scene(&doc);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut renderer = VelloRenderer::new();
        let mut doc = CanvasDocument::new();
        doc.append(ElementKind::Line, Point::new(0.0, 0.0), Point::new(50.0, 80.0));
        renderer.build_scene(&doc);

        renderer.clear();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_custom_style() {
        let style = StrokeSettings {
            color: Color::from_rgba8(200, 0, 0, 255),
            width: 3.0,
        };
        let renderer = VelloRenderer::with_style(style);
        assert_eq!(renderer.style.width, 3.0);
        assert_eq!(renderer.style.color.to_rgba8(), style.color.to_rgba8());
    }
}
