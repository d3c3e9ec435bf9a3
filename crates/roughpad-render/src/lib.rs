//! Roughpad Render Library
//!
//! Renderer abstraction and implementations for Roughpad.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod recorder;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recorder::{CommandRecorder, DrawCommand, draw_calls};
pub use renderer::{RenderResult, Renderer, RendererError, StrokeSettings};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
