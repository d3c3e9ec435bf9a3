//! Roughpad Application
//!
//! The application shell providing windowing, input handling,
//! and integration of all components.

mod app;
pub mod config;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use event_handler::{EventHandler, cursor_icon, map_button};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
