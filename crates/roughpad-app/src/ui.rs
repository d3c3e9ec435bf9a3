//! UI components using egui.

use egui::{Align2, Color32, Context, CornerRadius, Frame, Margin, Stroke, Vec2};
use roughpad_core::tools::ToolKind;

/// State shared between the app and the toolbar.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_tool: ToolKind,
}

impl UiState {
    pub fn new(tool: ToolKind) -> Self {
        Self { current_tool: tool }
    }
}

/// Actions triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Change the current tool.
    SetTool(ToolKind),
}

/// Render the UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    render_toolbar(ctx, ui_state)
}

fn panel_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(8))
}

/// Tool radio buttons, anchored top-center.
fn render_toolbar(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let before = ui_state.current_tool;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::CENTER_TOP, Vec2::new(0.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for tool in ToolKind::ALL {
                        ui.radio_value(&mut ui_state.current_tool, tool, tool.label());
                    }
                });
            });
        });

    (ui_state.current_tool != before).then_some(UiAction::SetTool(ui_state.current_tool))
}
