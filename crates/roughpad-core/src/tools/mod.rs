//! Tool system for the whiteboard.

use crate::shapes::ElementKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Pick up and move existing elements.
    Selection,
    #[default]
    Line,
    Rectangle,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Selection, ToolKind::Line, ToolKind::Rectangle];

    /// The element kind this tool draws, if any.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Selection => None,
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
        }
    }

    /// Display label for toolbars.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Selection => "Selection",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
        }
    }
}
