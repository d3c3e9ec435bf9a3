//! Keyboard shortcut registry and documentation.

use roughpad_core::tools::ToolKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub keys: &'static [&'static str],
    pub tool: ToolKind,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(keys: &'static [&'static str], tool: ToolKind, description: &'static str) -> Self {
        Self {
            keys,
            tool,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "V / 1").
    pub fn format(&self) -> String {
        self.keys.join(" / ")
    }

    fn matches(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new(&["V", "1"], ToolKind::Selection, "Selection tool"),
            Shortcut::new(&["L", "2"], ToolKind::Line, "Line tool"),
            Shortcut::new(&["R", "3"], ToolKind::Rectangle, "Rectangle tool"),
        ]
    }

    /// Tool bound to a typed character, case-insensitive.
    pub fn tool_for_key(key: &str) -> Option<ToolKind> {
        Self::all().into_iter().find(|s| s.matches(key)).map(|s| s.tool)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_and_digit_bindings() {
        assert_eq!(ShortcutRegistry::tool_for_key("v"), Some(ToolKind::Selection));
        assert_eq!(ShortcutRegistry::tool_for_key("1"), Some(ToolKind::Selection));
        assert_eq!(ShortcutRegistry::tool_for_key("L"), Some(ToolKind::Line));
        assert_eq!(ShortcutRegistry::tool_for_key("2"), Some(ToolKind::Line));
        assert_eq!(ShortcutRegistry::tool_for_key("r"), Some(ToolKind::Rectangle));
        assert_eq!(ShortcutRegistry::tool_for_key("3"), Some(ToolKind::Rectangle));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(ShortcutRegistry::tool_for_key("x"), None);
        assert_eq!(ShortcutRegistry::tool_for_key(""), None);
    }

    #[test]
    fn test_every_tool_has_a_shortcut() {
        for tool in ToolKind::ALL {
            assert!(ShortcutRegistry::all().iter().any(|s| s.tool == tool));
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(ShortcutRegistry::all()[0].format(), "V / 1");
    }
}
