//! Theme system for human-mode output.

use console::Style;

/// Visual theme for monctl human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
pub struct MonTheme {
    // Status colors
    pub success: Style,
    pub error: Style,
    pub warning: Style,

    // Component styles
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub index: Style,
    pub command: Style,
}

impl Default for MonTheme {
    fn default() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            index: Style::new().yellow().bold(),
            command: Style::new().green(),
        }
    }
}
