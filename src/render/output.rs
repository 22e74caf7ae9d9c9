//! Output mode control.

use console::Term;

/// Whether swatches are painted with terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Color when stdout is a terminal that supports it
    #[default]
    Auto,
    /// Always emit color escapes
    Term,
    /// Never emit color escapes
    Text,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}
