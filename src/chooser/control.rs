//! Selectable controls, one per theme and per accent preset.

use crate::style::wrap_rgb;
use crate::theme::Theme;

/// What a control selects when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Theme(&'static Theme),
    Accent(&'static str),
}

/// A clickable option as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    /// Whether this option is the current selection.
    pub selected: bool,
}

impl Control {
    /// Stable identifier: the theme name or the accent value.
    pub fn key(&self) -> &'static str {
        match self.kind {
            ControlKind::Theme(theme) => theme.name,
            ControlKind::Accent(color) => color,
        }
    }

    /// Class list for the control, e.g. `"theme dark"` or `"accent"`.
    pub fn class(&self) -> String {
        match self.kind {
            ControlKind::Theme(theme) => format!("theme {}", theme.name),
            ControlKind::Accent(_) => "accent".to_string(),
        }
    }

    /// Swatch background, present on accent controls only.
    pub fn swatch_color(&self) -> Option<String> {
        match self.kind {
            ControlKind::Theme(_) => None,
            ControlKind::Accent(color) => Some(wrap_rgb(color)),
        }
    }

    /// The `"R, G, B"` triple that best previews this option.
    pub(crate) fn preview_color(&self) -> &'static str {
        match self.kind {
            ControlKind::Theme(theme) => theme.background_color,
            ControlKind::Accent(color) => color,
        }
    }
}
