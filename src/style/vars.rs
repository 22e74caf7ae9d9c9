//! Names of the published style variables, without the `--` prefix.

pub const BACKGROUND: &str = "background";
pub const FOREGROUND: &str = "foreground";
pub const HOVER_OVERLAY: &str = "hover-overlay";
pub const SELECTED_OVERLAY: &str = "selected-overlay";
pub const ACCENT: &str = "accent";

/// Notification text colors, all derived from the theme background.
///
/// `toastify-text-color-light` is a fixed name and is written for either theme.
pub const TOAST_TEXT_COLORS: [&str; 4] = [
    "toastify-text-color-light",
    "toastify-text-color-info",
    "toastify-text-color-warning",
    "toastify-text-color-error",
];

/// Notification colors derived from the accent.
pub const TOAST_COLORS: [&str; 3] = [
    "toastify-color-info",
    "toastify-color-warning",
    "toastify-color-error",
];
