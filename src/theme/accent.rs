//! Accent color presets.

/// Accent presets in display order. Each is an `"R, G, B"` triple.
pub const ACCENT_COLORS: [&str; 6] = [
    "84, 156, 181",
    "161, 171, 116",
    "190, 104, 158",
    "0, 143, 180",
    "244, 121, 32",
    "97, 187, 50",
];

pub const DEFAULT_ACCENT_COLOR: &str = ACCENT_COLORS[0];

/// Returns true if `color` is one of the presets.
///
/// Selection does not require this; restored custom values are accepted as is.
pub fn is_preset_accent(color: &str) -> bool {
    ACCENT_COLORS.contains(&color)
}
