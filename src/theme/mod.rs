//! Theme and accent color catalog.
//!
//! This module provides:
//!
//! - [`Theme`]: A statically enumerated light or dark palette
//! - [`THEMES`]: The fixed set of known themes, `light` first
//! - [`ACCENT_COLORS`]: The ordered accent color presets
//! - [`ColorMode`]: Light or dark color mode, with OS detection
//!
//! Color values are opaque color-spec strings. Backgrounds, foregrounds and
//! accents are bare `"R, G, B"` triples; overlays are full `rgba(...)`
//! expressions.

mod accent;
mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use accent::{is_preset_accent, ACCENT_COLORS, DEFAULT_ACCENT_COLOR};
pub use adaptive::{detect_color_mode, set_color_mode_detector, system_theme, ColorMode};
pub use theme::{find_theme, Theme, DARK, DEFAULT_THEME, LIGHT, THEMES};
