//! # Theme Chooser - Theme and Accent Selection
//!
//! `theme-chooser` lets a user pick a light or dark theme and an accent
//! color, remembers the choice across sessions, and publishes it as named
//! style variables so the rest of an application renders consistently.
//!
//! ## Core Concepts
//!
//! - [`ThemeChooser`]: Owns the selection, restores it once, applies changes
//! - [`Theme`]: One of the two fixed palettes in [`THEMES`]
//! - [`ACCENT_COLORS`]: The six accent presets
//! - [`KeyValueStore`]: Where the selection is persisted ([`MemoryStore`], [`FileStore`])
//! - [`StyleSink`]: Where style variables are published ([`StyleVariables`], [`NoopSink`])
//! - [`SharedSelection`]: Read access to the current selection from anywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_chooser::{MemoryStore, SharedSelection, StyleVariables, ThemeChooser, DARK};
//!
//! let mut chooser = ThemeChooser::new(MemoryStore::new(), StyleVariables::new())
//!     .with_selection(SharedSelection::new());
//! chooser.initialize();
//!
//! chooser.select_theme(&DARK);
//! chooser.select_accent_color("0, 143, 180");
//!
//! let vars = chooser.sink();
//! assert_eq!(vars.get("background"), Some("35, 35, 35"));
//! assert_eq!(vars.get("toastify-color-info"), Some("rgb(0, 143, 180)"));
//! ```
//!
//! ## Process-wide Selection
//!
//! A chooser created with [`ThemeChooser::new`] writes to the process-wide
//! holder, readable through [`current_theme`] and [`current_accent_color`].
//! Use [`ThemeChooser::with_selection`] to give it a private holder instead.
//!
//! ## Persistence
//!
//! The theme name is stored under `"theme"` and the accent under `"accent"`.
//! Restoring never writes back; an unknown stored theme name is ignored.

pub mod chooser;
pub mod render;
pub mod selection;
pub mod store;
pub mod style;
pub mod theme;
mod util;

pub use chooser::{ChooserOptions, Control, ControlKind, ThemeChooser};
pub use render::{render_controls, OutputMode};
pub use selection::{
    current_accent_color, current_theme, global_selection, Selection, SharedSelection,
};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, ACCENT_KEY, THEME_KEY};
pub use style::{wrap_rgb, ColorParseError, NoopSink, Rgb, StyleSink, StyleVariables};
pub use theme::{
    detect_color_mode, find_theme, is_preset_accent, set_color_mode_detector, system_theme,
    ColorMode, Theme, ACCENT_COLORS, DARK, DEFAULT_ACCENT_COLOR, DEFAULT_THEME, LIGHT, THEMES,
};
pub use util::{rgb_to_ansi256, truncate_to_width};
