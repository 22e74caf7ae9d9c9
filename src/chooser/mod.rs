//! The theme and accent selector.
//!
//! [`ThemeChooser`] keeps the authoritative selection, restores it from a
//! [`KeyValueStore`] once, and applies every change to a [`StyleSink`]:
//!
//! | Change | Variables written |
//! |--------|-------------------|
//! | theme  | `background`, `foreground`, `hover-overlay`, `selected-overlay`, `toastify-text-color-{light,info,warning,error}` |
//! | accent | `accent`, `toastify-color-{info,warning,error}` |
//!
//! The `toastify-*` values are the `rgb(...)` wrapped background or accent.

mod control;
mod options;

pub use control::{Control, ControlKind};
pub use options::ChooserOptions;

use crate::selection::{global_selection, SharedSelection};
use crate::store::{KeyValueStore, ACCENT_KEY, THEME_KEY};
use crate::style::{vars, wrap_rgb, StyleSink};
use crate::theme::{find_theme, Theme, ACCENT_COLORS, THEMES};

/// Selects, applies, and persists the theme and accent color.
///
/// # Example
///
/// ```rust
/// use theme_chooser::{MemoryStore, SharedSelection, StyleVariables, ThemeChooser, DARK};
///
/// let store = MemoryStore::new().with("accent", "0, 143, 180");
/// let mut chooser = ThemeChooser::new(store, StyleVariables::new())
///     .with_selection(SharedSelection::new());
///
/// chooser.initialize();
/// assert_eq!(chooser.selection().accent_color(), "0, 143, 180");
///
/// chooser.select_theme(&DARK);
/// assert_eq!(chooser.sink().get("background"), Some("35, 35, 35"));
/// ```
#[derive(Debug)]
pub struct ThemeChooser<S, V> {
    store: S,
    sink: V,
    selection: SharedSelection,
    options: ChooserOptions,
    initialized: bool,
}

impl<S: KeyValueStore, V: StyleSink> ThemeChooser<S, V> {
    /// Creates a chooser writing to the process-wide selection.
    pub fn new(store: S, sink: V) -> Self {
        Self {
            store,
            sink,
            selection: global_selection(),
            options: ChooserOptions::new(),
            initialized: false,
        }
    }

    /// Replaces the selection holder this chooser writes to.
    pub fn with_selection(mut self, selection: SharedSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Replaces the change callbacks.
    pub fn with_options(mut self, options: ChooserOptions) -> Self {
        self.options = options;
        self
    }

    /// Restores the persisted selection.
    ///
    /// Runs once; later calls do nothing. A stored theme name that matches no
    /// known theme is ignored, and the accent is restored either way.
    /// Restored values are applied without being written back.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(name) = self.store.get(THEME_KEY) {
            match find_theme(&name) {
                Some(theme) => {
                    tracing::debug!(theme = theme.name, "restoring theme");
                    self.apply_theme(theme, false);
                }
                None => tracing::warn!(theme = %name, "ignoring unknown stored theme"),
            }
        }

        if let Some(color) = self.store.get(ACCENT_KEY).filter(|c| !c.is_empty()) {
            tracing::debug!(accent = %color, "restoring accent color");
            self.apply_accent_color(&color, false);
        }
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Selects `theme` and persists it.
    pub fn select_theme(&mut self, theme: &'static Theme) {
        self.apply_theme(theme, true);
    }

    /// Selects `theme`, persisting it only when `persist` is true.
    pub fn apply_theme(&mut self, theme: &'static Theme, persist: bool) {
        self.selection.set_theme(theme);

        if persist {
            self.store.set(THEME_KEY, theme.name);
        }

        self.sink.set_variable(vars::BACKGROUND, theme.background_color);
        self.sink.set_variable(vars::FOREGROUND, theme.foreground_color);
        self.sink
            .set_variable(vars::HOVER_OVERLAY, theme.hover_overlay_color);
        self.sink
            .set_variable(vars::SELECTED_OVERLAY, theme.selected_overlay_color);

        let text_color = wrap_rgb(theme.background_color);
        for name in vars::TOAST_TEXT_COLORS {
            self.sink.set_variable(name, &text_color);
        }

        tracing::debug!(theme = theme.name, persist, "theme selected");
        (self.options.theme_changed)(theme);
    }

    /// Selects an accent color and persists it.
    ///
    /// Any string is accepted, not only the presets.
    pub fn select_accent_color(&mut self, color: &str) {
        self.apply_accent_color(color, true);
    }

    /// Selects an accent color, persisting it only when `persist` is true.
    pub fn apply_accent_color(&mut self, color: &str, persist: bool) {
        self.selection.set_accent_color(color);

        if persist {
            self.store.set(ACCENT_KEY, color);
        }

        self.sink.set_variable(vars::ACCENT, color);

        let wrapped = wrap_rgb(color);
        for name in vars::TOAST_COLORS {
            self.sink.set_variable(name, &wrapped);
        }

        tracing::debug!(accent = color, persist, "accent color selected");
        (self.options.accent_color_changed)(color);
    }

    /// One control per theme followed by one per accent preset.
    pub fn controls(&self) -> Vec<Control> {
        let current = self.selection.snapshot();

        let themes = THEMES.iter().map(|&theme| Control {
            kind: ControlKind::Theme(theme),
            selected: theme == current.theme,
        });
        let accents = ACCENT_COLORS.iter().map(|&color| Control {
            kind: ControlKind::Accent(color),
            selected: color == current.accent_color,
        });

        themes.chain(accents).collect()
    }

    /// Performs the selection a control stands for, persisting it.
    pub fn activate(&mut self, control: &Control) {
        match control.kind {
            ControlKind::Theme(theme) => self.select_theme(theme),
            ControlKind::Accent(color) => self.select_accent_color(color),
        }
    }

    /// The holder this chooser writes to.
    pub fn selection(&self) -> &SharedSelection {
        &self.selection
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The style sink receiving variable writes.
    pub fn sink(&self) -> &V {
        &self.sink
    }

    /// Consumes the chooser, returning its store and sink.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::style::StyleVariables;
    use crate::theme::{DARK, LIGHT};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn chooser(store: MemoryStore) -> ThemeChooser<MemoryStore, StyleVariables> {
        ThemeChooser::new(store, StyleVariables::new()).with_selection(SharedSelection::new())
    }

    #[test]
    fn test_initialize_restores_each_known_theme_without_writing() {
        for theme in THEMES {
            let mut chooser = chooser(MemoryStore::new().with("theme", theme.name));
            chooser.initialize();

            assert_eq!(chooser.selection().theme().name, theme.name);
            assert_eq!(chooser.store().writes(), 0);
            assert_eq!(chooser.sink().get("background"), Some(theme.background_color));
        }
    }

    #[test]
    fn test_initialize_ignores_unknown_theme() {
        let store = MemoryStore::new()
            .with("theme", "neon")
            .with("accent", "97, 187, 50");
        let mut chooser = chooser(store);
        chooser.initialize();

        assert_eq!(chooser.selection().theme(), &LIGHT);
        assert_eq!(chooser.sink().get("background"), None);
        // The accent is still restored after the unknown theme.
        assert_eq!(chooser.selection().accent_color(), "97, 187, 50");
        assert_eq!(chooser.store().writes(), 0);
    }

    #[test]
    fn test_initialize_restores_custom_accent() {
        let mut chooser = chooser(MemoryStore::new().with("accent", "12, 34, 56"));
        chooser.initialize();

        assert_eq!(chooser.selection().accent_color(), "12, 34, 56");
        assert_eq!(chooser.sink().get("accent"), Some("12, 34, 56"));
        assert_eq!(chooser.store().writes(), 0);
    }

    #[test]
    fn test_initialize_skips_empty_accent() {
        let mut chooser = chooser(MemoryStore::new().with("accent", ""));
        chooser.initialize();

        assert_eq!(chooser.selection().accent_color(), "84, 156, 181");
        assert!(chooser.sink().is_empty());
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut chooser = chooser(MemoryStore::new().with("theme", "dark"));
        chooser.initialize();
        chooser.select_theme(&LIGHT);
        chooser.initialize();

        assert!(chooser.is_initialized());
        assert_eq!(chooser.selection().theme(), &LIGHT);
    }

    #[test]
    fn test_select_theme_writes_all_effects() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&seen);
        let options =
            ChooserOptions::new().on_theme_changed(move |theme| recorder.borrow_mut().push(theme.name));

        let mut chooser = chooser(MemoryStore::new()).with_options(options);
        chooser.select_theme(&DARK);

        assert_eq!(chooser.selection().theme(), &DARK);
        assert_eq!(chooser.store().get("theme").as_deref(), Some("dark"));

        let sink = chooser.sink();
        assert_eq!(sink.len(), 8);
        assert_eq!(sink.get("background"), Some("35, 35, 35"));
        assert_eq!(sink.get("foreground"), Some("245, 245, 245"));
        assert_eq!(sink.get("hover-overlay"), Some("rgba(0, 0, 0, 0.05)"));
        assert_eq!(sink.get("selected-overlay"), Some("rgba(0, 0, 0, 0.2)"));
        for name in vars::TOAST_TEXT_COLORS {
            assert_eq!(sink.get(name), Some("rgb(35, 35, 35)"), "{name}");
        }

        assert_eq!(*seen.borrow(), vec!["dark"]);
    }

    #[test]
    fn test_apply_theme_without_persist() {
        let mut chooser = chooser(MemoryStore::new());
        chooser.apply_theme(&DARK, false);

        assert_eq!(chooser.selection().theme(), &DARK);
        assert_eq!(chooser.store().get("theme"), None);
        assert_eq!(chooser.store().writes(), 0);
        assert_eq!(chooser.sink().len(), 8);
    }

    #[test]
    fn test_select_accent_color_writes_all_effects() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&seen);
        let options = ChooserOptions::new()
            .on_accent_color_changed(move |color| recorder.borrow_mut().push(color.to_string()));

        let mut chooser = chooser(MemoryStore::new()).with_options(options);
        chooser.select_accent_color("0, 143, 180");

        assert_eq!(chooser.selection().accent_color(), "0, 143, 180");
        assert_eq!(chooser.store().get("accent").as_deref(), Some("0, 143, 180"));

        let sink = chooser.sink();
        assert_eq!(sink.len(), 4);
        assert_eq!(sink.get("accent"), Some("0, 143, 180"));
        for name in vars::TOAST_COLORS {
            assert_eq!(sink.get(name), Some("rgb(0, 143, 180)"), "{name}");
        }

        assert_eq!(*seen.borrow(), vec!["0, 143, 180".to_string()]);
    }

    #[test]
    fn test_select_theme_is_idempotent() {
        let mut once = chooser(MemoryStore::new());
        once.select_theme(&LIGHT);

        let mut twice = chooser(MemoryStore::new());
        twice.select_theme(&LIGHT);
        twice.select_theme(&LIGHT);

        assert_eq!(once.selection().snapshot(), twice.selection().snapshot());
        assert_eq!(once.sink(), twice.sink());
        assert_eq!(once.store().get("theme"), twice.store().get("theme"));
    }

    #[test]
    fn test_controls_order_and_selection() {
        let mut chooser = chooser(MemoryStore::new());
        chooser.select_accent_color("0, 143, 180");

        let controls = chooser.controls();
        assert_eq!(controls.len(), 8);

        let keys: Vec<_> = controls.iter().map(Control::key).collect();
        assert_eq!(
            keys,
            vec![
                "light",
                "dark",
                "84, 156, 181",
                "161, 171, 116",
                "190, 104, 158",
                "0, 143, 180",
                "244, 121, 32",
                "97, 187, 50",
            ]
        );

        let selected: Vec<_> = controls
            .iter()
            .filter(|c| c.selected)
            .map(Control::key)
            .collect();
        assert_eq!(selected, vec!["light", "0, 143, 180"]);
    }

    #[test]
    fn test_activate_persists() {
        let mut chooser = chooser(MemoryStore::new());
        let dark = chooser
            .controls()
            .into_iter()
            .find(|c| c.class() == "theme dark")
            .unwrap();

        chooser.activate(&dark);
        assert_eq!(chooser.store().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_custom_accent_selects_no_preset_control() {
        let mut chooser = chooser(MemoryStore::new().with("accent", "1, 2, 3"));
        chooser.initialize();

        assert!(chooser
            .controls()
            .iter()
            .filter(|c| matches!(c.kind, ControlKind::Accent(_)))
            .all(|c| !c.selected));
    }
}
