//! Change callbacks supplied by the embedding application.

use std::fmt;

use crate::theme::Theme;

type ThemeCallback = Box<dyn FnMut(&Theme)>;
type AccentCallback = Box<dyn FnMut(&str)>;

/// Optional observers of selection changes.
///
/// Callbacks left unset do nothing.
///
/// # Example
///
/// ```rust
/// use theme_chooser::ChooserOptions;
///
/// let options = ChooserOptions::new()
///     .on_theme_changed(|theme| println!("theme: {}", theme.name))
///     .on_accent_color_changed(|color| println!("accent: {}", color));
/// ```
pub struct ChooserOptions {
    pub(crate) theme_changed: ThemeCallback,
    pub(crate) accent_color_changed: AccentCallback,
}

impl ChooserOptions {
    pub fn new() -> Self {
        Self {
            theme_changed: Box::new(|_| {}),
            accent_color_changed: Box::new(|_| {}),
        }
    }

    /// Sets the callback invoked after every theme change.
    pub fn on_theme_changed<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Theme) + 'static,
    {
        self.theme_changed = Box::new(callback);
        self
    }

    /// Sets the callback invoked after every accent color change.
    pub fn on_accent_color_changed<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.accent_color_changed = Box::new(callback);
        self
    }
}

impl Default for ChooserOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChooserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChooserOptions").finish_non_exhaustive()
    }
}
