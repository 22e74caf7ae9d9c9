//! The current theme and accent selection.
//!
//! Any part of an application can read the selection through a
//! [`SharedSelection`] handle or the [`current_theme`] and
//! [`current_accent_color`] shortcuts over the process-wide holder. Only
//! [`ThemeChooser`](crate::ThemeChooser) writes to it.
//!
//! Readers that need to react to changes poll [`SharedSelection::revision`],
//! which increases with every write.

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::theme::{Theme, DEFAULT_ACCENT_COLOR, DEFAULT_THEME};

/// A point-in-time copy of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub theme: &'static Theme,
    pub accent_color: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    selection: Selection,
    revision: u64,
}

/// A cloneable handle to a selection holder.
///
/// Clones share the same state. Starts at the default theme and accent.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    state: Arc<RwLock<State>>,
}

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Selection {
        self.read().selection.clone()
    }

    pub fn theme(&self) -> &'static Theme {
        self.read().selection.theme
    }

    pub fn accent_color(&self) -> String {
        self.read().selection.accent_color.clone()
    }

    /// Number of writes so far.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    pub(crate) fn set_theme(&self, theme: &'static Theme) {
        let mut state = self.write();
        state.selection.theme = theme;
        state.revision += 1;
    }

    pub(crate) fn set_accent_color(&self, color: &str) {
        let mut state = self.write();
        state.selection.accent_color = color.to_string();
        state.revision += 1;
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_SELECTION: Lazy<SharedSelection> = Lazy::new(SharedSelection::new);

/// Handle to the process-wide selection.
pub fn global_selection() -> SharedSelection {
    GLOBAL_SELECTION.clone()
}

/// The theme currently in effect for the process.
pub fn current_theme() -> &'static Theme {
    GLOBAL_SELECTION.theme()
}

/// The accent color currently in effect for the process.
pub fn current_accent_color() -> String {
    GLOBAL_SELECTION.accent_color()
}
