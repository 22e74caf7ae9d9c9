//! Persistent key-value storage for the selection.
//!
//! The chooser only needs string `get`/`set`, modeled by [`KeyValueStore`].
//! [`MemoryStore`] keeps values for the life of the process; [`FileStore`]
//! keeps them in a JSON object on disk so they survive across sessions.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the selected theme's name.
pub const THEME_KEY: &str = "theme";
/// Storage key holding the selected accent color.
pub const ACCENT_KEY: &str = "accent";

/// Durable string storage.
///
/// `set` has no failure path; implementations that can fail report it
/// through logging.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SharedSelection;
    use crate::style::NoopSink;
    use crate::theme::DARK;
    use crate::ThemeChooser;

    #[test]
    fn test_chooser_writes_through_mut_ref() {
        let mut store = MemoryStore::new();
        {
            let mut chooser =
                ThemeChooser::new(&mut store, NoopSink).with_selection(SharedSelection::new());
            chooser.select_theme(&DARK);
        }
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_boxed_store_forwards() {
        let mut store: Box<dyn KeyValueStore> =
            Box::new(MemoryStore::new().with(ACCENT_KEY, "1, 2, 3"));
        assert_eq!(store.get(ACCENT_KEY).as_deref(), Some("1, 2, 3"));

        let mut chooser =
            ThemeChooser::new(&mut store, NoopSink).with_selection(SharedSelection::new());
        chooser.select_accent_color("0, 143, 180");
        assert_eq!(chooser.store().get(ACCENT_KEY).as_deref(), Some("0, 143, 180"));
    }
}
