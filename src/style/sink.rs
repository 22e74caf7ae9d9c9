//! Destinations for style-variable writes.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Receives named style variables.
///
/// Names are given without the `--` prefix. Writes cannot fail.
pub trait StyleSink {
    fn set_variable(&mut self, name: &str, value: &str);
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value)
    }
}

impl<T: StyleSink + ?Sized> StyleSink for Box<T> {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value)
    }
}

/// A sink that drops every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl StyleSink for NoopSink {
    fn set_variable(&mut self, _name: &str, _value: &str) {}
}

/// A registry of the last value written to each variable.
///
/// Variables are kept in name order so exports are deterministic.
///
/// # Example
///
/// ```rust
/// use theme_chooser::{StyleSink, StyleVariables};
///
/// let mut vars = StyleVariables::new();
/// vars.set_variable("accent", "0, 143, 180");
/// assert_eq!(vars.get("accent"), Some("0, 143, 180"));
/// assert_eq!(vars.to_css(), ":root {\n  --accent: 0, 143, 180;\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    values: BTreeMap<String, String>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the variables as custom properties on `:root`.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSink for StyleVariables {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}
