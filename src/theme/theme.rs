//! Theme records.

/// A fixed palette describing a light or dark look.
///
/// Themes are never created at runtime; use [`THEMES`] or [`find_theme`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme {
    /// Unique identifier, also the value persisted under the `"theme"` key.
    pub name: &'static str,
    pub is_dark: bool,
    /// `"R, G, B"` triple.
    pub background_color: &'static str,
    /// `"R, G, B"` triple.
    pub foreground_color: &'static str,
    /// Full `rgba(...)` expression.
    pub hover_overlay_color: &'static str,
    /// Full `rgba(...)` expression.
    pub selected_overlay_color: &'static str,
}

pub static LIGHT: Theme = Theme {
    name: "light",
    is_dark: false,
    background_color: "245, 245, 245",
    foreground_color: "35, 35, 35",
    hover_overlay_color: "rgba(255, 255, 255, 0.1)",
    selected_overlay_color: "rgba(0, 0, 0, 0.2)",
};

pub static DARK: Theme = Theme {
    name: "dark",
    is_dark: true,
    background_color: "35, 35, 35",
    foreground_color: "245, 245, 245",
    hover_overlay_color: "rgba(0, 0, 0, 0.05)",
    selected_overlay_color: "rgba(0, 0, 0, 0.2)",
};

/// All known themes, in display order.
pub static THEMES: [&Theme; 2] = [&LIGHT, &DARK];

/// The theme in effect before anything is restored or selected.
pub static DEFAULT_THEME: &Theme = &LIGHT;

/// Looks up a known theme by its `name`.
///
/// Matching is exact; persisted values are compared as stored.
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().copied().find(|theme| theme.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_order_and_default() {
        assert_eq!(THEMES.len(), 2);
        assert_eq!(THEMES[0].name, "light");
        assert_eq!(THEMES[1].name, "dark");
        assert_eq!(DEFAULT_THEME, THEMES[0]);
    }

    #[test]
    fn test_theme_names_are_unique() {
        assert_ne!(THEMES[0].name, THEMES[1].name);
    }

    #[test]
    fn test_find_theme_known() {
        assert_eq!(find_theme("dark"), Some(&DARK));
        assert_eq!(find_theme("light"), Some(&LIGHT));
    }

    #[test]
    fn test_find_theme_unknown() {
        assert!(find_theme("neon").is_none());
        assert!(find_theme("").is_none());
        assert!(find_theme("Dark").is_none());
    }

    #[test]
    fn test_dark_flag() {
        assert!(!LIGHT.is_dark);
        assert!(DARK.is_dark);
    }
}
