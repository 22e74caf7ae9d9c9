//! Light/dark color mode and OS detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use super::theme::{Theme, DARK, LIGHT};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl Theme {
    /// The color mode this theme belongs to.
    pub fn color_mode(&self) -> ColorMode {
        if self.is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// The known theme for a color mode.
    pub fn for_mode(mode: ColorMode) -> &'static Theme {
        match mode {
            ColorMode::Light => &LIGHT,
            ColorMode::Dark => &DARK,
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to determine whether the user prefers light or dark.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the current color mode detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

/// The known theme matching the detected color mode.
pub fn system_theme() -> &'static Theme {
    Theme::for_mode(detect_color_mode())
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_color_mode_of_themes() {
        assert_eq!(LIGHT.color_mode(), ColorMode::Light);
        assert_eq!(DARK.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_for_mode_round_trips() {
        assert_eq!(Theme::for_mode(ColorMode::Dark), &DARK);
        assert_eq!(Theme::for_mode(LIGHT.color_mode()), &LIGHT);
    }

    #[test]
    #[serial]
    fn test_system_theme_uses_detector() {
        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(system_theme().name, "dark");

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(system_theme().name, "light");
    }
}
