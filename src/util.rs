//! Utility functions for color conversion and label fitting.

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp, everything else onto the
/// 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use theme_chooser::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Truncates a string to fit within a maximum display width, adding `…` if needed.
///
/// Swatch labels are free-form color strings, so a stored custom accent can
/// be arbitrarily long.
///
/// ```rust
/// use theme_chooser::truncate_to_width;
///
/// assert_eq!(truncate_to_width("0, 143, 180", 13), "0, 143, 180");
/// assert_eq!(truncate_to_width("rgba(1, 2, 3, 0.5)", 6), "rgba(…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        // Theme backgrounds are near-white and near-black grays.
        assert!((232..=255).contains(&rgb_to_ansi256((245, 245, 245))));
        assert!((232..=255).contains(&rgb_to_ansi256((35, 35, 35))));
    }

    #[test]
    fn test_rgb_to_ansi256_accent_presets() {
        assert_eq!(rgb_to_ansi256((0, 143, 180)), 16 + 2 * 6 + 3);
        assert_eq!(rgb_to_ansi256((244, 121, 32)), 16 + 36 * 4 + 6 * 2);
    }

    #[test]
    fn test_truncate_to_width_fits() {
        assert_eq!(truncate_to_width("light", 13), "light");
        assert_eq!(truncate_to_width("190, 104, 158", 13), "190, 104, 158");
    }

    #[test]
    fn test_truncate_to_width_truncates() {
        assert_eq!(truncate_to_width("rgba(0, 0, 0, 0.2)", 8), "rgba(0,…");
    }

    #[test]
    fn test_truncate_to_width_zero_width() {
        assert_eq!(truncate_to_width("dark", 0), "…");
    }

    proptest! {
        #[test]
        fn prop_rgb_to_ansi256_in_palette_range(r: u8, g: u8, b: u8) {
            prop_assert!(rgb_to_ansi256((r, g, b)) >= 16);
        }

        #[test]
        fn prop_truncate_never_exceeds_width(s in "[ -~]{0,40}", width in 1usize..30) {
            use unicode_width::UnicodeWidthStr;
            prop_assert!(truncate_to_width(&s, width).width() <= width);
        }
    }
}
