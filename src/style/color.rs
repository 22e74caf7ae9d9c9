//! RGB triples as used by backgrounds and accents.

use std::fmt;
use std::str::FromStr;

use super::error::ColorParseError;
use crate::util::rgb_to_ansi256;

/// Wraps a bare triple as a CSS `rgb(...)` expression.
///
/// The value is not inspected; `"0, 143, 180"` becomes `"rgb(0, 143, 180)"`.
pub fn wrap_rgb(triple: &str) -> String {
    format!("rgb({})", triple)
}

/// A color parsed from an `"R, G, B"` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"R, G, B"`, optionally wrapped as `rgb(R, G, B)`.
    ///
    /// Whitespace around components is ignored.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let inner = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ComponentCount {
                value: value.to_string(),
                found: parts.len(),
            });
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            *channel = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent {
                    value: value.to_string(),
                    component: part.to_string(),
                })?;
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Nearest ANSI 256-color palette index.
    pub fn to_ansi256(self) -> u8 {
        rgb_to_ansi256((self.r, self.g, self.b))
    }

    /// True when dark text reads better than light text on this color.
    pub fn is_light(self) -> bool {
        // Rec. 601 luma
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma >= 128 * 1000
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}
