//! Color parsing errors.

/// Error returned when a color-spec string is not an `"R, G, B"` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The value did not split into exactly three components
    ComponentCount { value: String, found: usize },
    /// A component was not an integer in `0..=255`
    InvalidComponent { value: String, component: String },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::ComponentCount { value, found } => {
                write!(
                    f,
                    "color '{}' has {} components, expected 3 (R, G, B)",
                    value, found
                )
            }
            ColorParseError::InvalidComponent { value, component } => {
                write!(
                    f,
                    "color '{}' has invalid component '{}', expected 0-255",
                    value, component
                )
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
