//! Style-variable publishing.
//!
//! The chooser applies a selection by writing named variables into a
//! [`StyleSink`]. In a browser host these are document-level CSS custom
//! properties; [`StyleVariables`] records them and can export a `:root`
//! block for anything else.
//!
//! - [`StyleSink`]: Destination for variable writes
//! - [`StyleVariables`]: Ordered recording registry
//! - [`NoopSink`]: Discards every write
//! - [`Rgb`]: Parsed `"R, G, B"` triple

mod color;
mod error;
mod sink;
pub mod vars;

pub use color::{wrap_rgb, Rgb};
pub use error::ColorParseError;
pub use sink::{NoopSink, StyleSink, StyleVariables};
