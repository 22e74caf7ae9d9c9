//! Terminal rendering of the chooser controls.
//!
//! Controls are rendered through a minijinja template with a `swatch`
//! filter that paints each label in the color it previews. The current
//! selection is bracketed so it stays visible without color.

mod filters;
mod output;

pub use output::OutputMode;

use minijinja::{context, Environment, Error};
use serde::Serialize;

use crate::chooser::{Control, ControlKind, ThemeChooser};
use crate::store::KeyValueStore;
use crate::style::StyleSink;
use filters::register_filters;

/// Width, in columns, that accent labels are truncated to.
pub const SWATCH_WIDTH: usize = 13;

const CONTROLS_TEMPLATE: &str = "\
theme  {% for c in themes %}{{ c.label | swatch(c.color, c.selected) }}{% if not loop.last %} {% endif %}{% endfor %}
accent {% for c in accents %}{{ c.label | swatch(c.color, c.selected) }}{% if not loop.last %} {% endif %}{% endfor %}";

#[derive(Serialize)]
struct SwatchView {
    label: &'static str,
    color: &'static str,
    selected: bool,
}

impl From<&Control> for SwatchView {
    fn from(control: &Control) -> Self {
        Self {
            label: control.key(),
            color: control.preview_color(),
            selected: control.selected,
        }
    }
}

/// Renders the chooser's controls as two lines of swatches.
///
/// # Example
///
/// ```rust
/// use theme_chooser::{render_controls, MemoryStore, NoopSink, OutputMode, SharedSelection, ThemeChooser};
///
/// let chooser = ThemeChooser::new(MemoryStore::new(), NoopSink)
///     .with_selection(SharedSelection::new());
/// let output = render_controls(&chooser, OutputMode::Text).unwrap();
/// assert!(output.starts_with("theme  [light]  dark "));
/// ```
pub fn render_controls<S, V>(chooser: &ThemeChooser<S, V>, mode: OutputMode) -> Result<String, Error>
where
    S: KeyValueStore,
    V: StyleSink,
{
    let controls = chooser.controls();
    let (themes, accents): (Vec<&Control>, Vec<&Control>) = controls
        .iter()
        .partition(|c| matches!(c.kind, ControlKind::Theme(_)));

    let themes: Vec<SwatchView> = themes.into_iter().map(SwatchView::from).collect();
    let accents: Vec<SwatchView> = accents.into_iter().map(SwatchView::from).collect();

    let mut env = Environment::new();
    register_filters(&mut env, mode);
    env.render_str(CONTROLS_TEMPLATE, context! { themes, accents })
}
