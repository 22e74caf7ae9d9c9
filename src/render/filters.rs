//! MiniJinja filter registration.

use console::{Color, Style};
use minijinja::{Environment, Value};

use super::{OutputMode, SWATCH_WIDTH};
use crate::style::Rgb;
use crate::util::truncate_to_width;

/// Registers the `swatch` filter on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'_>, mode: OutputMode) {
    let use_color = mode.should_use_color();

    // Usage: {{ label | swatch(color, selected) }}
    env.add_filter(
        "swatch",
        move |value: Value, color: String, selected: bool| -> String {
            let label = truncate_to_width(&value.to_string(), SWATCH_WIDTH);
            let text = if selected {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            };

            match Rgb::parse(&color) {
                Ok(rgb) => swatch_style(rgb)
                    .force_styling(use_color)
                    .apply_to(text)
                    .to_string(),
                // Custom accents need not be triples.
                Err(_) => text,
            }
        },
    );
}

fn swatch_style(rgb: Rgb) -> Style {
    let fg = if rgb.is_light() {
        Color::Black
    } else {
        Color::White
    };
    Style::new().bg(Color::Color256(rgb.to_ansi256())).fg(fg)
}
