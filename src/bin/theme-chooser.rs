//! Command line front end: inspect and change the persisted selection.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use theme_chooser::{
    find_theme, render_controls, system_theme, FileStore, OutputMode, Rgb, StyleVariables, Theme,
    ThemeChooser, ACCENT_COLORS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "theme-chooser", about = "Pick a theme and accent color")]
struct Cli {
    /// JSON file holding the persisted selection
    #[arg(long, default_value = "theme-chooser.json")]
    store: PathBuf,

    /// When to color swatches
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for OutputMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => OutputMode::Auto,
            ColorArg::Always => OutputMode::Term,
            ColorArg::Never => OutputMode::Text,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the available swatches and the current selection
    Show,
    /// Select a theme by name, or `system` to follow the OS setting
    Theme { name: String },
    /// Select an accent by preset number (1-6) or as an "R, G, B" triple
    Accent { color: String },
    /// Print the selection as CSS custom properties
    Css,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileStore::open(&cli.store)
        .with_context(|| format!("opening {}", cli.store.display()))?;

    let mut chooser = ThemeChooser::new(store, StyleVariables::new());
    chooser.initialize();

    match cli.command {
        Command::Show => {}
        Command::Theme { name } => {
            let theme = resolve_theme(&name)?;
            chooser.select_theme(theme);
        }
        Command::Accent { color } => {
            let color = resolve_accent(&color)?;
            chooser.select_accent_color(&color);
        }
        Command::Css => {
            // Publish both halves even when nothing was stored yet.
            let current = chooser.selection().snapshot();
            chooser.apply_theme(current.theme, false);
            chooser.apply_accent_color(&current.accent_color, false);
            print!("{}", chooser.sink().to_css());
            return Ok(());
        }
    }

    println!("{}", render_controls(&chooser, cli.color.into())?);
    Ok(())
}

fn resolve_theme(name: &str) -> Result<&'static Theme> {
    if name == "system" {
        return Ok(system_theme());
    }
    match find_theme(name) {
        Some(theme) => Ok(theme),
        None => bail!("unknown theme '{}' (expected light, dark or system)", name),
    }
}

/// Accepts a preset number (1-based) or an `"R, G, B"` triple, normalized.
fn resolve_accent(input: &str) -> Result<String> {
    if let Ok(index) = input.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| ACCENT_COLORS.get(i)) {
            Some(color) => Ok(color.to_string()),
            None => bail!("accent preset must be 1-{}", ACCENT_COLORS.len()),
        };
    }

    let rgb = Rgb::parse(input)?;
    Ok(rgb.to_string())
}
