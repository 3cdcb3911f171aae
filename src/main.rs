use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swatchbook::analysis::{
    analyze_emotions, check_accessibility, classify_harmony, generate_suggestions, map_industries,
};
use swatchbook::cli::{Args, Command};
use swatchbook::output::{ContrastCheck, Renderer};
use swatchbook::{analyze_palette, tui, Color, Palette};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let color = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let renderer = Renderer::new(args.format, color);
    debug!(command = ?args.command, format = ?args.format, color, "starting");

    let out = match &args.command {
        Command::Convert { color } => {
            let color = Color::from_hex(color).context("cannot convert color")?;
            renderer.color(&color)?
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let score = check_accessibility(foreground, background)
                .context("cannot check contrast")?;
            renderer.contrast(&ContrastCheck {
                foreground,
                background,
                score,
            })?
        }
        Command::Harmony { colors } => {
            let harmony = classify_harmony(colors).context("cannot classify harmony")?;
            renderer.harmony(&harmony)?
        }
        Command::Emotion { colors } => {
            let analysis = analyze_emotions(colors).context("cannot analyze emotions")?;
            renderer.emotion(&analysis)?
        }
        Command::Industry { colors } => {
            let relevance = map_industries(colors).context("cannot map industries")?;
            renderer.industry(&relevance)?
        }
        Command::Suggest { color } => {
            let suggestions = generate_suggestions(color).context("cannot derive suggestions")?;
            renderer.suggestions(&suggestions)?
        }
        Command::Report { colors, name } => {
            let palette = Palette::from_hexes(name.as_str(), colors).context("invalid palette")?;
            let report = analyze_palette(&palette).context("cannot analyze palette")?;
            renderer.report(&report)?
        }
        Command::Preview { colors, name } => {
            let palette = Palette::from_hexes(name.as_str(), colors).context("invalid palette")?;
            tui::preview(&palette)?;
            return Ok(());
        }
    };

    print!("{out}");
    Ok(())
}

/// Log to stderr so stdout stays clean for JSON output. `RUST_LOG` wins
/// over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("swatchbook={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
