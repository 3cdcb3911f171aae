pub mod widgets;

use anyhow::{Context, Result};
use ratatui::{TerminalOptions, Viewport};
use tracing::debug;

use crate::record::Palette;

pub use widgets::PaletteWidget;

/// Draw the palette below the cursor and hand the terminal back.
pub fn preview(palette: &Palette) -> Result<()> {
    let widget = PaletteWidget::new(palette);
    let height = widget.height();
    debug!(height, colors = palette.len(), "drawing inline preview");

    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    });
    let drawn = terminal.draw(|frame| frame.render_widget(widget, frame.area()));
    ratatui::restore();

    drawn.context("failed to draw palette preview")?;
    println!();
    Ok(())
}
