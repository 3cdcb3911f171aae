use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::analysis::contrast::{
    best_text_color, contrast_ratio, AAA_CONTRAST, AA_CONTRAST, READABLE_CONTRAST,
};
use crate::color::Rgb;
use crate::record::Palette;

/// Width of the colored swatch cell.
const SWATCH_WIDTH: usize = 10;

/// A widget that renders a palette as one row per color: a labeled swatch,
/// the HSL reading and the contrast against white and black text.
#[derive(Clone, Copy)]
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Rows needed to draw the whole palette, borders included.
    pub fn height(&self) -> u16 {
        u16::try_from(self.palette.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn contrast_fg(c: Rgb) -> Color {
    to_color(best_text_color(c))
}

/// Grade a ratio the way the WCAG levels read.
fn grade(ratio: f64) -> &'static str {
    if ratio >= AAA_CONTRAST {
        "AAA"
    } else if ratio >= AA_CONTRAST {
        "AA "
    } else if ratio >= READABLE_CONTRAST {
        "lg "
    } else {
        "-- "
    }
}

fn build_color_row(rgb: Rgb, name: Option<&str>) -> Line<'static> {
    let hsl = rgb.to_hsl();
    let on_white = contrast_ratio(Rgb::WHITE, rgb);
    let on_black = contrast_ratio(Rgb::BLACK, rgb);

    let swatch = Span::styled(
        format!("{:^width$}", rgb.to_hex(), width = SWATCH_WIDTH),
        Style::default()
            .bg(to_color(rgb))
            .fg(contrast_fg(rgb))
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![
        Span::raw(" "),
        swatch,
        Span::raw(format!("  {hsl}")),
        Span::styled(
            format!("  white {on_white:>4.1} {}", grade(on_white)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  black {on_black:>4.1} {}", grade(on_black)),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(name) = name {
        spans.push(Span::styled(
            format!("  {name}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(self.palette.name.clone());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .palette
            .colors
            .iter()
            .map(|c| build_color_row(c.rgb, c.name.as_deref()))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Color as PaletteColor;

    fn rendered(palette: &Palette, width: u16) -> (Buffer, String) {
        let widget = PaletteWidget::new(palette);
        let area = Rect::new(0, 0, width, widget.height());
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = buf.content().iter().map(|cell| cell.symbol()).collect();
        (buf, text)
    }

    #[test]
    fn draws_one_row_per_color() {
        let mut palette = Palette::from_hexes("Sunset", &["#FF5733", "#101020"]).unwrap();
        palette.push(PaletteColor::named("#FFFFFF", "Paper").unwrap());
        let (_, text) = rendered(&palette, 90);

        assert!(text.contains("Sunset"));
        assert!(text.contains("#FF5733"));
        assert!(text.contains("#101020"));
        assert!(text.contains("Paper"));
        assert!(text.contains("black 21.0 AAA"));
    }

    #[test]
    fn swatch_uses_the_color_as_background() {
        let palette = Palette::from_hexes("One", &["#336699"]).unwrap();
        let (buf, _) = rendered(&palette, 90);
        // first cell inside the border plus the leading space
        let cell = &buf[(2, 1)];
        assert_eq!(cell.bg, Color::Rgb(0x33, 0x66, 0x99));
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn height_counts_borders() {
        let palette = Palette::from_hexes("Three", &["#000000", "#111111", "#222222"]).unwrap();
        assert_eq!(PaletteWidget::new(&palette).height(), 5);
    }

    #[test]
    fn grades_follow_wcag_levels() {
        assert_eq!(grade(21.0), "AAA");
        assert_eq!(grade(4.5), "AA ");
        assert_eq!(grade(3.2), "lg ");
        assert_eq!(grade(1.0), "-- ");
    }
}
