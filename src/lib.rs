//! Color-science and palette-analysis engine.
//!
//! Everything here is a pure function of its input: hex strings go in,
//! plain value records come out. Start from [`color`] for conversions, then
//! reach for the [`analysis`] modules or run them all at once with
//! [`report::analyze_palette`].

pub mod analysis;
pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod record;
pub mod report;
pub mod tui;

pub use color::{hex_to_hsl, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use error::{ColorError, Result};
pub use record::{Color, Palette};
pub use report::{analyze_palette, PaletteReport};
