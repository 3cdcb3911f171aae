use clap::{Parser, Subcommand};

/// Analyze color palettes: contrast, harmony, mood and companion colors.
#[derive(Parser, Debug)]
#[command(name = "swatchbook", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored swatches in text output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the hex, RGB and HSL forms of a color
    Convert {
        /// Hex color, e.g. #336699
        color: String,
    },

    /// WCAG contrast of foreground text on a background
    Contrast {
        foreground: String,
        background: String,
    },

    /// Classify the hue relationship of a set of colors
    Harmony {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Infer mood, energy and temperature of a set of colors
    Emotion {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Suggest industries that suit a set of colors
    Industry {
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Derive companion colors from one base color
    Suggest {
        color: String,
    },

    /// Run every analysis over a palette
    Report {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Palette name
        #[arg(short, long, default_value = "Untitled")]
        name: String,
    },

    /// Draw palette swatches inline in the terminal
    Preview {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Palette name
        #[arg(short, long, default_value = "Untitled")]
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
