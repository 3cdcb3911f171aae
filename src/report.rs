use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::contrast::{best_text_color, contrast_ratio, AccessibilityScore};
use crate::analysis::emotion::{analyze_emotions, EmotionalAnalysis};
use crate::analysis::harmony::{classify_harmony, ColorHarmony};
use crate::analysis::industry::{industries_for, IndustryRelevance};
use crate::analysis::suggest::{suggestions_for, ColorSuggestion};
use crate::color::Rgb;
use crate::error::{ColorError, Result};
use crate::record::{Color, Palette};

/// How one palette color fares as a background for plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAccessibility {
    pub hex: String,
    /// White text on this color.
    pub white_text: AccessibilityScore,
    /// Black text on this color.
    pub black_text: AccessibilityScore,
    /// Whichever of black and white reads better.
    pub text_color: String,
}

impl ColorAccessibility {
    pub fn for_color(color: &Color) -> Self {
        Self {
            hex: color.hex.clone(),
            white_text: AccessibilityScore::from_ratio(contrast_ratio(Rgb::WHITE, color.rgb)),
            black_text: AccessibilityScore::from_ratio(contrast_ratio(Rgb::BLACK, color.rgb)),
            text_color: best_text_color(color.rgb).to_hex(),
        }
    }
}

/// Every analysis of a palette bundled together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteReport {
    pub name: String,
    pub colors: Vec<String>,
    pub harmony: ColorHarmony,
    pub emotional: EmotionalAnalysis,
    pub industry: IndustryRelevance,
    pub accessibility: Vec<ColorAccessibility>,
    /// Companions for the first color of the palette.
    pub suggestions: Vec<ColorSuggestion>,
}

/// Run harmony, emotion, industry, accessibility and suggestion analysis
/// over `palette`.
pub fn analyze_palette(palette: &Palette) -> Result<PaletteReport> {
    let base = palette.colors.first().ok_or(ColorError::EmptyPalette)?;
    let hexes = palette.hexes();

    let harmony = classify_harmony(hexes.as_slice())?;
    let emotional = analyze_emotions(hexes.as_slice())?;
    let industry = industries_for(&emotional);

    info!(
        palette = %palette.name,
        colors = palette.len(),
        harmony = %harmony.kind,
        mood = %emotional.mood,
        "analyzed palette"
    );

    Ok(PaletteReport {
        name: palette.name.clone(),
        colors: hexes.iter().map(|h| h.to_string()).collect(),
        harmony,
        emotional,
        industry,
        accessibility: palette.colors.iter().map(ColorAccessibility::for_color).collect(),
        suggestions: suggestions_for(base.rgb),
    })
}
