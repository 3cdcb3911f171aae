use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Hsl, Rgb};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionType {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
}

impl SuggestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionType::Complementary => "complementary",
            SuggestionType::Analogous => "analogous",
            SuggestionType::Triadic => "triadic",
            SuggestionType::SplitComplementary => "split-complementary",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Companion colors derived from one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    /// Uppercase `#RRGGBB`.
    pub colors: Vec<String>,
    pub harmony: u8,
}

/// A derived color: hue offset plus saturation and lightness multipliers.
#[derive(Clone, Copy)]
struct Derivation {
    hue_offset: f64,
    saturation: f64,
    lightness: f64,
}

impl Derivation {
    const fn rotate(hue_offset: f64) -> Self {
        Self {
            hue_offset,
            saturation: 1.0,
            lightness: 1.0,
        }
    }

    fn apply(self, base: Hsl) -> String {
        // lightness is allowed past 100 here; the RGB conversion clamps
        let hsl = Hsl {
            s: base.s * self.saturation,
            l: base.l * self.lightness,
            ..base.rotated(self.hue_offset)
        };
        hsl.to_rgb().to_hex()
    }
}

struct Scheme {
    kind: SuggestionType,
    harmony: u8,
    derivations: &'static [Derivation],
}

const SCHEMES: [Scheme; 4] = [
    Scheme {
        kind: SuggestionType::Complementary,
        harmony: 85,
        derivations: &[
            Derivation::rotate(180.0),
            Derivation {
                hue_offset: 180.0,
                saturation: 0.8,
                lightness: 1.2,
            },
        ],
    },
    Scheme {
        kind: SuggestionType::Analogous,
        harmony: 90,
        derivations: &[Derivation::rotate(30.0), Derivation::rotate(-30.0)],
    },
    Scheme {
        kind: SuggestionType::Triadic,
        harmony: 80,
        derivations: &[Derivation::rotate(120.0), Derivation::rotate(240.0)],
    },
    Scheme {
        kind: SuggestionType::SplitComplementary,
        harmony: 75,
        derivations: &[Derivation::rotate(150.0), Derivation::rotate(210.0)],
    },
];

/// Derive every suggestion scheme from an already-parsed base color.
pub fn suggestions_for(base: Rgb) -> Vec<ColorSuggestion> {
    let hsl = base.to_hsl();
    SCHEMES
        .iter()
        .map(|scheme| ColorSuggestion {
            kind: scheme.kind,
            colors: scheme.derivations.iter().map(|d| d.apply(hsl)).collect(),
            harmony: scheme.harmony,
        })
        .collect()
}

/// Complementary, analogous and triadic companions for `hex`, in that order,
/// followed by a split-complementary pair. The split-complementary scheme is
/// an extension on top of the three classic ones, so callers that only want
/// those can take the first three entries.
pub fn generate_suggestions(hex: &str) -> Result<Vec<ColorSuggestion>> {
    let base = Rgb::from_hex(hex)?;
    let suggestions = suggestions_for(base);
    debug!(base = %base, schemes = suggestions.len(), "generated suggestions");
    Ok(suggestions)
}
