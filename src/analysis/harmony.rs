use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{parse_all, Rgb};
use crate::error::{ColorError, Result};

/// Qualitative label for the hue relationship inside a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    /// Part of the vocabulary; the classifier never emits it.
    Tetradic,
    Custom,
}

impl HarmonyType {
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Monochromatic => "monochromatic",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Complementary => "complementary",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::Custom => "custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HarmonyType::Monochromatic => "Shades of a single hue",
            HarmonyType::Analogous => "Neighbouring hues on the color wheel",
            HarmonyType::Complementary => "Opposite hues on the color wheel",
            HarmonyType::Triadic => "Three hues evenly spaced around the wheel",
            HarmonyType::Tetradic => "Two complementary pairs",
            HarmonyType::Custom => "A free-form combination of hues",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and label for a set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHarmony {
    pub score: u8,
    #[serde(rename = "type")]
    pub kind: HarmonyType,
    pub description: String,
}

impl ColorHarmony {
    fn new(kind: HarmonyType, score: u8) -> Self {
        Self {
            score,
            kind,
            description: kind.description().to_string(),
        }
    }
}

/// A rule matches when `above < avg < below`.
struct HarmonyRule {
    above: f64,
    below: f64,
    kind: HarmonyType,
    score: u8,
}

/// Checked in order; averages matching nothing are [`HarmonyType::Custom`].
const HARMONY_RULES: [HarmonyRule; 3] = [
    HarmonyRule {
        above: f64::NEG_INFINITY,
        below: 30.0,
        kind: HarmonyType::Analogous,
        score: 95,
    },
    HarmonyRule {
        above: 150.0,
        below: 210.0,
        kind: HarmonyType::Complementary,
        score: 90,
    },
    HarmonyRule {
        above: 110.0,
        below: 130.0,
        kind: HarmonyType::Triadic,
        score: 85,
    },
];

const MONOCHROMATIC_SCORE: u8 = 100;
const CUSTOM_SCORE: u8 = 75;

/// Shorter angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Mean circular hue distance over every unordered pair.
///
/// Returns `None` for fewer than two colors.
pub fn average_hue_distance(colors: &[Rgb]) -> Option<f64> {
    let hues: Vec<f64> = colors.iter().map(|c| c.to_hsl().h).collect();
    let mut total = 0.0;
    let mut pairs = 0u32;
    for (i, a) in hues.iter().enumerate() {
        for b in &hues[i + 1..] {
            total += hue_distance(*a, *b);
            pairs += 1;
        }
    }
    (pairs > 0).then(|| total / f64::from(pairs))
}

/// Label an average pairwise hue distance.
pub fn classify_average(avg: f64) -> ColorHarmony {
    HARMONY_RULES
        .iter()
        .find(|rule| avg > rule.above && avg < rule.below)
        .map(|rule| ColorHarmony::new(rule.kind, rule.score))
        .unwrap_or_else(|| ColorHarmony::new(HarmonyType::Custom, CUSTOM_SCORE))
}

/// Score the hue relationship of `hexes`.
pub fn classify_harmony<S: AsRef<str>>(hexes: &[S]) -> Result<ColorHarmony> {
    let colors = parse_all(hexes)?;
    let harmony = match colors.len() {
        0 => return Err(ColorError::EmptyPalette),
        1 => ColorHarmony::new(HarmonyType::Monochromatic, MONOCHROMATIC_SCORE),
        _ => {
            let avg = average_hue_distance(&colors).unwrap_or_default();
            debug!(colors = colors.len(), avg, "average hue distance");
            classify_average(avg)
        }
    };
    debug!(kind = %harmony.kind, score = harmony.score, "classified harmony");
    Ok(harmony)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_color_is_monochromatic() {
        let harmony = classify_harmony(&["#336699"]).unwrap();
        assert_eq!(harmony.kind, HarmonyType::Monochromatic);
        assert_eq!(harmony.score, 100);
    }

    #[test]
    fn empty_palette_is_an_error() {
        let empty: [&str; 0] = [];
        assert_eq!(classify_harmony(&empty), Err(ColorError::EmptyPalette));
    }

    #[test]
    fn same_hue_is_analogous() {
        let harmony = classify_harmony(&["#FF0000", "#800000"]).unwrap();
        assert_eq!(harmony.kind, HarmonyType::Analogous);
        assert_eq!(harmony.score, 95);
    }

    #[test]
    fn opposite_hues_are_complementary() {
        let harmony = classify_harmony(&["#FF0000", "#00FFFF"]).unwrap();
        assert_eq!(harmony.kind, HarmonyType::Complementary);
        assert_eq!(harmony.score, 90);
    }

    #[test]
    fn evenly_spaced_triad_is_triadic() {
        let harmony = classify_harmony(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        assert_eq!(harmony.kind, HarmonyType::Triadic);
        assert_eq!(harmony.score, 85);
    }

    #[test]
    fn gap_between_analogous_and_triadic_is_custom() {
        // red and yellow sit 60 degrees apart
        let harmony = classify_harmony(&["#FF0000", "#FFFF00"]).unwrap();
        assert_eq!(harmony.kind, HarmonyType::Custom);
        assert_eq!(harmony.score, 75);
    }

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(classify_average(29.999).kind, HarmonyType::Analogous);
        assert_eq!(classify_average(30.0).kind, HarmonyType::Custom);
        assert_eq!(classify_average(110.0).kind, HarmonyType::Custom);
        assert_eq!(classify_average(110.5).kind, HarmonyType::Triadic);
        assert_eq!(classify_average(130.0).kind, HarmonyType::Custom);
        assert_eq!(classify_average(150.0).kind, HarmonyType::Custom);
        assert_eq!(classify_average(150.5).kind, HarmonyType::Complementary);
        assert_eq!(classify_average(180.0).kind, HarmonyType::Complementary);
    }

    #[test]
    fn hue_distance_takes_the_short_way_round() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn average_needs_two_colors() {
        assert_eq!(average_hue_distance(&[Rgb::WHITE]), None);
        assert_eq!(average_hue_distance(&[]), None);
    }

    #[test]
    fn invalid_member_fails_the_whole_call() {
        assert!(classify_harmony(&["#FF0000", "nope"]).is_err());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(ColorHarmony::new(HarmonyType::Triadic, 85)).unwrap();
        assert_eq!(json["type"], "triadic");
        assert_eq!(json["score"], 85);
    }
}
