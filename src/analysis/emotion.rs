//! Rule-based mood inference over hue, saturation and lightness.
//!
//! Every input color contributes one hue tag plus optional saturation and
//! lightness tags, and nudges two running scores: warmth and energy. The
//! averaged scores pick the mood, energy level and temperature of the
//! whole palette.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{parse_all, Hsl};
use crate::error::{ColorError, Result};

/// Most tags reported for one palette.
pub const MAX_EMOTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emotion {
    Passionate,
    Energetic,
    Natural,
    Fresh,
    Trustworthy,
    Creative,
    Luxurious,
    Minimal,
    Soft,
    Intense,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Passionate => "passionate",
            Emotion::Energetic => "energetic",
            Emotion::Natural => "natural",
            Emotion::Fresh => "fresh",
            Emotion::Trustworthy => "trustworthy",
            Emotion::Creative => "creative",
            Emotion::Luxurious => "luxurious",
            Emotion::Minimal => "minimal",
            Emotion::Soft => "soft",
            Emotion::Intense => "intense",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Energetic,
    Calm,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Energy {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Temperature {
    Cool,
    Neutral,
    Warm,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Energy {
    pub fn as_str(self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Temperature {
    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
            Temperature::Warm => "warm",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative reading of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    /// Distinct tags in first-seen order, at most [`MAX_EMOTIONS`].
    pub emotions: Vec<Emotion>,
    pub mood: Mood,
    pub energy: Energy,
    pub temperature: Temperature,
}

/// Hue range `[start, end)` with the tag and score nudges it carries.
struct HueSector {
    start: f64,
    end: f64,
    emotion: Emotion,
    warmth: i32,
    energy: i32,
}

const HUE_SECTORS: [HueSector; 7] = [
    HueSector { start: 0.0, end: 30.0, emotion: Emotion::Passionate, warmth: 2, energy: 2 },
    HueSector { start: 30.0, end: 60.0, emotion: Emotion::Energetic, warmth: 1, energy: 2 },
    HueSector { start: 60.0, end: 120.0, emotion: Emotion::Natural, warmth: 0, energy: 1 },
    HueSector { start: 120.0, end: 180.0, emotion: Emotion::Fresh, warmth: -1, energy: 0 },
    HueSector { start: 180.0, end: 240.0, emotion: Emotion::Trustworthy, warmth: -2, energy: -1 },
    HueSector { start: 240.0, end: 300.0, emotion: Emotion::Creative, warmth: -1, energy: 1 },
    HueSector { start: 300.0, end: 360.0, emotion: Emotion::Luxurious, warmth: 0, energy: 1 },
];

/// Saturation below this reads as minimal.
const MINIMAL_SATURATION: f64 = 20.0;
/// Lightness above this reads as soft.
const SOFT_LIGHTNESS: f64 = 80.0;
/// Lightness below this reads as intense and adds energy.
const INTENSE_LIGHTNESS: f64 = 30.0;
const INTENSE_ENERGY: i32 = 1;

const HIGH_ENERGY_ABOVE: f64 = 1.0;
const LOW_ENERGY_BELOW: f64 = -0.5;
const WARM_ABOVE: f64 = 0.5;
const COOL_BELOW: f64 = -0.5;

/// Tags and score nudges contributed by a single color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorReading {
    pub emotions: Vec<Emotion>,
    pub warmth: i32,
    pub energy: i32,
}

fn hue_sector(hue: f64) -> Option<&'static HueSector> {
    let hue = hue.rem_euclid(360.0);
    HUE_SECTORS
        .iter()
        .find(|sector| hue >= sector.start && hue < sector.end)
}

/// Read one color against the hue, saturation and lightness rules.
pub fn read_color(hsl: Hsl) -> ColorReading {
    let mut reading = ColorReading::default();

    if let Some(sector) = hue_sector(hsl.h) {
        reading.emotions.push(sector.emotion);
        reading.warmth += sector.warmth;
        reading.energy += sector.energy;
    }
    if hsl.s < MINIMAL_SATURATION {
        reading.emotions.push(Emotion::Minimal);
    }
    if hsl.l > SOFT_LIGHTNESS {
        reading.emotions.push(Emotion::Soft);
    } else if hsl.l < INTENSE_LIGHTNESS {
        reading.emotions.push(Emotion::Intense);
        reading.energy += INTENSE_ENERGY;
    }

    reading
}

pub fn mood_for(avg_energy: f64) -> Mood {
    if avg_energy > HIGH_ENERGY_ABOVE {
        Mood::Energetic
    } else if avg_energy < LOW_ENERGY_BELOW {
        Mood::Calm
    } else {
        Mood::Balanced
    }
}

pub fn energy_for(avg_energy: f64) -> Energy {
    if avg_energy > HIGH_ENERGY_ABOVE {
        Energy::High
    } else if avg_energy < LOW_ENERGY_BELOW {
        Energy::Low
    } else {
        Energy::Medium
    }
}

pub fn temperature_for(avg_warmth: f64) -> Temperature {
    if avg_warmth > WARM_ABOVE {
        Temperature::Warm
    } else if avg_warmth < COOL_BELOW {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// Aggregate per-color readings into a palette-level analysis.
pub fn summarize(readings: &[ColorReading]) -> Result<EmotionalAnalysis> {
    if readings.is_empty() {
        return Err(ColorError::EmptyPalette);
    }

    let count = readings.len() as f64;
    let avg_warmth = readings.iter().map(|r| f64::from(r.warmth)).sum::<f64>() / count;
    let avg_energy = readings.iter().map(|r| f64::from(r.energy)).sum::<f64>() / count;

    let mut emotions: Vec<Emotion> = Vec::with_capacity(MAX_EMOTIONS);
    for emotion in readings.iter().flat_map(|r| r.emotions.iter().copied()) {
        if !emotions.contains(&emotion) {
            emotions.push(emotion);
        }
    }
    emotions.truncate(MAX_EMOTIONS);

    debug!(avg_warmth, avg_energy, tags = emotions.len(), "summarized emotions");

    Ok(EmotionalAnalysis {
        emotions,
        mood: mood_for(avg_energy),
        energy: energy_for(avg_energy),
        temperature: temperature_for(avg_warmth),
    })
}

/// Infer mood, energy and temperature for `hexes`.
pub fn analyze_emotions<S: AsRef<str>>(hexes: &[S]) -> Result<EmotionalAnalysis> {
    let readings: Vec<ColorReading> = parse_all(hexes)?
        .into_iter()
        .map(|rgb| {
            let reading = read_color(rgb.to_hsl());
            trace!(color = %rgb, ?reading, "read color");
            reading
        })
        .collect();
    summarize(&readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_is_passionate_and_warm() {
        let analysis = analyze_emotions(&["#FF0000"]).unwrap();
        assert_eq!(analysis.emotions, vec![Emotion::Passionate]);
        assert_eq!(analysis.temperature, Temperature::Warm);
        assert_eq!(analysis.mood, Mood::Energetic);
        assert_eq!(analysis.energy, Energy::High);
    }

    #[test]
    fn blue_is_trustworthy_and_cool() {
        // #0080FF sits at hue 210
        let analysis = analyze_emotions(&["#0080FF"]).unwrap();
        assert_eq!(analysis.emotions, vec![Emotion::Trustworthy]);
        assert_eq!(analysis.temperature, Temperature::Cool);
        assert_eq!(analysis.mood, Mood::Calm);
        assert_eq!(analysis.energy, Energy::Low);
    }

    #[test]
    fn sector_edges_are_half_open() {
        let tag = |h: f64| read_color(Hsl::new(h, 50.0, 50.0)).emotions[0];
        assert_eq!(tag(0.0), Emotion::Passionate);
        assert_eq!(tag(29.99), Emotion::Passionate);
        assert_eq!(tag(30.0), Emotion::Energetic);
        assert_eq!(tag(60.0), Emotion::Natural);
        assert_eq!(tag(120.0), Emotion::Fresh);
        assert_eq!(tag(180.0), Emotion::Trustworthy);
        assert_eq!(tag(240.0), Emotion::Creative);
        assert_eq!(tag(300.0), Emotion::Luxurious);
        assert_eq!(tag(359.99), Emotion::Luxurious);
    }

    #[test]
    fn saturation_and_lightness_tags() {
        let gray = read_color(Hsl::new(0.0, 0.0, 50.0));
        assert_eq!(gray.emotions, vec![Emotion::Passionate, Emotion::Minimal]);

        let pale = read_color(Hsl::new(200.0, 60.0, 90.0));
        assert_eq!(pale.emotions, vec![Emotion::Trustworthy, Emotion::Soft]);

        let dark = read_color(Hsl::new(200.0, 60.0, 10.0));
        assert_eq!(dark.emotions, vec![Emotion::Trustworthy, Emotion::Intense]);
        assert_eq!(dark.energy, 0);
    }

    #[test]
    fn lightness_boundaries_are_exclusive() {
        assert_eq!(read_color(Hsl::new(90.0, 50.0, 80.0)).emotions.len(), 1);
        assert_eq!(read_color(Hsl::new(90.0, 50.0, 30.0)).emotions.len(), 1);
        assert_eq!(read_color(Hsl::new(90.0, 20.0, 50.0)).emotions.len(), 1);
    }

    #[test]
    fn tags_dedupe_in_first_seen_order_and_truncate() {
        let analysis = analyze_emotions(&[
            "#FF0000", // passionate
            "#FF0000",
            "#0000FF", // creative
            "#00FF00", // fresh
            "#808080", // passionate, minimal
            "#FFFF00", // natural
            "#FF00FF", // luxurious
        ])
        .unwrap();
        assert_eq!(
            analysis.emotions,
            vec![
                Emotion::Passionate,
                Emotion::Creative,
                Emotion::Fresh,
                Emotion::Minimal,
                Emotion::Natural,
            ]
        );
    }

    #[test]
    fn mixed_palette_averages_out() {
        // red (+2 warmth) and blue (-2 warmth) cancel
        let analysis = analyze_emotions(&["#FF0000", "#0080FF"]).unwrap();
        assert_eq!(analysis.temperature, Temperature::Neutral);
        assert_eq!(analysis.mood, Mood::Balanced);
        assert_eq!(analysis.energy, Energy::Medium);
    }

    #[test]
    fn cutoffs_are_exclusive() {
        assert_eq!(mood_for(1.0), Mood::Balanced);
        assert_eq!(mood_for(1.01), Mood::Energetic);
        assert_eq!(mood_for(-0.5), Mood::Balanced);
        assert_eq!(mood_for(-0.51), Mood::Calm);
        assert_eq!(energy_for(1.0), Energy::Medium);
        assert_eq!(energy_for(-0.6), Energy::Low);
        assert_eq!(temperature_for(0.5), Temperature::Neutral);
        assert_eq!(temperature_for(0.6), Temperature::Warm);
        assert_eq!(temperature_for(-0.5), Temperature::Neutral);
        assert_eq!(temperature_for(-0.6), Temperature::Cool);
    }

    #[test]
    fn empty_input_is_an_error() {
        let empty: [&str; 0] = [];
        assert_eq!(analyze_emotions(&empty), Err(ColorError::EmptyPalette));
    }

    #[test]
    fn labels_serialize_kebab_case() {
        let json = serde_json::to_string(&Emotion::Trustworthy).unwrap();
        assert_eq!(json, "\"trustworthy\"");
        assert_eq!(Mood::Calm.to_string(), "calm");
        assert_eq!(Temperature::Warm.to_string(), "warm");
        assert_eq!(Energy::High.to_string(), Energy::High.as_str());
        assert_eq!(Emotion::Soft.to_string(), "soft");
    }
}
