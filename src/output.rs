use std::fmt::Write as _;

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};
use serde::Serialize;

use crate::analysis::contrast::AccessibilityScore;
use crate::analysis::emotion::EmotionalAnalysis;
use crate::analysis::harmony::ColorHarmony;
use crate::analysis::industry::IndustryRelevance;
use crate::analysis::suggest::ColorSuggestion;
use crate::cli::OutputFormat;
use crate::color::Rgb;
use crate::record::Color;
use crate::report::PaletteReport;

/// A contrast check together with the pair it was run on.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastCheck<'a> {
    pub foreground: &'a str,
    pub background: &'a str,
    #[serde(flatten)]
    pub score: AccessibilityScore,
}

/// Turns analysis results into text or JSON for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn color(&self, color: &Color) -> Result<String> {
        self.render(color, |out| {
            writeln!(out, "{} {}", self.chip(color.rgb), color.hex)?;
            writeln!(out, "rgb({}, {}, {})", color.rgb.r, color.rgb.g, color.rgb.b)?;
            writeln!(out, "{}", color.hsl)
        })
    }

    pub fn contrast(&self, check: &ContrastCheck<'_>) -> Result<String> {
        self.render(check, |out| {
            writeln!(out, "contrast {:.1}:1", check.score.contrast)?;
            writeln!(out, "AA        {}", verdict(check.score.aa))?;
            writeln!(out, "AAA       {}", verdict(check.score.aaa))?;
            writeln!(out, "readable  {}", verdict(check.score.readable))
        })
    }

    pub fn harmony(&self, harmony: &ColorHarmony) -> Result<String> {
        self.render(harmony, |out| write_harmony(out, harmony))
    }

    pub fn emotion(&self, analysis: &EmotionalAnalysis) -> Result<String> {
        self.render(analysis, |out| write_emotion(out, analysis))
    }

    pub fn industry(&self, relevance: &IndustryRelevance) -> Result<String> {
        self.render(relevance, |out| write_industry(out, relevance))
    }

    pub fn suggestions(&self, suggestions: &[ColorSuggestion]) -> Result<String> {
        self.render(suggestions, |out| self.write_suggestions(out, suggestions))
    }

    pub fn report(&self, report: &PaletteReport) -> Result<String> {
        self.render(report, |out| {
            writeln!(out, "{}", report.name)?;
            for entry in &report.accessibility {
                let rgb = Rgb::from_hex(&entry.hex).ok();
                writeln!(
                    out,
                    "  {} {}  white {:.1}  black {:.1}  text {}",
                    rgb.map(|c| self.chip(c)).unwrap_or_default(),
                    entry.hex,
                    entry.white_text.contrast,
                    entry.black_text.contrast,
                    entry.text_color,
                )?;
            }
            writeln!(out)?;
            write_harmony(out, &report.harmony)?;
            writeln!(out)?;
            write_emotion(out, &report.emotional)?;
            writeln!(out)?;
            write_industry(out, &report.industry)?;
            writeln!(out)?;
            self.write_suggestions(out, &report.suggestions)
        })
    }

    fn render<T, F>(&self, value: &T, text: F) -> Result<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut String) -> std::fmt::Result,
    {
        match self.format {
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Text => {
                let mut out = String::new();
                text(&mut out)?;
                Ok(out)
            }
        }
    }

    fn write_suggestions(
        &self,
        out: &mut String,
        suggestions: &[ColorSuggestion],
    ) -> std::fmt::Result {
        for suggestion in suggestions {
            write!(out, "{:<20} harmony {:>3} ", suggestion.kind.as_str(), suggestion.harmony)?;
            for hex in &suggestion.colors {
                let rgb = Rgb::from_hex(hex).ok();
                write!(out, " {} {}", rgb.map(|c| self.chip(c)).unwrap_or_default(), hex)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Two-cell swatch, or nothing when color output is off.
    fn chip(&self, rgb: Rgb) -> String {
        if !self.color {
            return String::new();
        }
        "  "
            .on(TermColor::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            })
            .to_string()
    }
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_harmony(out: &mut String, harmony: &ColorHarmony) -> std::fmt::Result {
    writeln!(out, "harmony      {} (score {})", harmony.kind, harmony.score)?;
    writeln!(out, "             {}", harmony.description)
}

fn write_emotion(out: &mut String, analysis: &EmotionalAnalysis) -> std::fmt::Result {
    writeln!(out, "emotions     {}", join(&analysis.emotions))?;
    writeln!(out, "mood         {}", analysis.mood)?;
    writeln!(out, "energy       {}", analysis.energy)?;
    writeln!(out, "temperature  {}", analysis.temperature)
}

fn write_industry(out: &mut String, relevance: &IndustryRelevance) -> std::fmt::Result {
    writeln!(out, "industries   {}", join(&relevance.industries))?;
    writeln!(out, "confidence   {}%", relevance.confidence)
}
