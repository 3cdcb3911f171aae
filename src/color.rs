use std::fmt;
use std::str::FromStr;

use palette::RgbHue;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// Core color type used throughout the analysis engine.
/// Wraps sRGB u8 components, so every value is in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Cylindrical encoding: hue in degrees `[0, 360)`, saturation and
/// lightness as percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, rejecting anything outside 0-255.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        fn channel(name: &'static str, value: i64) -> Result<u8> {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
            })
        }
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Build from unit-range reals, rounding to the nearest integer and
    /// clamping anything that falls outside `[0, 1]`.
    pub fn from_unit_clamped(r: f64, g: f64, b: f64) -> Self {
        fn channel(c: f64) -> u8 {
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    ///
    /// Exactly six hex digits are required; shorthand (`#fff`), whitespace
    /// and any non-hex character are rejected.
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 {
            return Err(ColorError::invalid_hex(
                input,
                format!("expected 6 hex digits, got {}", hex.chars().count()),
            ));
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(
                input,
                format!("unexpected character {bad:?}"),
            ));
        }
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|e| ColorError::invalid_hex(input, e.to_string()))?;
        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    /// Serialize to uppercase hex `#RRGGBB`.
    pub fn to_hex(self) -> String {
        let packed = (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b);
        format!("#{packed:06X}")
    }

    /// Convert to HSL with the max/min channel algorithm.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sextant = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let mut h = sextant * 60.0;
        if h >= 360.0 {
            h -= 360.0;
        }
        Hsl::new(h, s * 100.0, l * 100.0)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to RGB through the 60-degree sector construction.
    ///
    /// The hue is wrapped into `[0, 360)`. Saturation and lightness are used
    /// as given; channels that land outside 0-255 are clamped.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::from_unit_clamped(r + m, g + m, b + m)
    }

    /// Same saturation and lightness, hue turned by `degrees`.
    pub fn rotated(self, degrees: f64) -> Self {
        Self {
            h: rotate_hue(self.h, degrees),
            ..self
        }
    }
}

/// Turn a hue by `degrees` and wrap the result into `[0, 360)`.
pub fn rotate_hue(hue: f64, degrees: f64) -> f64 {
    let h = RgbHue::from_degrees(hue + degrees).into_positive_degrees();
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Parse `#RRGGBB` into RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Format RGB as uppercase `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Parse a hex string straight into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Rgb::from_hex(hex)?.to_hsl())
}

/// Parse every hex string in `hexes`, failing on the first bad one.
pub(crate) fn parse_all<S: AsRef<str>>(hexes: &[S]) -> Result<Vec<Rgb>> {
    hexes.iter().map(|h| Rgb::from_hex(h.as_ref())).collect()
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}
