//! Color and palette records handed to rendering and storage layers.
//!
//! Records carry a generated opaque `id` for the caller's bookkeeping.
//! Equality compares content only, so two analyses of the same input
//! compare equal even though their ids differ.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::{Hsl, Rgb};
use crate::error::Result;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A parsed color with every encoding precomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: String,
    /// Canonical uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Color {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            id: new_id(),
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            name: None,
        }
    }

    /// Parse `hex` and derive its RGB and HSL forms.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?))
    }

    pub fn named(hex: &str, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Some(name.into()),
            ..Self::from_hex(hex)?
        })
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
            && self.rgb == other.rgb
            && self.hsl == other.hsl
            && self.name == other.name
    }
}

/// A user-authored, ordered set of colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: Vec<Color>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Palette {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            colors: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Build a palette from hex strings, failing on the first invalid one.
    pub fn from_hexes<S: AsRef<str>>(name: impl Into<String>, hexes: &[S]) -> Result<Self> {
        let mut palette = Self::new(name);
        for hex in hexes {
            palette.push(Color::from_hex(hex.as_ref())?);
        }
        Ok(palette)
    }

    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.hex.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.colors == other.colors && self.tags == other.tags
    }
}
