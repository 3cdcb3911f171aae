use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::emotion::{analyze_emotions, Emotion, EmotionalAnalysis};
use crate::error::Result;

/// Most industries reported for one palette.
pub const MAX_INDUSTRIES: usize = 5;

/// Confidence reported when no recognized tag is present.
const FALLBACK_CONFIDENCE: u8 = 50;
const CONFIDENCE_PER_TAG: u8 = 20;
const MAX_CONFIDENCE: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Finance,
    Healthcare,
    Technology,
    Agriculture,
    Wellness,
    EcoTourism,
    Sports,
    Entertainment,
    FoodAndBeverage,
    Fashion,
    Jewelry,
    Cosmetics,
    Design,
    Art,
    Education,
    GeneralBusiness,
    Retail,
    Services,
}

impl Industry {
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Technology => "technology",
            Industry::Agriculture => "agriculture",
            Industry::Wellness => "wellness",
            Industry::EcoTourism => "eco-tourism",
            Industry::Sports => "sports",
            Industry::Entertainment => "entertainment",
            Industry::FoodAndBeverage => "food & beverage",
            Industry::Fashion => "fashion",
            Industry::Jewelry => "jewelry",
            Industry::Cosmetics => "cosmetics",
            Industry::Design => "design",
            Industry::Art => "art",
            Industry::Education => "education",
            Industry::GeneralBusiness => "general business",
            Industry::Retail => "retail",
            Industry::Services => "services",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate industries for a palette and how sure the mapping is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRelevance {
    pub industries: Vec<Industry>,
    /// 0-95.
    pub confidence: u8,
}

/// Recognized tags, in the order their industries are appended.
const INDUSTRY_TABLE: [(Emotion, &[Industry]); 5] = [
    (
        Emotion::Trustworthy,
        &[Industry::Finance, Industry::Healthcare, Industry::Technology],
    ),
    (
        Emotion::Natural,
        &[Industry::Agriculture, Industry::Wellness, Industry::EcoTourism],
    ),
    (
        Emotion::Energetic,
        &[Industry::Sports, Industry::Entertainment, Industry::FoodAndBeverage],
    ),
    (
        Emotion::Luxurious,
        &[Industry::Fashion, Industry::Jewelry, Industry::Cosmetics],
    ),
    (
        Emotion::Creative,
        &[Industry::Design, Industry::Art, Industry::Education],
    ),
];

const FALLBACK_INDUSTRIES: [Industry; 3] = [
    Industry::GeneralBusiness,
    Industry::Retail,
    Industry::Services,
];

/// Map an emotional reading onto industries.
pub fn industries_for(analysis: &EmotionalAnalysis) -> IndustryRelevance {
    let mut industries: Vec<Industry> = Vec::new();
    let mut confidence: u8 = 0;
    let mut matched = 0usize;

    for (emotion, mapped) in INDUSTRY_TABLE.iter() {
        if !analysis.emotions.contains(emotion) {
            continue;
        }
        matched += 1;
        confidence = confidence
            .saturating_add(CONFIDENCE_PER_TAG)
            .min(MAX_CONFIDENCE);
        for industry in mapped.iter() {
            if !industries.contains(industry) {
                industries.push(*industry);
            }
        }
    }

    if matched == 0 {
        return IndustryRelevance {
            industries: FALLBACK_INDUSTRIES.to_vec(),
            confidence: FALLBACK_CONFIDENCE,
        };
    }

    industries.truncate(MAX_INDUSTRIES);
    IndustryRelevance {
        industries,
        confidence,
    }
}

/// Run the emotion inference on `hexes`, then map it onto industries.
pub fn map_industries<S: AsRef<str>>(hexes: &[S]) -> Result<IndustryRelevance> {
    let analysis = analyze_emotions(hexes)?;
    let relevance = industries_for(&analysis);
    debug!(
        industries = relevance.industries.len(),
        confidence = relevance.confidence,
        "mapped industries"
    );
    Ok(relevance)
}
