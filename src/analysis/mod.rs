pub mod contrast;
pub mod emotion;
pub mod harmony;
pub mod industry;
pub mod suggest;

pub use contrast::{check_accessibility, contrast_ratio, relative_luminance, AccessibilityScore};
pub use emotion::{analyze_emotions, EmotionalAnalysis};
pub use harmony::{classify_harmony, ColorHarmony, HarmonyType};
pub use industry::{map_industries, IndustryRelevance};
pub use suggest::{generate_suggestions, ColorSuggestion, SuggestionType};
