use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgb;
use crate::error::Result;

/// Minimum ratio for WCAG AAA body text.
pub const AAA_CONTRAST: f64 = 7.0;
/// Minimum ratio for WCAG AA body text.
pub const AA_CONTRAST: f64 = 4.5;
/// Minimum ratio for large or bold text to stay readable.
pub const READABLE_CONTRAST: f64 = 3.0;

/// Accessibility verdict for a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityScore {
    pub aa: bool,
    pub aaa: bool,
    /// Contrast ratio rounded to one decimal.
    pub contrast: f64,
    pub readable: bool,
}

impl AccessibilityScore {
    /// Grade an unrounded contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa: ratio >= AA_CONTRAST,
            aaa: ratio >= AAA_CONTRAST,
            contrast: (ratio * 10.0).round() / 10.0,
            readable: ratio >= READABLE_CONTRAST,
        }
    }
}

/// WCAG relative luminance.
///
/// Linearizes each sRGB channel, then computes the weighted sum.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors.
///
/// Returns a value in [1, 21] and does not depend on argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// [`contrast_ratio`] over hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Grade `foreground` text on `background` against the WCAG thresholds.
pub fn check_accessibility(foreground: &str, background: &str) -> Result<AccessibilityScore> {
    let ratio = contrast_ratio_hex(foreground, background)?;
    let score = AccessibilityScore::from_ratio(ratio);
    debug!(
        foreground,
        background,
        ratio,
        aa = score.aa,
        aaa = score.aaa,
        "checked accessibility"
    );
    Ok(score)
}

/// Black or white, whichever reads better on `background`.
pub fn best_text_color(background: Rgb) -> Rgb {
    let on_black = contrast_ratio(background, Rgb::BLACK);
    let on_white = contrast_ratio(background, Rgb::WHITE);
    if on_white > on_black {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_ratio_black_white_is_exactly_21() {
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
    }

    #[test]
    fn contrast_ratio_same_color_is_one() {
        for c in [Rgb::BLACK, Rgb::WHITE, Rgb::new(128, 128, 128), Rgb::new(12, 200, 99)] {
            assert_eq!(contrast_ratio(c, c), 1.0);
        }
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = Rgb::new(200, 50, 50);
        let b = Rgb::new(50, 200, 50);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn gray_on_white() {
        // #767676 is the classic lightest gray passing AA on white
        let ratio = contrast_ratio_hex("#767676", "#ffffff").unwrap();
        assert!((ratio - 4.54).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn relative_luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn black_on_white_passes_everything() {
        let score = check_accessibility("#000000", "#FFFFFF").unwrap();
        assert_eq!(
            score,
            AccessibilityScore {
                aa: true,
                aaa: true,
                contrast: 21.0,
                readable: true,
            }
        );
    }

    #[test]
    fn thresholds_are_inclusive() {
        let at_aa = AccessibilityScore::from_ratio(4.5);
        assert!(at_aa.aa && !at_aa.aaa && at_aa.readable);

        let at_aaa = AccessibilityScore::from_ratio(7.0);
        assert!(at_aaa.aa && at_aaa.aaa);

        let at_readable = AccessibilityScore::from_ratio(3.0);
        assert!(at_readable.readable && !at_readable.aa);

        let below = AccessibilityScore::from_ratio(2.99);
        assert!(!below.readable && !below.aa && !below.aaa);
    }

    #[test]
    fn verdicts_use_unrounded_ratio() {
        // 4.46 rounds to 4.5 for display but still fails AA
        let score = AccessibilityScore::from_ratio(4.46);
        assert_eq!(score.contrast, 4.5);
        assert!(!score.aa);
    }

    #[test]
    fn invalid_hex_is_an_error() {
        assert!(check_accessibility("#000", "#FFFFFF").is_err());
        assert!(contrast_ratio_hex("#000000", "white").is_err());
    }

    #[test]
    fn best_text_color_picks_the_readable_side() {
        assert_eq!(best_text_color(Rgb::new(20, 20, 60)), Rgb::WHITE);
        assert_eq!(best_text_color(Rgb::new(250, 240, 200)), Rgb::BLACK);
    }
}
