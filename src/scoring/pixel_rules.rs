// Pixel-driven rule table (paired with the pixel analyzer)

use super::{ReadinessReport, ScoreSheet};
use crate::model::{Issue, IssueKind, Severity};
use crate::pixel::color::ColorDistribution;
use crate::pixel::edges::EdgeAnalysis;
use crate::pixel::resolution::ResolutionQuality;

const LOW_RESOLUTION_PIXELS: u64 = 2_000_000;
const MEDIUM_RESOLUTION_PIXELS: u64 = 8_000_000;
const MAX_OUT_OF_GAMUT_PCT: f64 = 10.0;
const MIN_SHARPNESS: f64 = 30.0;

/// Score pixel-analyzer metrics.
///
/// | Rule | Deduction |
/// |---|---|
/// | pixel count < 2 MP | 30 |
/// | pixel count < 8 MP | 10 |
/// | out-of-gamut > 10 % | 20 |
/// | sharpness < 30 | 15 |
pub fn score_pixel_metrics(
    colors: &ColorDistribution,
    edges: &EdgeAnalysis,
    resolution: &ResolutionQuality,
) -> ReadinessReport {
    let mut sheet = ScoreSheet::new();

    if resolution.pixel_count < LOW_RESOLUTION_PIXELS {
        sheet.deduct(
            30,
            Issue::new(
                IssueKind::Resolution,
                Severity::High,
                "Low resolution - may appear pixelated when printed larger than 4×6″",
                "Use a higher resolution image for better print quality",
            ),
        );
    } else if resolution.pixel_count < MEDIUM_RESOLUTION_PIXELS {
        sheet.deduct(
            10,
            Issue::new(
                IssueKind::Resolution,
                Severity::Medium,
                "Medium resolution - suitable for small to medium prints",
                "Consider using a higher resolution for large prints",
            ),
        );
    }

    if colors.out_of_gamut_pct > MAX_OUT_OF_GAMUT_PCT {
        sheet.deduct(
            20,
            Issue::new(
                IssueKind::Gamut,
                Severity::Medium,
                "Contains out-of-gamut colors - may not reproduce accurately in print",
                "Convert saturated colors to a CMYK-safe palette before printing",
            ),
        );
    }

    if edges.sharpness_score < MIN_SHARPNESS {
        sheet.deduct(
            15,
            Issue::new(
                IssueKind::Sharpness,
                Severity::Medium,
                "Low edge definition - may appear blurry when printed",
                "Use a sharper source image or apply light sharpening",
            ),
        );
    }

    let recommendation = recommendation_for(sheet.raw_score());
    sheet.finish(Some(recommendation.to_string()))
}

/// Pixel-driven recommendation wording by score band.
pub fn recommendation_for(score: i32) -> &'static str {
    if score >= 90 {
        "Excellent for printing - no adjustments needed"
    } else if score >= 70 {
        "Good for printing - minor adjustments recommended"
    } else if score >= 50 {
        "Acceptable for printing - consider improvements"
    } else {
        "Not recommended for quality printing - significant improvements needed"
    }
}
