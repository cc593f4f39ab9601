// Metadata-driven rule table (paired with the metadata analyzer)

use super::{ReadinessReport, ScoreSheet};
use crate::metadata::image::ImageMetrics;
use crate::model::{Issue, IssueKind, Severity};

/// Common print aspect ratios (long side / short side).
pub const STANDARD_RATIOS: [(f64, &str); 5] = [
    (1.5, "6×4"),
    (1.4, "7×5"),
    (1.25, "10×8"),
    (1.33, "Letter"),
    (1.0, "Square"),
];
pub const RATIO_TOLERANCE: f64 = 0.1;

/// Flat deduction per PDF issue carried into the report.
const PDF_ISSUE_PENALTY: i32 = 5;

/// Name of the first standard print ratio within tolerance of `aspect_ratio`
/// or its reciprocal.
pub fn matching_standard_ratio(aspect_ratio: f64) -> Option<&'static str> {
    STANDARD_RATIOS
        .iter()
        .find(|(ratio, _)| {
            (aspect_ratio - ratio).abs() < RATIO_TOLERANCE
                || (1.0 / aspect_ratio - ratio).abs() < RATIO_TOLERANCE
        })
        .map(|&(_, name)| name)
}

/// Score metadata-analyzer output.
///
/// Image metrics (when present) drive the megapixel and aspect-ratio rules;
/// PDF issues are appended verbatim at 5 points each.
pub fn score_file_metrics(image: Option<&ImageMetrics>, pdf_issues: &[Issue]) -> ReadinessReport {
    let mut sheet = ScoreSheet::new();

    if let Some(metrics) = image {
        let megapixels = metrics.resolution.megapixels;
        if megapixels < 1.0 {
            sheet.deduct(
                30,
                Issue::new(
                    IssueKind::Resolution,
                    Severity::High,
                    "Low resolution - may appear pixelated when printed larger than 4×6″",
                    "Use a higher resolution image for better print quality",
                ),
            );
        } else if megapixels < 3.0 {
            sheet.deduct(
                15,
                Issue::new(
                    IssueKind::Resolution,
                    Severity::Medium,
                    "Medium resolution - suitable for small to medium prints",
                    "Consider using a higher resolution for large prints",
                ),
            );
        }

        if matching_standard_ratio(metrics.dimensions.aspect_ratio).is_none() {
            sheet.deduct(
                10,
                Issue::new(
                    IssueKind::AspectRatio,
                    Severity::Low,
                    "Non-standard aspect ratio - may require cropping for standard print sizes",
                    "Consider cropping to a standard aspect ratio before printing",
                ),
            );
        }
    }

    for issue in pdf_issues {
        sheet.deduct(PDF_ISSUE_PENALTY, issue.clone());
    }

    sheet.finish(None)
}
