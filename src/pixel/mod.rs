//! Quality signals derived from a decoded RGBA pixel buffer.

pub mod color;
pub mod edges;
pub mod resolution;

use serde::Serialize;

use crate::model::PixelBuffer;
use crate::scoring::ReadinessReport;
use crate::scoring::pixel_rules::score_pixel_metrics;
use color::{ColorDistribution, color_distribution};
use edges::{EdgeAnalysis, detect_edges};
use resolution::{ResolutionQuality, analyze_resolution};

/// Full result of the pixel analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelAnalysis {
    pub color_distribution: ColorDistribution,
    pub edges: EdgeAnalysis,
    pub resolution_quality: ResolutionQuality,
    pub print_readiness: ReadinessReport,
}

/// Analyze a pixel buffer: color distribution, edges, resolution, then score.
///
/// Fails with `InvalidBuffer` when the sample length does not match
/// `width * height * 4` or a side is zero.
pub fn analyze_pixels(buffer: &PixelBuffer) -> crate::error::Result<PixelAnalysis> {
    buffer.validate()?;

    let color_distribution = color_distribution(&buffer.samples);
    let edges = detect_edges(&buffer.samples, buffer.width, buffer.height);
    let resolution_quality = analyze_resolution(buffer.width, buffer.height);
    let print_readiness = score_pixel_metrics(&color_distribution, &edges, &resolution_quality);

    Ok(PixelAnalysis {
        color_distribution,
        edges,
        resolution_quality,
        print_readiness,
    })
}
