// Image branch: dimension-based DPI / print size / compression estimates

use serde::Serialize;

use crate::error::PrintReadinessError;
use crate::humanize::{format_file_size, round_to};
use crate::model::{FileDescriptor, ImageDimensions};
use crate::pixel::resolution::{PrintSize, QUALITY_DPI};
use crate::scoring::ReadinessReport;

/// Lowest DPI still acceptable for a print ("max" print size).
pub const MIN_ACCEPTABLE_DPI: u32 = 150;

/// Pixel-count bands (strictly greater than) for the DPI estimate.
const DPI_BANDS: [(u64, u32); 4] = [
    (20_000_000, 300),
    (8_000_000, 240),
    (3_000_000, 150),
    (1_000_000, 96),
];
const FALLBACK_DPI: u32 = 72;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionInfo {
    pub width: u32,
    pub height: u32,
    /// width / height, two decimals.
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResolution {
    pub total_pixels: u64,
    /// Two decimals.
    pub megapixels: f64,
    pub estimated_dpi: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintCapabilities {
    pub max_size: PrintSize,
    pub recommended_size: PrintSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompressionEfficiency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionEstimate {
    /// Raw RGB size over file size, one decimal.
    pub ratio: f64,
    pub efficiency: CompressionEfficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFileStats {
    pub file_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<CompressionEstimate>,
}

/// Everything the image branch derives from known dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetrics {
    pub dimensions: DimensionInfo,
    pub resolution: ImageResolution,
    pub print_capabilities: PrintCapabilities,
    pub file_analysis: ImageFileStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFileAnalysis {
    #[serde(flatten)]
    pub file: FileDescriptor,
    /// Absent when the caller supplied no dimensions.
    #[serde(flatten)]
    pub metrics: Option<ImageMetrics>,
    pub print_readiness: ReadinessReport,
}

pub fn estimate_dpi(pixel_count: u64) -> u32 {
    DPI_BANDS
        .iter()
        .find(|(min_pixels, _)| pixel_count > *min_pixels)
        .map_or(FALLBACK_DPI, |&(_, dpi)| dpi)
}

/// `None` for an empty file, where no ratio can be formed.
pub fn estimate_compression(size_bytes: u64, dims: ImageDimensions) -> Option<CompressionEstimate> {
    if size_bytes == 0 {
        return None;
    }
    let raw_size = dims.pixel_count() as f64 * 3.0;
    let ratio = raw_size / size_bytes as f64;
    let efficiency = if ratio > 10.0 {
        CompressionEfficiency::High
    } else if ratio > 5.0 {
        CompressionEfficiency::Medium
    } else {
        CompressionEfficiency::Low
    };
    Some(CompressionEstimate {
        ratio: round_to(ratio, 1),
        efficiency,
    })
}

/// Derive image metrics from coarse dimensions.
///
/// Fails with `AnalysisError` when a side is zero.
pub fn image_metrics(
    file: &FileDescriptor,
    dims: ImageDimensions,
) -> crate::error::Result<ImageMetrics> {
    if dims.width == 0 || dims.height == 0 {
        return Err(PrintReadinessError::analysis(format!(
            "image dimensions must be positive, got {}x{}",
            dims.width, dims.height
        )));
    }

    let total_pixels = dims.pixel_count();
    Ok(ImageMetrics {
        dimensions: DimensionInfo {
            width: dims.width,
            height: dims.height,
            aspect_ratio: round_to(f64::from(dims.width) / f64::from(dims.height), 2),
        },
        resolution: ImageResolution {
            total_pixels,
            megapixels: round_to(total_pixels as f64 / 1_000_000.0, 2),
            estimated_dpi: estimate_dpi(total_pixels),
        },
        print_capabilities: PrintCapabilities {
            max_size: PrintSize::at_dpi(dims.width, dims.height, MIN_ACCEPTABLE_DPI),
            recommended_size: PrintSize::at_dpi(dims.width, dims.height, QUALITY_DPI),
        },
        file_analysis: ImageFileStats {
            file_size: format_file_size(file.size_bytes),
            compression_ratio: estimate_compression(file.size_bytes, dims),
        },
    })
}
