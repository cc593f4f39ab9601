// Sobel gradient: RGBA -> luma -> edge density / sharpness

use serde::Serialize;

/// Gradient magnitude above which an interior pixel counts as an edge.
pub const EDGE_THRESHOLD: f64 = 50.0;

/// Linear scale from edge ratio to the 0-100 sharpness score.
const SHARPNESS_SCALE: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeAnalysis {
    pub edge_percentage: f64,
    pub sharpness_score: f64,
}

/// Convert RGBA samples to 8-bit luma (0.299R + 0.587G + 0.114B, truncated).
pub fn to_grayscale(samples: &[u8]) -> Vec<u8> {
    samples
        .chunks_exact(4)
        .map(|px| {
            let luma =
                f64::from(px[0]) * 0.299 + f64::from(px[1]) * 0.587 + f64::from(px[2]) * 0.114;
            luma as u8
        })
        .collect()
}

/// Sobel `(gx, gy)` at interior position `idx` of a `width`-wide luma plane.
fn sobel_at(gray: &[u8], idx: usize, width: usize) -> (i32, i32) {
    let p = |i: usize| i32::from(gray[i]);

    let top_left = p(idx - width - 1);
    let top = p(idx - width);
    let top_right = p(idx - width + 1);
    let left = p(idx - 1);
    let right = p(idx + 1);
    let bottom_left = p(idx + width - 1);
    let bottom = p(idx + width);
    let bottom_right = p(idx + width + 1);

    let gx = -top_left - 2 * left - bottom_left + top_right + 2 * right + bottom_right;
    let gy = -top_left - 2 * top - top_right + bottom_left + 2 * bottom + bottom_right;
    (gx, gy)
}

/// Run a 3x3 Sobel filter over every interior pixel (1-pixel border excluded).
///
/// Images without interior pixels (either side below 3) yield zero for both
/// metrics.
///
/// # Arguments
/// * `samples` - Raw RGBA pixel data (4 bytes per pixel), already validated
/// * `width`   - Image width in pixels
/// * `height`  - Image height in pixels
pub fn detect_edges(samples: &[u8], width: u32, height: u32) -> EdgeAnalysis {
    let width = width as usize;
    let height = height as usize;
    let gray = to_grayscale(samples);

    let mut edge_count = 0u64;
    let mut interior = 0u64;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let (gx, gy) = sobel_at(&gray, y * width + x, width);
            let magnitude = f64::from(gx * gx + gy * gy).sqrt();
            if magnitude > EDGE_THRESHOLD {
                edge_count += 1;
            }
            interior += 1;
        }
    }

    if interior == 0 {
        return EdgeAnalysis {
            edge_percentage: 0.0,
            sharpness_score: 0.0,
        };
    }

    let ratio = edge_count as f64 / interior as f64;
    EdgeAnalysis {
        edge_percentage: ratio * 100.0,
        sharpness_score: (ratio * SHARPNESS_SCALE).min(100.0),
    }
}
