// Pixel count -> print quality tier and maximum print size

use serde::Serialize;

use crate::humanize::{round_to, to_fixed};

/// DPI used for the recommended (quality) print size.
pub const QUALITY_DPI: u32 = 300;

const EXCELLENT_PIXELS: u64 = 20_000_000;
const GOOD_PIXELS: u64 = 8_000_000;
const ADEQUATE_PIXELS: u64 = 2_000_000;
const POOR_PIXELS: u64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ResolutionTier {
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Poor,
    Adequate,
    Good,
    Excellent,
}

impl ResolutionTier {
    /// Tier from pixel count; thresholds are inclusive lower bounds.
    pub fn from_pixel_count(pixel_count: u64) -> Self {
        if pixel_count >= EXCELLENT_PIXELS {
            ResolutionTier::Excellent
        } else if pixel_count >= GOOD_PIXELS {
            ResolutionTier::Good
        } else if pixel_count >= ADEQUATE_PIXELS {
            ResolutionTier::Adequate
        } else if pixel_count >= POOR_PIXELS {
            ResolutionTier::Poor
        } else {
            ResolutionTier::VeryPoor
        }
    }

    pub fn score(self) -> u8 {
        match self {
            ResolutionTier::Excellent => 100,
            ResolutionTier::Good => 80,
            ResolutionTier::Adequate => 60,
            ResolutionTier::Poor => 30,
            ResolutionTier::VeryPoor => 10,
        }
    }
}

/// Physical print size of an image at a fixed DPI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintSize {
    /// Inches, rounded to one decimal.
    pub width_inches: f64,
    pub height_inches: f64,
    pub dpi: u32,
    pub description: String,
}

impl PrintSize {
    pub fn at_dpi(width: u32, height: u32, dpi: u32) -> Self {
        let width_inches = f64::from(width) / f64::from(dpi);
        let height_inches = f64::from(height) / f64::from(dpi);
        PrintSize {
            width_inches: round_to(width_inches, 1),
            height_inches: round_to(height_inches, 1),
            dpi,
            description: format!(
                "{}″ × {}″ at {dpi} DPI",
                to_fixed(width_inches, 1),
                to_fixed(height_inches, 1)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionQuality {
    pub pixel_count: u64,
    #[serde(rename = "quality")]
    pub tier: ResolutionTier,
    pub score: u8,
    pub recommended_max_print_size: PrintSize,
}

pub fn analyze_resolution(width: u32, height: u32) -> ResolutionQuality {
    let pixel_count = u64::from(width) * u64::from(height);
    let tier = ResolutionTier::from_pixel_count(pixel_count);
    ResolutionQuality {
        pixel_count,
        tier,
        score: tier.score(),
        recommended_max_print_size: PrintSize::at_dpi(width, height, QUALITY_DPI),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_size_at_300_dpi() {
        let size = PrintSize::at_dpi(4000, 3000, 300);
        assert_eq!(size.width_inches, 13.3);
        assert_eq!(size.height_inches, 10.0);
        assert_eq!(size.dpi, 300);
        assert_eq!(size.description, "13.3″ × 10.0″ at 300 DPI");
    }

    #[test]
    fn test_tier_scores() {
        assert_eq!(ResolutionTier::Excellent.score(), 100);
        assert_eq!(ResolutionTier::VeryPoor.score(), 10);
    }
}
