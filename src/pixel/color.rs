// RGB -> CMYK dominance estimation over a sparse pixel sample

use serde::Serialize;

/// Byte stride between sampled pixels: every 10th RGBA pixel.
pub const SAMPLE_STRIDE: usize = 40;

const BLACK_THRESHOLD: f64 = 0.7;
const PROCESS_THRESHOLD: f64 = 0.6;

/// Estimated CMYK channel dominance, each field a percentage of `sample_count`.
///
/// The five percentages are independent and need not sum to 100: a pixel may
/// be dominated by no channel at all, and the gamut flag is counted on top of
/// the dominance bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDistribution {
    pub cyan_pct: f64,
    pub magenta_pct: f64,
    pub yellow_pct: f64,
    pub black_pct: f64,
    pub out_of_gamut_pct: f64,
    pub sample_count: u64,
}

/// Dominant print channel of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Cyan,
    Magenta,
    Yellow,
    Black,
}

/// Classify one pixel. Black wins over the process colors, then C, M, Y.
pub fn classify_pixel(r: u8, g: u8, b: u8) -> Option<Dominance> {
    let c = 1.0 - f64::from(r) / 255.0;
    let m = 1.0 - f64::from(g) / 255.0;
    let y = 1.0 - f64::from(b) / 255.0;
    let k = c.min(m).min(y);

    if k > BLACK_THRESHOLD {
        return Some(Dominance::Black);
    }

    let cp = process_fraction(c, k);
    let mp = process_fraction(m, k);
    let yp = process_fraction(y, k);

    if cp > PROCESS_THRESHOLD {
        Some(Dominance::Cyan)
    } else if mp > PROCESS_THRESHOLD {
        Some(Dominance::Magenta)
    } else if yp > PROCESS_THRESHOLD {
        Some(Dominance::Yellow)
    } else {
        None
    }
}

/// `(channel - k) / (1 - k)`, with pure black (k == 1) mapped to 0.
fn process_fraction(channel: f64, k: f64) -> f64 {
    let denom = 1.0 - k;
    if denom == 0.0 {
        return 0.0;
    }
    (channel - k) / denom
}

/// Saturated magenta/violet that process inks cannot reproduce.
pub fn is_out_of_gamut(r: u8, g: u8, b: u8) -> bool {
    r > 240 && g < 50 && b > 240
}

/// Sample every 10th pixel of an RGBA buffer and tally channel dominance.
///
/// `samples` must hold whole RGBA pixels and at least one pixel.
pub fn color_distribution(samples: &[u8]) -> ColorDistribution {
    let mut cyan = 0u64;
    let mut magenta = 0u64;
    let mut yellow = 0u64;
    let mut black = 0u64;
    let mut out_of_gamut = 0u64;
    let mut total = 0u64;

    for px in samples.chunks_exact(4).step_by(SAMPLE_STRIDE / 4) {
        let (r, g, b) = (px[0], px[1], px[2]);

        match classify_pixel(r, g, b) {
            Some(Dominance::Black) => black += 1,
            Some(Dominance::Cyan) => cyan += 1,
            Some(Dominance::Magenta) => magenta += 1,
            Some(Dominance::Yellow) => yellow += 1,
            None => {}
        }

        if is_out_of_gamut(r, g, b) {
            out_of_gamut += 1;
        }

        total += 1;
    }

    let pct = |count: u64| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };

    ColorDistribution {
        cyan_pct: pct(cyan),
        magenta_pct: pct(magenta),
        yellow_pct: pct(yellow),
        black_pct: pct(black),
        out_of_gamut_pct: pct(out_of_gamut),
        sample_count: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_black_is_black() {
        assert_eq!(classify_pixel(0, 0, 0), Some(Dominance::Black));
    }

    #[test]
    fn test_primary_inks() {
        // Pure cyan ink: r=0 -> c=1, m=y=0, k=0
        assert_eq!(classify_pixel(0, 255, 255), Some(Dominance::Cyan));
        assert_eq!(classify_pixel(255, 0, 255), Some(Dominance::Magenta));
        assert_eq!(classify_pixel(255, 255, 0), Some(Dominance::Yellow));
    }

    #[test]
    fn test_red_is_magenta_before_yellow() {
        // Red has m=y=1; magenta is checked first.
        assert_eq!(classify_pixel(255, 0, 0), Some(Dominance::Magenta));
    }

    #[test]
    fn test_white_and_grey_have_no_dominance() {
        assert_eq!(classify_pixel(255, 255, 255), None);
        assert_eq!(classify_pixel(128, 128, 128), None);
    }

    #[test]
    fn test_gamut_flag() {
        assert!(is_out_of_gamut(255, 0, 255));
        assert!(!is_out_of_gamut(255, 0, 0));
        assert!(!is_out_of_gamut(240, 0, 255));
        assert!(!is_out_of_gamut(255, 50, 255));
    }

    #[test]
    fn test_sampling_takes_every_tenth_pixel() {
        // 20 pixels: index 0 and 10 are sampled.
        let mut samples = vec![255u8; 20 * 4];
        samples[0..4].copy_from_slice(&[0, 0, 0, 255]);
        samples[4..8].copy_from_slice(&[0, 0, 0, 255]);
        let dist = color_distribution(&samples);
        assert_eq!(dist.sample_count, 2);
        assert_eq!(dist.black_pct, 50.0);
        assert_eq!(dist.cyan_pct, 0.0);
    }

    #[test]
    fn test_partial_trailing_stride_is_sampled() {
        // 11 pixels -> samples at 0 and 10
        let samples = vec![0u8; 11 * 4];
        assert_eq!(color_distribution(&samples).sample_count, 2);
    }
}
