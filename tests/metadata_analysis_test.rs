// Metadata analyzer: image / PDF / generic branches

use print_readiness::error::PrintReadinessError;
use print_readiness::humanize::format_file_size;
use print_readiness::metadata::image::CompressionEfficiency;
use print_readiness::metadata::{FileAnalysis, analyze_file};
use print_readiness::model::{FileCategory, FileDescriptor, ImageDimensions, IssueKind, Severity};
use print_readiness::scoring::Rating;

fn descriptor(name: &str, size: u64, mime: &str) -> FileDescriptor {
    FileDescriptor::new(name, size, 1_700_000_000_000, mime)
}

// ============================================================
// 1. File size formatting
// ============================================================

#[test]
fn test_format_file_size_examples() {
    assert_eq!(format_file_size(512), "512 bytes");
    assert_eq!(format_file_size(2048), "2.0 KB");
    assert_eq!(format_file_size(5_242_880), "5.0 MB");
}

// ============================================================
// 2. PDF branch
// ============================================================

#[test]
fn test_small_scanned_pdf() {
    let file = descriptor("receipt_scan.pdf", 3_000, "application/pdf");
    let analysis = analyze_file(&file, FileCategory::Pdf, None).expect("pdf analysis");

    let FileAnalysis::Pdf(pdf) = analysis else {
        panic!("expected PDF analysis");
    };
    assert_eq!(pdf.file_analysis.estimated_page_count, 1);
    assert_eq!(pdf.file_analysis.file_size, "2.9 KB");
    assert!(!pdf.is_print_ready);

    let issues = &pdf.print_readiness.issues;
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].kind, IssueKind::Size);
    assert_eq!(issues[0].severity, Severity::Medium);
    assert!(issues[0].message.contains("Very small"));
    assert_eq!(issues[1].kind, IssueKind::Scan);
    assert_eq!(issues[1].severity, Severity::Low);
    assert!(issues[1].message.contains("Scanned PDF"));

    // Issues are appended verbatim at 5 points each.
    assert_eq!(pdf.potential_issues, *issues);
    assert_eq!(pdf.print_readiness.score, 90);
    assert_eq!(pdf.print_readiness.rating, Rating::Excellent);
    assert!(pdf.print_readiness.recommendation.is_none());
}

#[test]
fn test_large_pdf() {
    let file = descriptor("catalog.pdf", 12 * 1024 * 1024, "application/pdf");
    let analysis = analyze_file(&file, FileCategory::Pdf, None).expect("pdf analysis");
    let FileAnalysis::Pdf(pdf) = analysis else {
        panic!("expected PDF analysis");
    };
    assert_eq!(pdf.file_analysis.estimated_page_count, 123);
    assert!(pdf.is_print_ready);
    assert_eq!(pdf.print_readiness.issues.len(), 1);
    assert!(pdf.print_readiness.issues[0].message.starts_with("Large PDF"));
    assert_eq!(pdf.print_readiness.score, 95);
}

// ============================================================
// 3. Image branch
// ============================================================

#[test]
fn test_image_with_dimensions() {
    let file = descriptor("holiday.jpg", 2_000_000, "image/jpeg");
    let dims = ImageDimensions::new(3000, 2000);
    let analysis = analyze_file(&file, FileCategory::Image, Some(dims)).expect("image analysis");
    let FileAnalysis::Image(image) = analysis else {
        panic!("expected image analysis");
    };
    let metrics = image.metrics.expect("metrics present");

    assert_eq!(metrics.dimensions.aspect_ratio, 1.5);
    assert_eq!(metrics.resolution.total_pixels, 6_000_000);
    assert_eq!(metrics.resolution.megapixels, 6.0);
    assert_eq!(metrics.resolution.estimated_dpi, 150);
    assert_eq!(metrics.print_capabilities.max_size.width_inches, 20.0);
    assert_eq!(metrics.print_capabilities.max_size.height_inches, 13.3);
    assert_eq!(metrics.print_capabilities.recommended_size.width_inches, 10.0);
    assert_eq!(
        metrics.print_capabilities.recommended_size.description,
        "10.0″ × 6.7″ at 300 DPI"
    );

    let compression = metrics.file_analysis.compression_ratio.expect("ratio");
    assert_eq!(compression.ratio, 9.0);
    assert_eq!(compression.efficiency, CompressionEfficiency::Medium);

    assert!(image.print_readiness.issues.is_empty());
    assert_eq!(image.print_readiness.score, 100);
}

#[test]
fn test_low_res_panorama_image() {
    let file = descriptor("pano.png", 300_000, "image/png");
    let dims = ImageDimensions::new(1600, 400);
    let analysis = analyze_file(&file, FileCategory::Image, Some(dims)).expect("image analysis");
    let report = analysis.print_readiness();

    let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IssueKind::Resolution, IssueKind::AspectRatio]);
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.issues[1].severity, Severity::Low);
    // 100 - 30 - 10
    assert_eq!(report.score, 60);
    assert_eq!(report.rating, Rating::Fair);
}

#[test]
fn test_medium_res_image() {
    let file = descriptor("square.png", 1_000_000, "image/png");
    let dims = ImageDimensions::new(1500, 1500);
    let report = analyze_file(&file, FileCategory::Image, Some(dims))
        .expect("image analysis")
        .print_readiness()
        .clone();
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].severity, Severity::Medium);
    assert_eq!(report.score, 85);
    assert_eq!(report.rating, Rating::Good);
}

#[test]
fn test_megapixels_just_below_one_count_as_low_res() {
    let file = descriptor("photo.jpg", 400_000, "image/jpeg");
    let dims = ImageDimensions::new(995, 1000);
    let analysis = analyze_file(&file, FileCategory::Image, Some(dims)).expect("image analysis");
    let FileAnalysis::Image(image) = analysis else {
        panic!("expected image analysis");
    };
    let metrics = image.metrics.as_ref().expect("metrics");
    assert_eq!(metrics.resolution.megapixels, 0.99);
    assert_eq!(metrics.dimensions.aspect_ratio, 0.99);

    let report = &image.print_readiness;
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].kind, IssueKind::Resolution);
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.score, 70);
    assert_eq!(report.rating, Rating::Good);
}

#[test]
fn test_megapixels_just_above_three_round_up() {
    // 2.995 is stored slightly above the tie.
    let file = descriptor("wide.jpg", 1_500_000, "image/jpeg");
    let dims = ImageDimensions::new(2995, 1000);
    let analysis = analyze_file(&file, FileCategory::Image, Some(dims)).expect("image analysis");
    let FileAnalysis::Image(image) = analysis else {
        panic!("expected image analysis");
    };
    let metrics = image.metrics.as_ref().expect("metrics");
    assert_eq!(metrics.resolution.megapixels, 3.0);

    let kinds: Vec<IssueKind> = image.print_readiness.issues.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IssueKind::AspectRatio]);
    assert_eq!(image.print_readiness.score, 90);
}

#[test]
fn test_image_without_dimensions() {
    let file = descriptor("unknown.heic", 1_000, "image/heic");
    let analysis = analyze_file(&file, FileCategory::Image, None).expect("image analysis");
    let FileAnalysis::Image(image) = analysis else {
        panic!("expected image analysis");
    };
    assert!(image.metrics.is_none());
    assert_eq!(image.print_readiness.score, 100);

    let json = serde_json::to_value(&image).unwrap();
    assert!(json.get("dimensions").is_none());
    assert_eq!(json["name"], "unknown.heic");
}

#[test]
fn test_reports_echo_descriptor_keys() {
    let dims = ImageDimensions::new(4000, 3000);
    let cases = [
        analyze_file(&descriptor("a.png", 2_048, "image/png"), FileCategory::Image, Some(dims)),
        analyze_file(&descriptor("b.pdf", 2_048, "application/pdf"), FileCategory::Pdf, None),
        analyze_file(&descriptor("c.zip", 2_048, "application/zip"), FileCategory::Generic, None),
    ];

    for analysis in cases {
        let json = serde_json::to_value(analysis.expect("analysis")).unwrap();
        assert_eq!(json["sizeBytes"], 2_048);
        assert_eq!(json["lastModified"], 1_700_000_000_000u64);
        assert!(json["mimeType"].is_string());
        assert!(json.get("size").is_none());
        assert!(json.get("type").is_none());
    }
}

#[test]
fn test_zero_sided_dimensions_fail() {
    let file = descriptor("broken.png", 10, "image/png");
    let err = analyze_file(&file, FileCategory::Image, Some(ImageDimensions::new(0, 10)))
        .unwrap_err();
    assert!(matches!(err, PrintReadinessError::AnalysisError(_)));
}

// ============================================================
// 4. Generic branch
// ============================================================

#[test]
fn test_generic_archive() {
    let file = descriptor("Artwork.Final.ZIP", 5_242_880, "application/zip");
    let analysis = analyze_file(&file, FileCategory::Generic, None).expect("generic analysis");
    let FileAnalysis::Generic(generic) = analysis else {
        panic!("expected generic analysis");
    };
    assert_eq!(generic.file_analysis.file_size, "5.0 MB");
    assert_eq!(generic.file_analysis.file_extension, "zip");
    assert!(generic.file_analysis.is_compressed);
    assert_eq!(generic.print_readiness.score, 100);
    assert!(generic.print_readiness.issues.is_empty());
}

#[test]
fn test_empty_name_is_analysis_error() {
    let file = descriptor("  ", 10, "text/plain");
    let err = analyze_file(&file, FileCategory::Generic, None).unwrap_err();
    assert!(matches!(err, PrintReadinessError::AnalysisError(_)));
    assert_eq!(err.to_string(), "Analysis error: file name is empty");
}

#[test]
fn test_metadata_analysis_is_deterministic() {
    let file = descriptor("poster_scan.pdf", 9_999, "application/pdf");
    let a = analyze_file(&file, FileCategory::Pdf, None).unwrap();
    let b = analyze_file(&file, FileCategory::Pdf, None).unwrap();
    assert_eq!(a, b);
}
