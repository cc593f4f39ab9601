// PDF branch: size/name heuristics without parsing the document

use serde::Serialize;

use crate::humanize::format_file_size;
use crate::model::{FileDescriptor, Issue, IssueKind, Severity};
use crate::scoring::ReadinessReport;

/// Assumed average size of one PDF page.
pub const BYTES_PER_PAGE: u64 = 100 * 1024;
pub const LARGE_PDF_BYTES: u64 = 10 * 1024 * 1024;
pub const SMALL_PDF_BYTES: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfFileStats {
    pub file_size: String,
    pub estimated_page_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfFileAnalysis {
    #[serde(flatten)]
    pub file: FileDescriptor,
    pub file_analysis: PdfFileStats,
    pub is_print_ready: bool,
    pub potential_issues: Vec<Issue>,
    pub print_readiness: ReadinessReport,
}

/// `max(1, round(size / 100 KiB))`.
pub fn estimate_page_count(size_bytes: u64) -> u64 {
    let pages = (size_bytes as f64 / BYTES_PER_PAGE as f64).round() as u64;
    pages.max(1)
}

/// Size and file-name checks, in detection order.
pub fn detect_pdf_issues(file: &FileDescriptor) -> Vec<Issue> {
    let mut issues = Vec::new();

    if file.size_bytes > LARGE_PDF_BYTES {
        issues.push(Issue::new(
            IssueKind::Size,
            Severity::Medium,
            "Large PDF file may cause processing delays",
            "Consider optimizing the PDF size if possible",
        ));
    } else if file.size_bytes < SMALL_PDF_BYTES {
        issues.push(Issue::new(
            IssueKind::Size,
            Severity::Medium,
            "Very small PDF file may be incomplete or corrupted",
            "Verify the PDF content is complete",
        ));
    }

    if file.name.to_lowercase().contains("scan") {
        issues.push(Issue::new(
            IssueKind::Scan,
            Severity::Low,
            "Scanned PDF detected",
            "Ensure text is properly recognized (OCR) for best print quality",
        ));
    }

    issues
}

pub fn pdf_stats(file: &FileDescriptor) -> PdfFileStats {
    PdfFileStats {
        file_size: format_file_size(file.size_bytes),
        estimated_page_count: estimate_page_count(file.size_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> FileDescriptor {
        FileDescriptor::new(name, size, 0, "application/pdf")
    }

    #[test]
    fn test_page_count_rounds_and_floors_at_one() {
        assert_eq!(estimate_page_count(0), 1);
        assert_eq!(estimate_page_count(3_000), 1);
        assert_eq!(estimate_page_count(BYTES_PER_PAGE * 3), 3);
        assert_eq!(estimate_page_count(BYTES_PER_PAGE * 5 / 2), 3);
        assert_eq!(estimate_page_count(BYTES_PER_PAGE * 5 / 2 - 1), 2);
    }

    #[test]
    fn test_size_checks_are_exclusive() {
        assert!(detect_pdf_issues(&pdf("a.pdf", 50_000)).is_empty());
        let large = detect_pdf_issues(&pdf("a.pdf", LARGE_PDF_BYTES + 1));
        assert_eq!(large.len(), 1);
        assert!(large[0].message.starts_with("Large PDF"));
        assert!(detect_pdf_issues(&pdf("a.pdf", LARGE_PDF_BYTES)).is_empty());
        assert!(detect_pdf_issues(&pdf("a.pdf", SMALL_PDF_BYTES)).is_empty());
    }

    #[test]
    fn test_scan_name_is_case_insensitive() {
        let issues = detect_pdf_issues(&pdf("Contract_SCANNED.PDF", 200_000));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Scan);
        assert_eq!(issues[0].severity, Severity::Low);
    }
}
