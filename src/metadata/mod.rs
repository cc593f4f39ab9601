//! Heuristic analysis from file-level metadata only.
//!
//! A cheaper, less precise sibling of [`crate::pixel`]: it needs no decoded
//! pixels, only the file descriptor and, for images, the dimensions.

pub mod generic;
pub mod image;
pub mod pdf;

use serde::Serialize;

use crate::error::PrintReadinessError;
use crate::model::{FileCategory, FileDescriptor, ImageDimensions};
use crate::scoring::metadata_rules::score_file_metrics;
use self::generic::{GenericFileAnalysis, generic_stats};
use self::image::{ImageFileAnalysis, image_metrics};
use self::pdf::{PdfFileAnalysis, SMALL_PDF_BYTES, detect_pdf_issues, pdf_stats};

/// Result of the metadata analyzer, one variant per branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileAnalysis {
    Image(ImageFileAnalysis),
    Pdf(PdfFileAnalysis),
    Generic(GenericFileAnalysis),
}

impl FileAnalysis {
    pub fn print_readiness(&self) -> &crate::scoring::ReadinessReport {
        match self {
            FileAnalysis::Image(a) => &a.print_readiness,
            FileAnalysis::Pdf(a) => &a.print_readiness,
            FileAnalysis::Generic(a) => &a.print_readiness,
        }
    }
}

/// Run the branch for `category` and score the result.
///
/// `dimensions` is only consulted by the image branch. Fails with
/// `AnalysisError` on malformed metadata (empty name, zero-sided dimensions).
pub fn analyze_file(
    file: &FileDescriptor,
    category: FileCategory,
    dimensions: Option<ImageDimensions>,
) -> crate::error::Result<FileAnalysis> {
    if file.name.trim().is_empty() {
        return Err(PrintReadinessError::analysis("file name is empty"));
    }

    let analysis = match category {
        FileCategory::Image => {
            let metrics = dimensions
                .map(|dims| image_metrics(file, dims))
                .transpose()?;
            let print_readiness = score_file_metrics(metrics.as_ref(), &[]);
            FileAnalysis::Image(ImageFileAnalysis {
                file: file.clone(),
                metrics,
                print_readiness,
            })
        }
        FileCategory::Pdf => {
            let potential_issues = detect_pdf_issues(file);
            let print_readiness = score_file_metrics(None, &potential_issues);
            FileAnalysis::Pdf(PdfFileAnalysis {
                file: file.clone(),
                file_analysis: pdf_stats(file),
                is_print_ready: file.size_bytes > SMALL_PDF_BYTES,
                potential_issues,
                print_readiness,
            })
        }
        FileCategory::Generic => FileAnalysis::Generic(GenericFileAnalysis {
            file: file.clone(),
            file_analysis: generic_stats(file),
            print_readiness: score_file_metrics(None, &[]),
        }),
    };

    Ok(analysis)
}
