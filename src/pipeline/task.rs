// One request in, exactly one response out

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info_span, warn};

use crate::metadata::{FileAnalysis, analyze_file};
use crate::model::{FileCategory, FileDescriptor, ImageDimensions, PixelBuffer};
use crate::pipeline::fingerprint::request_fingerprint;
use crate::pixel::{PixelAnalysis, analyze_pixels};
use crate::scoring::ReadinessReport;

/// Failure message used when an analyzer aborts without an error value.
pub const UNKNOWN_FAILURE: &str = "Unknown error during file analysis";

/// A single analysis task.
///
/// A pixel buffer routes to the pixel analyzer unconditionally; otherwise the
/// declared type (falling back to the file's MIME type) selects the
/// metadata branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub file: FileDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_buffer: Option<PixelBuffer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
}

/// Analyzer chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Pixels,
    Metadata(FileCategory),
}

impl AnalysisRequest {
    pub fn new(file: FileDescriptor) -> Self {
        AnalysisRequest {
            file,
            pixel_buffer: None,
            dimensions: None,
            declared_type: None,
        }
    }

    pub fn with_pixels(mut self, buffer: PixelBuffer) -> Self {
        self.pixel_buffer = Some(buffer);
        self
    }

    pub fn with_dimensions(mut self, dimensions: ImageDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    pub fn category(&self) -> FileCategory {
        let mime = self.declared_type.as_deref().unwrap_or(&self.file.mime_type);
        FileCategory::from_mime(mime)
    }

    pub fn route(&self) -> Route {
        if self.pixel_buffer.is_some() {
            Route::Pixels
        } else {
            Route::Metadata(self.category())
        }
    }

    /// Hex SHA-256 over the request contents.
    pub fn fingerprint(&self) -> String {
        request_fingerprint(self)
    }
}

/// Successful payload: pixel metrics or a metadata report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResults {
    Pixel(PixelAnalysis),
    File(FileAnalysis),
}

impl AnalysisResults {
    pub fn print_readiness(&self) -> &ReadinessReport {
        match self {
            AnalysisResults::Pixel(p) => &p.print_readiness,
            AnalysisResults::File(f) => f.print_readiness(),
        }
    }
}

/// Serialized as `{"success":true,"results":…}` or `{"success":false,"error":…}`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    Success(AnalysisResults),
    Failure(String),
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Success(_))
    }

    pub fn results(&self) -> Option<&AnalysisResults> {
        match self {
            AnalysisResponse::Success(results) => Some(results),
            AnalysisResponse::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResponse::Success(_) => None,
            AnalysisResponse::Failure(message) => Some(message),
        }
    }
}

impl Serialize for AnalysisResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnalysisResponse", 2)?;
        match self {
            AnalysisResponse::Success(results) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("results", results)?;
            }
            AnalysisResponse::Failure(message) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

/// Run the routed analyzer, propagating its error.
pub fn analyze(request: &AnalysisRequest) -> crate::error::Result<AnalysisResults> {
    match &request.pixel_buffer {
        Some(buffer) => analyze_pixels(buffer).map(AnalysisResults::Pixel),
        None => analyze_file(&request.file, request.category(), request.dimensions)
            .map(AnalysisResults::File),
    }
}

/// Run one task to completion and convert every outcome into a response.
///
/// Errors and panics inside the analyzers become `Failure`; nothing escapes.
pub fn run_task(request: &AnalysisRequest) -> AnalysisResponse {
    run_fingerprinted_task(request, &request.fingerprint())
}

/// [`run_task`] for a caller that already holds the request fingerprint.
pub fn run_fingerprinted_task(request: &AnalysisRequest, fingerprint: &str) -> AnalysisResponse {
    let short_id = fingerprint.get(..12).unwrap_or(fingerprint);
    let span = info_span!("analysis_task", file = %request.file.name, id = %short_id);
    let _guard = span.enter();

    match catch_unwind(AssertUnwindSafe(|| analyze(request))) {
        Ok(Ok(results)) => {
            let report = results.print_readiness();
            debug!(
                route = ?request.route(),
                score = report.score,
                issues = report.issues.len(),
                "analysis complete"
            );
            AnalysisResponse::Success(results)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "analysis failed");
            AnalysisResponse::Failure(e.to_string())
        }
        Err(_) => {
            warn!("analyzer panicked");
            AnalysisResponse::Failure(UNKNOWN_FAILURE.to_string())
        }
    }
}
