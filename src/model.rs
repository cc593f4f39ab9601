//! Request-scoped value types shared by the analyzers and the scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PrintReadinessError;

/// Identity and metadata of a submitted file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    /// Milliseconds since the Unix epoch.
    pub last_modified: u64,
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        last_modified: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        FileDescriptor {
            name: name.into(),
            size_bytes,
            last_modified,
            mime_type: mime_type.into(),
        }
    }
}

/// Analyzer branch selected from a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Pdf,
    Generic,
}

impl FileCategory {
    /// Substring match, `image` checked before `pdf`.
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("image") {
            FileCategory::Image
        } else if mime.contains("pdf") {
            FileCategory::Pdf
        } else {
            FileCategory::Generic
        }
    }
}

/// Coarse image size known without decoded pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        ImageDimensions { width, height }
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Decoded raster image with 4 bytes (RGBA) per pixel.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer, rejecting zero dimensions and length mismatches.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> crate::error::Result<Self> {
        let buffer = PixelBuffer {
            width,
            height,
            samples,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Check `samples.len() == width * height * 4` and both sides positive.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PrintReadinessError::invalid_buffer(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        let expected_len = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(4))
            .ok_or_else(|| {
                PrintReadinessError::invalid_buffer(format!(
                    "overflow computing buffer size for {}x{} RGBA image",
                    self.width, self.height
                ))
            })?;

        if self.samples.len() != expected_len {
            return Err(PrintReadinessError::invalid_buffer(format!(
                "RGBA data size mismatch: expected {} bytes, got {}",
                expected_len,
                self.samples.len()
            )));
        }

        Ok(())
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    pub fn pixel_count(&self) -> u64 {
        self.dimensions().pixel_count()
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("samples_len", &self.samples.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    Resolution,
    AspectRatio,
    Gamut,
    Sharpness,
    Size,
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One detected problem with remediation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Issue {
            kind,
            severity,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}
