//! Turns a file on disk into an [`AnalysisRequest`].
//!
//! This is the acquisition side of the pipeline: file metadata, a MIME type
//! guessed from the extension, and (for images) either decoded RGBA pixels or
//! just the dimensions read from the header.

use std::path::Path;
use std::time::UNIX_EPOCH;

use tracing::warn;

use crate::config::merged::MergedConfig;
use crate::humanize::file_extension;
use crate::model::{FileCategory, FileDescriptor, ImageDimensions, PixelBuffer};
use crate::pipeline::task::AnalysisRequest;

const MIME_TABLE: [(&str, &str); 12] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("bmp", "image/bmp"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("txt", "text/plain"),
];
const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type from the file extension, `application/octet-stream` if unknown.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = file_extension(file_name);
    MIME_TABLE
        .iter()
        .find(|(known, _)| *known == ext)
        .map_or(FALLBACK_MIME, |&(_, mime)| mime)
}

/// Read name, size, modification time and guessed MIME type.
pub fn describe_file(path: &Path) -> crate::error::Result<FileDescriptor> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(crate::error::PrintReadinessError::analysis(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let last_modified = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_millis() as u64);
    let mime_type = guess_mime_type(&name);

    Ok(FileDescriptor::new(name, metadata.len(), last_modified, mime_type))
}

/// Decode an image file into an RGBA pixel buffer.
pub fn decode_pixel_buffer(path: &Path) -> crate::error::Result<PixelBuffer> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Build the analysis request for one job input.
///
/// Images are decoded when `decode_pixels` is set and the pixel count is
/// within `max_decode_pixels`; otherwise only dimensions are attached. Images
/// whose header cannot be read go to the metadata analyzer without
/// dimensions.
pub fn build_request(path: &Path, config: &MergedConfig) -> crate::error::Result<AnalysisRequest> {
    let file = describe_file(path)?;
    let mut request = AnalysisRequest::new(file);
    if let Some(mime) = &config.mime_type {
        request = request.with_declared_type(mime.clone());
    }

    if request.category() != FileCategory::Image {
        return Ok(request);
    }

    let dims = match image::image_dimensions(path) {
        Ok((width, height)) => ImageDimensions::new(width, height),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read image header");
            return Ok(request);
        }
    };

    if !config.decode_pixels {
        return Ok(request.with_dimensions(dims));
    }

    if dims.pixel_count() > config.max_decode_pixels {
        warn!(
            path = %path.display(),
            pixels = dims.pixel_count(),
            limit = config.max_decode_pixels,
            "image exceeds decode limit, using metadata analysis"
        );
        return Ok(request.with_dimensions(dims));
    }

    match decode_pixel_buffer(path) {
        Ok(buffer) => Ok(request.with_pixels(buffer)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "decode failed, using metadata analysis");
            Ok(request.with_dimensions(dims))
        }
    }
}
