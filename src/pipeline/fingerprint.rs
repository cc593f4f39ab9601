// SHA-256 request digest for correlating logs and unordered responses

use sha2::{Digest, Sha256};

use crate::pipeline::task::AnalysisRequest;

/// Feed a length-prefixed byte field so adjacent fields cannot alias.
fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Compute the request fingerprint as a lowercase hex string.
///
/// Hash input: file name, size, mtime, MIME type, declared type, dimensions,
/// then the pixel buffer (width, height, samples). Absent optional parts hash
/// as a zero marker byte.
pub fn request_fingerprint(request: &AnalysisRequest) -> String {
    let mut hasher = Sha256::new();

    let file = &request.file;
    update_field(&mut hasher, file.name.as_bytes());
    hasher.update(file.size_bytes.to_le_bytes());
    hasher.update(file.last_modified.to_le_bytes());
    update_field(&mut hasher, file.mime_type.as_bytes());

    match &request.declared_type {
        Some(declared) => {
            hasher.update([1u8]);
            update_field(&mut hasher, declared.as_bytes());
        }
        None => hasher.update([0u8]),
    }

    match request.dimensions {
        Some(dims) => {
            hasher.update([1u8]);
            hasher.update(dims.width.to_le_bytes());
            hasher.update(dims.height.to_le_bytes());
        }
        None => hasher.update([0u8]),
    }

    match &request.pixel_buffer {
        Some(buffer) => {
            hasher.update([1u8]);
            hasher.update(buffer.width.to_le_bytes());
            hasher.update(buffer.height.to_le_bytes());
            update_field(&mut hasher, &buffer.samples);
        }
        None => hasher.update([0u8]),
    }

    hex::encode(hasher.finalize())
}
