// Generic branch: size, extension and archive detection

use serde::Serialize;

use crate::humanize::{file_extension, format_file_size, is_compressed_file};
use crate::model::FileDescriptor;
use crate::scoring::ReadinessReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFileStats {
    pub file_size: String,
    pub file_extension: String,
    pub is_compressed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFileAnalysis {
    #[serde(flatten)]
    pub file: FileDescriptor,
    pub file_analysis: GenericFileStats,
    pub print_readiness: ReadinessReport,
}

pub fn generic_stats(file: &FileDescriptor) -> GenericFileStats {
    GenericFileStats {
        file_size: format_file_size(file.size_bytes),
        file_extension: file_extension(&file.name),
        is_compressed: is_compressed_file(&file.name),
    }
}
