//! 解析ジョブの設定。
//!
//! `settings.yaml` はジョブファイルと同じディレクトリに置き、ワーカー数
//! (`parallel_workers`)、ピクセルデコードの有無 (`decode_pixels`)、
//! デコードする画素数の上限 (`max_decode_pixels`) を指定する。
//! ジョブ側の `mime_type` / `decode_pixels` は [`merged::MergedConfig`] で
//! 設定値より優先される。

pub mod job;
pub mod merged;
pub mod settings;

use std::path::Path;

use tracing::debug;

use crate::error::PrintReadinessError;
use settings::Settings;

pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// ジョブファイルの隣にある `settings.yaml` を読み込む。無ければデフォルト値。
pub fn load_settings_for_job(job_file_path: &Path) -> crate::error::Result<Settings> {
    let dir = job_file_path
        .parent()
        .ok_or_else(|| PrintReadinessError::config("Cannot determine job file directory"))?;
    let settings_path = dir.join(SETTINGS_FILE_NAME);

    if !settings_path.exists() {
        debug!(job = %job_file_path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_file(&settings_path)?;
    debug!(
        path = %settings_path.display(),
        workers = settings.parallel_workers,
        decode_pixels = settings.decode_pixels,
        max_decode_pixels = settings.max_decode_pixels,
        "settings loaded"
    );
    Ok(settings)
}
