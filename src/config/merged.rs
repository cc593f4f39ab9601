use super::job::Job;
use super::settings::Settings;

#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub mime_type: Option<String>,
    pub decode_pixels: bool,
    pub max_decode_pixels: u64,
}

impl MergedConfig {
    /// JobのOption値がSomeならJobの値を、NoneならSettingsの値を使用する。
    pub fn new(settings: &Settings, job: &Job) -> Self {
        MergedConfig {
            mime_type: job.mime_type.clone(),
            decode_pixels: job.decode_pixels.unwrap_or(settings.decode_pixels),
            max_decode_pixels: settings.max_decode_pixels,
        }
    }
}
