use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 解析ワーカー数。0 はCPU数に合わせる。
    pub parallel_workers: usize,
    pub decode_pixels: bool,
    /// これを超える画素数の画像はデコードせず、メタデータ解析に回す。
    pub max_decode_pixels: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parallel_workers: 0,
            decode_pixels: true,
            max_decode_pixels: 50_000_000,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::PrintReadinessError::config(format!(
                "Failed to parse settings YAML: {e}"
            ))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
