use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JobFile {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub input: String,
    /// 宣言MIMEタイプ。指定時は拡張子からの推定より優先する。
    #[serde(default, deserialize_with = "deserialize_mime_type")]
    pub mime_type: Option<String>,
    pub decode_pixels: Option<bool>,
}

/// MIMEタイプ文字列を検証する。
///
/// 空文字列・空白のみは拒否し、前後の空白を除去して小文字化する。
pub fn normalize_mime_type(s: &str) -> crate::error::Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(crate::error::PrintReadinessError::config(
            "mime_type cannot be empty",
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(crate::error::PrintReadinessError::config(format!(
            "Invalid mime_type: '{trimmed}'"
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// serdeのdeserialize_withで使用するMIMEタイプデシリアライザ
fn deserialize_mime_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    s.map(|s| normalize_mime_type(&s).map_err(serde::de::Error::custom))
        .transpose()
}
