use serde::Deserialize;
use std::path::PathBuf;

/// Subset of the `--dump-single-json` document we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(rename = "_filename", default)]
    pub legacy_filename: Option<String>,
}

impl ProbeResponse {
    pub fn prepared_filename(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .or(self.legacy_filename.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Configuration for the extractor client
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub binary: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("yt-dlp"),
        }
    }
}
