use std::path::{Path, PathBuf};

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MediaKind {
    #[default]
    Video,
    Audio,
}

impl MediaKind {
    /// Extractor format selector for this kind.
    pub fn format_selector(self) -> &'static str {
        match self {
            MediaKind::Video => "best",
            MediaKind::Audio => "bestaudio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub kind: MediaKind,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    /// Returns the trimmed URL, or a validation error when nothing was entered.
    pub fn validated_url(&self) -> Result<&str, AppError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(AppError::Validation);
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub format: String,
    pub output_template: String,
    pub no_playlist: bool,
}

impl DownloadOptions {
    pub fn for_kind(kind: MediaKind, directory: &Path) -> Self {
        Self {
            format: kind.format_selector().to_string(),
            output_template: directory
                .join("%(title)s.%(ext)s")
                .to_string_lossy()
                .into_owned(),
            no_playlist: true,
        }
    }

    /// Fills the output template the same way the extractor would for a plain title.
    pub fn render_filename(&self, title: &str, ext: &str) -> PathBuf {
        // Substitute within the template pieces only, so a title may contain `%(ext)s`
        let rendered: Vec<String> = self
            .output_template
            .split("%(title)s")
            .map(|piece| piece.replace("%(ext)s", ext))
            .collect();
        PathBuf::from(rendered.join(title))
    }
}

/// Metadata returned by a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    pub title: String,
    pub filename: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub url: String,
    pub kind: MediaKind,
    pub options: DownloadOptions,
    pub info: MediaInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub title: String,
    pub path: PathBuf,
}
