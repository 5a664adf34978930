use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use super::models::{ExtractorConfig, ProbeResponse};
use crate::domain::{DownloadOptions, MediaInfo};

const UNKNOWN_TITLE: &str = "Unknown title";

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("yt-dlp not found at {0}")]
    NotInstalled(String),

    #[error("Failed to run yt-dlp: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{0}")]
    Failed(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("yt-dlp did not report the downloaded file")]
    NoOutputPath,
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// The two calls the orchestrator needs from a media extractor.
pub trait MediaBackend: Clone + Send + Sync + 'static {
    /// Resolves title and target filename without transferring media.
    fn probe(
        &self,
        url: &str,
        options: &DownloadOptions,
    ) -> impl Future<Output = Result<MediaInfo>> + Send;

    /// Transfers the media and returns the path of the written file.
    fn download(
        &self,
        url: &str,
        options: &DownloadOptions,
    ) -> impl Future<Output = Result<PathBuf>> + Send;
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    config: ExtractorConfig,
}

impl YtDlp {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    fn option_args(options: &DownloadOptions) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            options.format.clone(),
            "-o".to_string(),
            options.output_template.clone(),
        ];
        if options.no_playlist {
            args.push("--no-playlist".to_string());
        }
        args
    }

    async fn run(&self, args: Vec<String>) -> Result<String> {
        debug!("running {} {}", self.config.binary.display(), args.join(" "));

        let output = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    BackendError::NotInstalled(self.config.binary.display().to_string())
                }
                _ => BackendError::Spawn(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);
            return Err(BackendError::Failed(
                error_lines(&stderr)
                    .unwrap_or_else(|| format!("yt-dlp exited with {}", output.status)),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl MediaBackend for YtDlp {
    async fn probe(&self, url: &str, options: &DownloadOptions) -> Result<MediaInfo> {
        let mut args = Self::option_args(options);
        args.push("--dump-single-json".to_string());
        args.push("--".to_string());
        args.push(url.to_string());

        let stdout = self.run(args).await?;
        parse_probe(&stdout, options)
    }

    async fn download(&self, url: &str, options: &DownloadOptions) -> Result<PathBuf> {
        let mut args = Self::option_args(options);
        args.extend(
            ["--no-simulate", "--no-progress", "--print", "after_move:filepath", "--"]
                .map(String::from),
        );
        args.push(url.to_string());

        let stdout = self.run(args).await?;
        last_non_empty_line(&stdout)
            .map(PathBuf::from)
            .ok_or(BackendError::NoOutputPath)
    }
}

fn parse_probe(stdout: &str, options: &DownloadOptions) -> Result<MediaInfo> {
    let response: ProbeResponse = serde_json::from_str(stdout.trim())
        .map_err(|e| BackendError::InvalidResponse(format!("JSON decode error: {}", e)))?;

    let title = response
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let filename = match response.prepared_filename() {
        Some(name) => PathBuf::from(name),
        None => options.render_filename(&title, response.ext.as_deref().unwrap_or("unknown")),
    };

    Ok(MediaInfo { title, filename })
}

/// Joins the `ERROR:` lines yt-dlp writes to stderr.
fn error_lines(stderr: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^ERROR:\s*(.+)$").ok()?;
    let lines: Vec<&str> = re
        .captures_iter(stderr)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("; "))
    }
}

fn last_non_empty_line(stdout: &str) -> Option<&str> {
    stdout.lines().map(str::trim).filter(|l| !l.is_empty()).last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;
    use std::path::Path;

    #[test]
    fn test_option_args() {
        let options = DownloadOptions::for_kind(MediaKind::Audio, Path::new("out"));
        let args = YtDlp::option_args(&options);
        assert_eq!(args[0..2], ["-f".to_string(), "bestaudio".to_string()]);
        assert_eq!(args[2], "-o");
        assert!(args.contains(&"--no-playlist".to_string()));
    }

    #[test]
    fn test_parse_probe_prefers_prepared_filename() {
        let options = DownloadOptions::for_kind(MediaKind::Video, Path::new("out"));
        let json = r#"{"title": "My Video", "ext": "mp4", "_filename": "out/My Video.mp4"}"#;
        let info = parse_probe(json, &options).unwrap();
        assert_eq!(info.title, "My Video");
        assert_eq!(info.filename, PathBuf::from("out/My Video.mp4"));
    }

    #[test]
    fn test_parse_probe_falls_back_to_template() {
        let options = DownloadOptions::for_kind(MediaKind::Audio, Path::new("out"));
        let info = parse_probe(r#"{"ext": "webm"}"#, &options).unwrap();
        assert_eq!(info.title, "Unknown title");
        assert_eq!(info.filename, Path::new("out").join("Unknown title.webm"));
    }

    #[test]
    fn test_parse_probe_rejects_garbage() {
        let options = DownloadOptions::for_kind(MediaKind::Video, Path::new("out"));
        assert!(matches!(
            parse_probe("not json", &options),
            Err(BackendError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_lines() {
        let stderr = "WARNING: something\nERROR: [generic] Unsupported URL: https://example.com\n";
        assert_eq!(
            error_lines(stderr).as_deref(),
            Some("[generic] Unsupported URL: https://example.com")
        );
        assert_eq!(error_lines("WARNING: only a warning"), None);
    }

    #[test]
    fn test_last_non_empty_line() {
        assert_eq!(last_non_empty_line("a\n/tmp/x.mp4\n\n"), Some("/tmp/x.mp4"));
        assert_eq!(last_non_empty_line("\n  \n"), None);
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let client = YtDlp::new(ExtractorConfig {
            binary: PathBuf::from("/nonexistent/yt-dlp-binary"),
        });
        let options = DownloadOptions::for_kind(MediaKind::Video, Path::new("out"));
        let err = client.probe("https://example.com/v", &options).await.unwrap_err();
        assert!(matches!(err, BackendError::NotInstalled(_)));
    }
}
