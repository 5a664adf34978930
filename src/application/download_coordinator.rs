use tracing::{info, warn};

use crate::{
    application::storage::{DocumentsRoot, StorageLocator},
    domain::{AppError, DownloadOptions, DownloadOutcome, DownloadPlan, DownloadRequest, Session},
    extractor::MediaBackend,
};

#[derive(Clone)]
pub struct DownloadCoordinator<B, R> {
    backend: B,
    storage: StorageLocator<R>,
}

impl<B, R> DownloadCoordinator<B, R>
where
    B: MediaBackend,
    R: DocumentsRoot,
{
    pub fn new(backend: B, storage: StorageLocator<R>) -> Self {
        Self { backend, storage }
    }

    /// Validates the request, makes sure the output folder exists and probes the URL.
    pub async fn prepare(&self, request: DownloadRequest) -> Result<DownloadPlan, AppError> {
        let url = request.validated_url()?.to_string();
        let directory = self.storage.ensure_output_directory()?;
        let options = DownloadOptions::for_kind(request.kind, &directory);

        info!("probing {} as {:?}", url, request.kind);
        let info = self
            .backend
            .probe(&url, &options)
            .await
            .map_err(|e| AppError::Extraction(e.to_string()))?;

        Ok(DownloadPlan {
            url,
            kind: request.kind,
            options,
            info,
        })
    }

    pub async fn transfer(&self, plan: DownloadPlan) -> Result<DownloadOutcome, AppError> {
        info!(
            "downloading {:?} \"{}\" to {}",
            plan.kind,
            plan.info.title,
            plan.info.filename.display()
        );
        let path = self
            .backend
            .download(&plan.url, &plan.options)
            .await
            .map_err(|e| AppError::Extraction(e.to_string()))?;

        info!("saved {}", path.display());
        Ok(DownloadOutcome {
            title: plan.info.title,
            path,
        })
    }

    /// Runs a whole download and reflects every step in the session.
    pub async fn execute(
        &self,
        request: DownloadRequest,
        session: &mut Session,
    ) -> Result<DownloadOutcome, AppError> {
        let plan = match self.prepare(request).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!("download not started: {}", e);
                session.download_failed(&e);
                return Err(e);
            }
        };

        session.download_started(&plan.info);

        match self.transfer(plan).await {
            Ok(outcome) => {
                session.download_succeeded(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                warn!("download failed: {}", e);
                session.download_failed(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::storage::DEFAULT_FOLDER_NAME;
    use crate::domain::{MediaInfo, MediaKind, StatusTag};
    use crate::extractor::client::{BackendError, Result as BackendResult};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct FakeBackend {
        title: Option<String>,
        fail_probe: bool,
        fail_download: bool,
        probes: Arc<AtomicUsize>,
        downloads: Arc<AtomicUsize>,
    }

    impl FakeBackend {
        fn titled(title: &str) -> Self {
            Self {
                title: Some(title.to_string()),
                ..Default::default()
            }
        }

        fn ext(options: &DownloadOptions) -> &'static str {
            if options.format == "bestaudio" {
                "webm"
            } else {
                "mp4"
            }
        }
    }

    impl MediaBackend for FakeBackend {
        async fn probe(&self, _url: &str, options: &DownloadOptions) -> BackendResult<MediaInfo> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            if self.fail_probe {
                return Err(BackendError::Failed("Unsupported URL".to_string()));
            }
            let title = self.title.clone().unwrap_or_default();
            let filename = options.render_filename(&title, Self::ext(options));
            Ok(MediaInfo { title, filename })
        }

        async fn download(&self, _url: &str, options: &DownloadOptions) -> BackendResult<PathBuf> {
            self.downloads.fetch_add(1, Ordering::SeqCst);
            if self.fail_download {
                return Err(BackendError::Failed("HTTP Error 403: Forbidden".to_string()));
            }
            let title = self.title.clone().unwrap_or_default();
            Ok(options.render_filename(&title, Self::ext(options)))
        }
    }

    fn coordinator(
        backend: FakeBackend,
        root: PathBuf,
    ) -> DownloadCoordinator<FakeBackend, PathBuf> {
        DownloadCoordinator::new(backend, StorageLocator::new(root, DEFAULT_FOLDER_NAME))
    }

    #[tokio::test]
    async fn test_successful_video_download() {
        let tmp = tempfile::tempdir().unwrap();
        let coordinator = coordinator(FakeBackend::titled("My Video"), tmp.path().to_path_buf());
        let mut session = Session::default();

        let outcome = coordinator
            .execute(
                DownloadRequest::new("https://example.com/video1", MediaKind::Video),
                &mut session,
            )
            .await
            .unwrap();

        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.locate(0), Some(outcome.path.as_path()));
        assert!(outcome.path.ends_with("yt-downloader/My Video.mp4"));

        let message = session.status.message().unwrap();
        assert_eq!(message.text, "Downloaded: My Video");
        assert_eq!(message.tag, StatusTag::Success);

        let log: Vec<&str> = session.status.log().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(log, ["Download: My Video", "Downloaded: My Video"]);
    }

    #[tokio::test]
    async fn test_blank_url_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FakeBackend::titled("ignored");
        let coordinator = coordinator(backend.clone(), tmp.path().join("Desktop"));
        let mut session = Session::default();

        for url in ["", "   ", "\t\n"] {
            let result = coordinator
                .execute(DownloadRequest::new(url, MediaKind::Video), &mut session)
                .await;
            assert_eq!(result, Err(AppError::Validation));
        }

        assert!(!tmp.path().join("Desktop").exists());
        assert_eq!(backend.probes.load(Ordering::SeqCst), 0);
        assert_eq!(backend.downloads.load(Ordering::SeqCst), 0);
        assert!(session.history.is_empty());

        let message = session.status.message().unwrap();
        assert_eq!(message.text, "Enter video URL.");
        assert_eq!(message.tag, StatusTag::Error);
    }

    #[tokio::test]
    async fn test_probe_failure_leaves_history_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FakeBackend {
            fail_probe: true,
            ..FakeBackend::titled("x")
        };
        let coordinator = coordinator(backend.clone(), tmp.path().to_path_buf());
        let mut session = Session::default();

        let result = coordinator
            .execute(
                DownloadRequest::new("https://example.com/bad", MediaKind::Video),
                &mut session,
            )
            .await;

        assert_eq!(
            result,
            Err(AppError::Extraction("Unsupported URL".to_string()))
        );
        assert!(session.history.is_empty());
        assert_eq!(backend.downloads.load(Ordering::SeqCst), 0);
        assert_eq!(session.status.log().len(), 1);
        assert_eq!(
            session.status.message().unwrap().text,
            "Error: Unsupported URL"
        );
    }

    #[tokio::test]
    async fn test_transfer_failure_leaves_history_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let coordinator = coordinator(FakeBackend::titled("ok"), tmp.path().to_path_buf());
        let mut session = Session::default();
        coordinator
            .execute(
                DownloadRequest::new("https://example.com/ok", MediaKind::Audio),
                &mut session,
            )
            .await
            .unwrap();

        let failing = super::DownloadCoordinator::new(
            FakeBackend {
                fail_download: true,
                ..FakeBackend::titled("Broken")
            },
            StorageLocator::new(tmp.path().to_path_buf(), DEFAULT_FOLDER_NAME),
        );
        let result = failing
            .execute(
                DownloadRequest::new("https://example.com/broken", MediaKind::Video),
                &mut session,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(session.history.len(), 1);
        let log: Vec<&str> = session.status.log().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            log[2..],
            ["Download: Broken", "Download failed: HTTP Error 403: Forbidden"]
        );
        assert_eq!(session.status.message().unwrap().tag, StatusTag::Error);
    }

    #[tokio::test]
    async fn test_directory_failure_aborts_before_probe() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("desktop-is-a-file");
        std::fs::write(&file, b"x").unwrap();

        let backend = FakeBackend::titled("x");
        let coordinator = coordinator(backend.clone(), file);
        let result = coordinator
            .prepare(DownloadRequest::new("https://example.com/v", MediaKind::Video))
            .await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(backend.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_audio_selects_audio_only_format() {
        let tmp = tempfile::tempdir().unwrap();
        let coordinator = coordinator(FakeBackend::titled("Song"), tmp.path().to_path_buf());
        let url = "https://example.com/video1";

        let audio = coordinator
            .prepare(DownloadRequest::new(url, MediaKind::Audio))
            .await
            .unwrap();
        let video = coordinator
            .prepare(DownloadRequest::new(url, MediaKind::Video))
            .await
            .unwrap();

        assert_eq!(audio.options.format, "bestaudio");
        assert_eq!(video.options.format, "best");
        assert!(audio.options.no_playlist);

        let audio_path = coordinator.transfer(audio).await.unwrap().path;
        let video_path = coordinator.transfer(video).await.unwrap().path;
        assert_ne!(audio_path.extension(), video_path.extension());
    }

    #[tokio::test]
    async fn test_duplicate_titles_are_both_recorded() {
        let tmp = tempfile::tempdir().unwrap();
        let coordinator = coordinator(FakeBackend::titled("Same"), tmp.path().to_path_buf());
        let mut session = Session::default();

        for _ in 0..2 {
            coordinator
                .execute(
                    DownloadRequest::new("https://example.com/same", MediaKind::Video),
                    &mut session,
                )
                .await
                .unwrap();
        }

        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history.locate(0), session.history.locate(1));
    }
}
