use iced::{Task, Theme};
use tracing::{info, warn};

use crate::application::{DesktopRoot, DownloadCoordinator, StorageLocator};
use crate::config::AppConfig;
use crate::domain::{AppError, DownloadOutcome, DownloadPlan, DownloadRequest, Session, StatusTag};
use crate::extractor::{ExtractorConfig, YtDlp};
use crate::ui::{DownloadMessage, DownloadView};
use crate::utils::{resolve_reveal_target, reveal_in_file_browser};

pub struct DownloadApp {
    view: DownloadView,
    session: Session,
    coordinator: DownloadCoordinator<YtDlp, DesktopRoot>,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DownloadApp {
    pub fn new(config: AppConfig) -> Self {
        let backend = YtDlp::new(ExtractorConfig {
            binary: config.yt_dlp,
        });
        let storage = StorageLocator::new(DesktopRoot::new(config.base_dir), config.folder_name);

        Self {
            view: DownloadView::default(),
            session: Session::default(),
            coordinator: DownloadCoordinator::new(backend, storage),
        }
    }

    fn start_download(&mut self) -> Task<Message> {
        if self.view.is_downloading {
            return Task::none();
        }

        let request = DownloadRequest::new(self.view.url.clone(), self.view.kind);
        if let Err(e) = request.validated_url() {
            self.session.download_failed(&e);
            return Task::none();
        }

        self.view.is_downloading = true;
        let coordinator = self.coordinator.clone();

        // Step 1: make sure the folder exists and probe the URL
        Task::perform(
            async move { coordinator.prepare(request).await },
            Message::Prepared,
        )
    }

    fn reveal(&mut self, index: usize) -> Task<Message> {
        match resolve_reveal_target(&self.session.history, index) {
            Ok(path) => {
                if let Err(e) = reveal_in_file_browser(&path) {
                    warn!("{}", e);
                    self.session
                        .status
                        .set_message(format!("Error: {}", e), StatusTag::Error);
                }
                Task::none()
            }
            Err(e) => Task::perform(show_error_dialog(e), |_| Message::DialogClosed),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    Prepared(Result<DownloadPlan, AppError>),
    Transferred(Result<DownloadOutcome, AppError>),
    DialogClosed,
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => match ui_msg {
            DownloadMessage::DownloadPressed => return app.start_download(),
            DownloadMessage::HistoryActivated(index) => return app.reveal(index),
            other => app.view.update(other),
        },
        Message::Prepared(Ok(plan)) => {
            app.session.download_started(&plan.info);
            let coordinator = app.coordinator.clone();

            // Step 2: transfer with the same options
            return Task::perform(
                async move { coordinator.transfer(plan).await },
                Message::Transferred,
            );
        }
        Message::Transferred(Ok(outcome)) => {
            app.view.is_downloading = false;
            info!("download finished: {}", outcome.path.display());
            app.session.download_succeeded(&outcome);
        }
        Message::Prepared(Err(e)) | Message::Transferred(Err(e)) => {
            app.view.is_downloading = false;
            warn!("download failed: {}", e);
            app.session.download_failed(&e);
        }
        Message::DialogClosed => {}
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view(&app.session).map(Message::UiMessage)
}

pub fn theme(_app: &DownloadApp) -> Theme {
    Theme::Dark
}

async fn show_error_dialog(error: AppError) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(error.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}
