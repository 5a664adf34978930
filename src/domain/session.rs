use crate::domain::{
    AppError, DownloadOutcome, History, MediaInfo, StatusReporter, StatusTag,
};

/// Everything the window shows that outlives a single download.
#[derive(Debug, Default)]
pub struct Session {
    pub history: History,
    pub status: StatusReporter,
}

impl Session {
    pub fn download_started(&mut self, info: &MediaInfo) {
        self.status
            .log_line(format!("Download: {}", info.title), StatusTag::Info);
    }

    pub fn download_succeeded(&mut self, outcome: &DownloadOutcome) {
        self.history.record(outcome.path.clone());
        self.status
            .log_line(format!("Downloaded: {}", outcome.title), StatusTag::Success);
        self.status
            .set_message(format!("Downloaded: {}", outcome.title), StatusTag::Success);
    }

    pub fn download_failed(&mut self, error: &AppError) {
        match error {
            AppError::Validation => {
                self.status.set_message(error.to_string(), StatusTag::Error);
            }
            _ => {
                self.status
                    .log_line(format!("Download failed: {}", error), StatusTag::Error);
                self.status
                    .set_message(format!("Error: {}", error), StatusTag::Error);
            }
        }
    }
}
