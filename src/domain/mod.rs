pub mod error;
pub mod history;
pub mod model;
pub mod session;
pub mod status;

pub use error::AppError;
pub use history::History;
pub use model::{DownloadOptions, DownloadOutcome, DownloadPlan, DownloadRequest, MediaInfo, MediaKind};
pub use session::Session;
pub use status::{StatusReporter, StatusTag};
