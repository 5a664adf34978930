pub mod download_coordinator;
pub mod storage;

pub use download_coordinator::DownloadCoordinator;
pub use storage::{DesktopRoot, StorageLocator, DEFAULT_FOLDER_NAME};
