use std::path::PathBuf;

use tracing::debug;

use crate::domain::AppError;

pub const DEFAULT_FOLDER_NAME: &str = "yt-downloader";

/// Source of the directory the output folder is created under.
pub trait DocumentsRoot {
    fn base_dir(&self) -> Option<PathBuf>;
}

/// The user's desktop, unless configuration points somewhere else.
#[derive(Debug, Clone, Default)]
pub struct DesktopRoot {
    override_dir: Option<PathBuf>,
}

impl DesktopRoot {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }
}

impl DocumentsRoot for DesktopRoot {
    fn base_dir(&self) -> Option<PathBuf> {
        self.override_dir.clone().or_else(dirs::desktop_dir)
    }
}

impl DocumentsRoot for PathBuf {
    fn base_dir(&self) -> Option<PathBuf> {
        Some(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct StorageLocator<R> {
    root: R,
    folder_name: String,
}

impl<R: DocumentsRoot> StorageLocator<R> {
    pub fn new(root: R, folder_name: impl Into<String>) -> Self {
        Self {
            root,
            folder_name: folder_name.into(),
        }
    }

    /// Creates the output folder if needed and returns its path.
    pub fn ensure_output_directory(&self) -> Result<PathBuf, AppError> {
        let base = self
            .root
            .base_dir()
            .ok_or_else(|| AppError::Io("could not determine the desktop directory".to_string()))?;

        let folder = base.join(&self.folder_name);
        if !folder.is_dir() {
            debug!("creating output folder {}", folder.display());
            std::fs::create_dir_all(&folder)
                .map_err(|e| AppError::Io(format!("{}: {}", folder.display(), e)))?;
        }

        Ok(std::path::absolute(&folder).unwrap_or(folder))
    }
}
