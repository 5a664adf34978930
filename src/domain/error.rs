use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Enter video URL.")]
    Validation,

    #[error("Failed to create or access folder: {0}")]
    Io(String),

    #[error("{0}")]
    Extraction(String),

    #[error("File path not found.")]
    PathNotFound,
}
