pub mod client;
pub mod models;

pub use client::{MediaBackend, YtDlp};
pub use models::ExtractorConfig;
