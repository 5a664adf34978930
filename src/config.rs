use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_FOLDER_NAME;

const ENV_PREFIX: &str = "YT_DOWNLOADER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Extractor executable, looked up on `PATH` when not absolute
    pub yt_dlp: PathBuf,
    /// Replaces the desktop as the parent of the output folder
    pub base_dir: Option<PathBuf>,
    pub folder_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            yt_dlp: PathBuf::from("yt-dlp"),
            base_dir: None,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
