mod app;
mod application;
mod config;
mod domain;
mod extractor;
mod ui;
mod utils;

use iced::{window, Size};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::AppConfig;

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("yt_downloader=info")),
        )
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("ignoring invalid configuration: {}", e);
        AppConfig::default()
    });
    info!("using extractor {}", config.yt_dlp.display());

    iced::application(
        move || app::DownloadApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title("Youtube Downloader")
    .theme(app::theme)
    .window(window::Settings {
        size: Size::new(900.0, 780.0),
        ..Default::default()
    })
    .run()
}
