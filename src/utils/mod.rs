use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, History};

/// Looks up a history entry and checks the file is still on disk.
pub fn resolve_reveal_target(history: &History, index: usize) -> Result<PathBuf, AppError> {
    history
        .locate(index)
        .filter(|path| path.exists())
        .map(Path::to_path_buf)
        .ok_or(AppError::PathNotFound)
}

/// Opens the platform file browser with `path` selected where the platform supports it.
pub fn reveal_in_file_browser(path: &Path) -> Result<(), AppError> {
    let mut command = reveal_command(path);
    command
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::Io(format!("Failed to open file browser: {}", e)))
}

#[cfg(target_os = "windows")]
fn reveal_command(path: &Path) -> Command {
    let mut command = Command::new("explorer");
    command.arg("/select,").arg(path);
    command
}

#[cfg(target_os = "macos")]
fn reveal_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg("-R").arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn reveal_command(path: &Path) -> Command {
    // xdg-open has no "select" mode, so open the containing folder
    let mut command = Command::new("xdg-open");
    command.arg(path.parent().unwrap_or(path));
    command
}
