//! Error types

use thiserror::Error;

/// Frame acquisition failure. The game loop treats any of these as terminal.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("camera closed")]
    Closed,
    #[error("capture failed: {0}")]
    CaptureFailed(String),
}

/// Everything that can abort the program
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
