use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a failed bootstrap (directories, log).
pub const EXIT_SETUP: i32 = 1;
/// Exit code when the window or the game data could not be initialized.
pub const EXIT_INIT: i32 = 2;
/// Exit code after a panic.
pub const EXIT_CRASH: i32 = 42;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("directory {path} could not be created: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log file {path} could not be opened: {reason}")]
    LogFile { path: PathBuf, reason: String },

    #[error("logger could not be installed: {0}")]
    Logger(String),

    #[error("window could not be created: {0}")]
    Window(String),

    #[error("required game data failed to load: {0}")]
    GameData(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CreateDir { .. } | AppError::LogFile { .. } | AppError::Logger(_) => EXIT_SETUP,
            AppError::Window(_) | AppError::GameData(_) => EXIT_INIT,
        }
    }
}
