//! Process setup that has to happen before the first window opens.

use std::backtrace::Backtrace;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;
use directories::BaseDirs;
use tracing::{error, info};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use crate::error::AppError;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Writable directories of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub home: PathBuf,
    pub logs: PathBuf,
    pub screenshots: PathBuf,
}

impl Paths {
    /// Uses `home` when given, the platform's local data directory otherwise.
    pub fn resolve(home: Option<&Path>) -> Self {
        let home = home.map(Path::to_path_buf).unwrap_or_else(|| {
            BaseDirs::new()
                .map(|dirs| dirs.data_local_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_NAME)
        });
        Self {
            logs: home.join("logs"),
            screenshots: home.join("screenshots"),
            home,
        }
    }

    /// Log file of the run started at `stamp`.
    pub fn log_file(&self, stamp: &str) -> PathBuf {
        self.logs.join(log_file_name(stamp))
    }
}

fn log_file_name(stamp: &str) -> String {
    format!("{}_{}.log", APP_NAME, stamp)
}

/// Start time of this run, used to name its log file.
pub fn run_stamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// `<name> v<version> compiled for <os>/<arch>`
pub fn program_description() -> String {
    format!(
        "{} v{} compiled for {}/{}",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Creates every writable directory, the home directory first.
///
/// The logger is not up yet, so nothing here may log.
pub fn init_directories(paths: &Paths) -> Result<(), AppError> {
    for dir in [&paths.home, &paths.logs, &paths.screenshots] {
        fs::create_dir_all(dir).map_err(|source| AppError::CreateDir { path: dir.clone(), source })?;
    }
    Ok(())
}

/// Opens the log of the run started at `stamp`. Logs of earlier runs are
/// left alone; a run reusing a stamp appends.
pub fn open_log_writer(paths: &Paths, stamp: &str) -> Result<(NonBlocking, WorkerGuard), AppError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_name(stamp))
        .build(&paths.logs)
        .map_err(|e| AppError::LogFile { path: paths.log_file(stamp), reason: e.to_string() })?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Logs to stderr and to this run's log file. `RUST_LOG` overrides
/// `default_level`.
///
/// The returned guard flushes the file on drop and must outlive the run.
pub fn init_logging(paths: &Paths, default_level: &str) -> Result<WorkerGuard, AppError> {
    let (file_writer, guard) = open_log_writer(paths, &run_stamp())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))?;
    Ok(guard)
}

/// Set once the user interrupts the program from the terminal.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Turns Ctrl-C into a shutdown request so the frame loop can end cleanly.
pub fn install_signal_handler(shutdown: &Shutdown) -> Result<(), ctrlc::Error> {
    let shutdown = shutdown.clone();
    ctrlc::set_handler(move || {
        info!("Interrupted, shutting down");
        shutdown.request();
    })
}

/// Logs panics with a backtrace and tells the user the program crashed.
pub fn install_crash_handler() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::force_capture();
        error!("{} crashed: {}\nBacktrace:\n{}", APP_NAME, info, backtrace);
        eprintln!("{} crashed. Please restart the application!", APP_NAME);
    }));
}
