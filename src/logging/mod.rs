// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Builds the logger for the configured level. `RUST_LOG` is applied on top.
/// Output is appended to `config.log_file` if set, otherwise it goes to stderr.
pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialised at {}", config.log_level);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    let log_file_error = |source| LoggingError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(log_file_error)?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_file_error)
}
