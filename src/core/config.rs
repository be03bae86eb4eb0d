// src/core/config.rs
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_count: usize,
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,

    // Output
    pub default_output_file: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Problems found while loading. They are held until the logger exists,
    /// then emitted by [`Config::report_warnings`].
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_count: 10,
            default_password_length: 12,
            default_password_exclude_similar: false,

            // Output
            default_output_file: PathBuf::from("passwords.txt"),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from `.env` (if present) and environment variables
    pub fn load() -> Self {
        let mut env_file_warning = None;
        if Path::new(".env").exists() {
            if let Err(e) = dotenvy::dotenv() {
                env_file_warning = Some(format!("Failed to read .env file: {}", e));
            }
        }

        let mut config = Self::from_lookup(|key| env::var(key).ok());
        if let Some(warning) = env_file_warning {
            config.warnings.insert(0, warning);
        }
        config
    }

    /// Logs every warning collected while loading. Call once logging is up.
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; unparseable values are ignored and recorded in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(count) = parse_var(&lookup, "DEFAULT_PASSWORD_COUNT", &mut warnings) {
            config.default_password_count = count;
        }

        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(exclude) = parse_var(&lookup, "DEFAULT_PASSWORD_EXCLUDE_SIMILAR", &mut warnings) {
            config.default_password_exclude_similar = exclude;
        }

        // Output
        if let Some(file) = lookup("DEFAULT_OUTPUT_FILE") {
            if !file.trim().is_empty() {
                config.default_output_file = PathBuf::from(file.trim());
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file.trim()));
            }
        }

        config.warnings = warnings;
        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key));
            None
        }
    }
}
