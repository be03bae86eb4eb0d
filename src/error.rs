// src/error.rs
use std::io;
use thiserror::Error;

use crate::generators::GeneratorError;
use crate::output::PersistenceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] GeneratorError),

    #[error("Could not save passwords: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Configuration mistakes exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidConfig(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_separate_config_from_io() {
        let config: AppError = GeneratorError::InvalidLength { length: 2, min: 4 }.into();
        assert_eq!(config.exit_code(), 2);
        assert_eq!(
            config.to_string(),
            "Invalid configuration: Password length must be at least 4 characters (got 2)"
        );

        let persistence: AppError = PersistenceError::Io {
            path: PathBuf::from("x.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(persistence.exit_code(), 1);
        assert!(persistence.to_string().contains("x.txt"));
    }
}
