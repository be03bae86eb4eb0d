// src/generators/mod.rs
use thiserror::Error;

mod alphabet;
mod password;
mod strength;

pub use alphabet::Alphabet;
pub use password::{BatchFailure, BatchOutcome, PasswordGenerator};
pub use strength::{calculate_strength, strength_score};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {min} characters (got {length})")]
    InvalidLength { length: usize, min: usize },

    #[error("No characters available to build a password from")]
    EmptyAlphabet,

    #[error("Password length {length} cannot hold {required} required character classes")]
    InsufficientLength { length: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
