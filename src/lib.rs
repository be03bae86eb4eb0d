// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod logging;
pub mod models;
pub mod output;

pub use crate::core::Config;
pub use crate::error::AppError;
pub use crate::generators::{calculate_strength, GeneratorError, PasswordGenerator};
pub use crate::models::{GenerationConfig, PasswordRecord, RepairStrategy, StrengthLabel};
pub use crate::output::{FileSink, PasswordSink, PersistenceError};
