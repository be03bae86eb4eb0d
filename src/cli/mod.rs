// src/cli/mod.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub mod handlers;
pub mod menu;

use crate::core::Config;
use crate::generators::GeneratorError;
use crate::models::{GenerationConfig, RepairStrategy};
use crate::output::OutputFormat;

const EXAMPLES: &str = "\
Examples:
  rust_passgen -c 5 -l 16
  rust_passgen -c 10 -l 12 --no-symbols
  rust_passgen -c 8 -l 14 --exclude-similar -o passwords.txt";

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate lists of random passwords", long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Number of passwords to generate [default: 10]
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Length of each password [default: 12]
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Do not use uppercase letters
    #[arg(long = "no-uppercase", action = ArgAction::SetFalse)]
    pub uppercase: bool,

    /// Do not use digits
    #[arg(long = "no-digits", action = ArgAction::SetFalse)]
    pub digits: bool,

    /// Do not use symbols
    #[arg(long = "no-symbols", action = ArgAction::SetFalse)]
    pub symbols: bool,

    /// Exclude similar-looking characters (il1Lo0O)
    #[arg(short, long, overrides_with = "no_exclude_similar")]
    pub exclude_similar: bool,

    /// Keep similar-looking characters even if the config excludes them
    #[arg(long, overrides_with = "exclude_similar")]
    pub no_exclude_similar: bool,

    /// File to save the passwords to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show the strength of each password
    #[arg(short, long)]
    pub show_strength: bool,

    /// Format of the saved file
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the passwords as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Patch missing character classes the old way (may clobber earlier fixes)
    #[arg(long)]
    pub legacy_repair: bool,

    /// Never ask whether to save the passwords
    #[arg(long)]
    pub no_prompt: bool,
}

impl Args {
    pub fn count(&self, config: &Config) -> usize {
        self.count.unwrap_or(config.default_password_count)
    }

    /// The last of `--exclude-similar` / `--no-exclude-similar` wins; without
    /// either the configured default applies.
    pub fn exclude_similar(&self, config: &Config) -> bool {
        if self.exclude_similar {
            true
        } else if self.no_exclude_similar {
            false
        } else {
            config.default_password_exclude_similar
        }
    }

    /// Command-line flags on top of the configured defaults.
    pub fn generation_config(&self, config: &Config) -> Result<GenerationConfig, GeneratorError> {
        let repair = if self.legacy_repair {
            RepairStrategy::Legacy
        } else {
            RepairStrategy::Disjoint
        };

        Ok(GenerationConfig::new(self.length.unwrap_or(config.default_password_length))?
            .with_uppercase(self.uppercase)
            .with_digits(self.digits)
            .with_symbols(self.symbols)
            .with_exclude_similar(self.exclude_similar(config))
            .with_repair(repair))
    }
}
