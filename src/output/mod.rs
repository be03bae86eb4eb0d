// src/output/mod.rs
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::models::PasswordRecord;

pub const HEADER: &str = "Generated passwords:";
pub const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Destination for generated passwords.
pub trait PasswordSink {
    fn write_records(&mut self, records: &[PasswordRecord]) -> Result<()>;
}

/// One listing line, e.g. `  3. s3cr3t! - [Strong]`.
pub fn format_record(record: &PasswordRecord, show_strength: bool) -> String {
    if show_strength {
        format!("{:>3}. {} - [{}]", record.index, record.password, record.strength)
    } else {
        format!("{:>3}. {}", record.index, record.password)
    }
}

pub fn render_text<W: Write>(
    writer: &mut W,
    records: &[PasswordRecord],
    show_strength: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    writeln!(writer, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    for record in records {
        writeln!(writer, "{}", format_record(record, show_strength))?;
    }
    Ok(())
}

/// Renders records to any writer. `label` names the destination in errors.
pub struct WriterSink<W: Write> {
    writer: W,
    label: PathBuf,
    format: OutputFormat,
    show_strength: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, label: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            label: label.into(),
            format: OutputFormat::Text,
            show_strength: true,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_strength(mut self, show_strength: bool) -> Self {
        self.show_strength = show_strength;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.label.clone(),
            source,
        }
    }
}

impl<W: Write> PasswordSink for WriterSink<W> {
    fn write_records(&mut self, records: &[PasswordRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                render_text(&mut self.writer, records, self.show_strength)
                    .map_err(|e| self.io_error(e))?;
            }
            OutputFormat::Json => {
                let mut json = serde_json::to_vec_pretty(records)?;
                json.push(b'\n');
                self.writer.write_all(&json).map_err(|e| self.io_error(e))?;
            }
        }
        self.writer.flush().map_err(|e| self.io_error(e))
    }
}

/// Writes records to a file, replacing whatever was there. Strength labels
/// are always included.
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PasswordSink for FileSink {
    fn write_records(&mut self, records: &[PasswordRecord]) -> Result<()> {
        let io_error = |source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let file = File::create(&self.path).map_err(io_error)?;
        WriterSink::new(BufWriter::new(file), &self.path)
            .with_format(self.format)
            .write_records(records)?;

        log::info!("Saved {} passwords to {}", records.len(), self.path.display());
        Ok(())
    }
}
