// src/cli/menu.rs
use console::{style, StyledObject};
use inquire::{Confirm, InquireError, Text};
use std::path::{Path, PathBuf};

use crate::models::{GenerationConfig, PasswordRecord, RepairStrategy, StrengthLabel};
use crate::output::format_record;

const BANNER_WIDTH: usize = 50;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn settings_lines(count: usize, config: &GenerationConfig) -> Vec<String> {
    let mut lines = vec![
        format!("  Number of passwords: {}", count),
        format!("  Password length: {}", config.length()),
        format!("  Uppercase letters: {}", yes_no(config.use_uppercase())),
        format!("  Digits: {}", yes_no(config.use_digits())),
        format!("  Symbols: {}", yes_no(config.use_symbols())),
        format!("  Exclude similar: {}", yes_no(config.exclude_similar())),
    ];
    if config.repair() == RepairStrategy::Legacy {
        lines.push("  Repair strategy: legacy".to_string());
    }
    lines
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("     {}", style(title).bold());
    println!("{}", "=".repeat(BANNER_WIDTH));
}

pub fn print_settings(count: usize, config: &GenerationConfig) {
    banner("Password List Generator");
    println!("\nSettings:");
    for line in settings_lines(count, config) {
        println!("{}", line);
    }
}

fn styled_label(label: StrengthLabel) -> StyledObject<StrengthLabel> {
    match label {
        StrengthLabel::Weak => style(label).red(),
        StrengthLabel::Medium => style(label).yellow(),
        StrengthLabel::Strong => style(label).green(),
        StrengthLabel::VeryStrong => style(label).green().bold(),
    }
}

pub fn print_passwords(records: &[PasswordRecord], show_strength: bool) {
    banner("Generated passwords");
    if records.is_empty() {
        println!("❗ No passwords were generated.");
        return;
    }

    for record in records {
        if show_strength {
            println!("{} - [{}]", format_record(record, false), styled_label(record.strength));
        } else {
            println!("{}", format_record(record, false));
        }
    }
}

pub fn print_saved(count: usize, path: &Path) {
    println!("✅ Saved {} passwords to {}", count, path.display());
}

pub fn print_footer() {
    banner("Done!");
}

/// Asks whether to save and where. `None` means the user declined, or there
/// is no terminal to ask on.
pub fn prompt_save_path(default_file: &Path) -> Result<Option<PathBuf>, InquireError> {
    if !console::user_attended() {
        log::debug!("stdout is not a terminal, skipping save prompt");
        return Ok(None);
    }

    let save = match Confirm::new("Save the passwords to a file?")
        .with_default(false)
        .prompt()
    {
        Ok(save) => save,
        Err(InquireError::NotTTY)
        | Err(InquireError::OperationCanceled)
        | Err(InquireError::OperationInterrupted) => return Ok(None),
        Err(e) => return Err(e),
    };

    if !save {
        return Ok(None);
    }

    let default_name = default_file.display().to_string();
    let filename = Text::new("File name:")
        .with_default(&default_name)
        .prompt()?;
    let filename = filename.trim();

    Ok(Some(if filename.is_empty() {
        default_file.to_path_buf()
    } else {
        PathBuf::from(filename)
    }))
}
