// src/cli/handlers.rs
use std::io;
use std::path::Path;

use super::{menu, Args};
use crate::core::Config;
use crate::error::Result;
use crate::generators::PasswordGenerator;
use crate::models::PasswordRecord;
use crate::output::{FileSink, OutputFormat, PasswordSink, WriterSink};

/// Generates, shows and optionally saves one batch as described by `args`.
pub fn run(args: &Args, config: &Config) -> Result<()> {
    let generation = args.generation_config(config)?;
    let count = args.count(config);

    if !args.json {
        menu::print_settings(count, &generation);
    }

    let mut generator = PasswordGenerator::new();
    let outcome = generator.generate_many(count, &generation);
    log::info!(
        "Generated {} of {} passwords ({} failed)",
        outcome.passwords.len(),
        count,
        outcome.failures.len()
    );

    // With one config every item fails the same way; surface it once.
    if outcome.passwords.is_empty() {
        if let Some(err) = outcome.first_error() {
            return Err(err.clone().into());
        }
    }

    let records = PasswordRecord::from_passwords(&outcome.into_passwords());

    if args.json {
        WriterSink::new(io::stdout().lock(), "<stdout>")
            .with_format(OutputFormat::Json)
            .write_records(&records)?;
    } else {
        menu::print_passwords(&records, args.show_strength);
    }

    if let Some(path) = &args.output {
        save(path, args.format, &records)?;
    } else if !records.is_empty() && !args.no_prompt && !args.json {
        if let Some(path) = menu::prompt_save_path(&config.default_output_file)? {
            save(&path, args.format, &records)?;
        }
    }

    if !args.json {
        menu::print_footer();
    }

    Ok(())
}

fn save(path: &Path, format: OutputFormat, records: &[PasswordRecord]) -> Result<()> {
    FileSink::new(path).with_format(format).write_records(records)?;
    menu::print_saved(records.len(), path);
    Ok(())
}
