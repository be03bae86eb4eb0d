use clap::Parser;
use std::process::ExitCode;

use rust_passgen::cli::{handlers, Args};
use rust_passgen::{logging, Config};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::load();

    match logging::init(&config) {
        Ok(()) => config.report_warnings(),
        Err(e) => {
            eprintln!("⚠️  Logging disabled: {}", e);
            for warning in &config.warnings {
                eprintln!("⚠️  {}", warning);
            }
        }
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match handlers::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\n❌ Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
