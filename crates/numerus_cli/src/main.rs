//! `numerus` command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto `numerus_core` conversion and storage APIs.
//! - Print results on stdout and failures on stderr with exit code 1.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use numerus_core::db::open_db;
use numerus_core::{
    default_log_level, init_logging, LoggingConfig, NumeralRepository, RomanNumeral,
    SqliteNumeralRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(&LoggingConfig::new(level, cli.log_dir.as_deref())?)?;

    match cli.command {
        Commands::ToInt { numeral } => {
            println!("{}", RomanNumeral::parse(&numeral)?.value());
        }
        Commands::ToRoman { value } => {
            println!("{}", RomanNumeral::from_value(value)?);
        }
        Commands::Check { numeral } => {
            let parsed = RomanNumeral::parse(&numeral)?;
            println!("{parsed} is valid ({})", parsed.value());
        }
        Commands::Store { db, numeral } => {
            let numeral = RomanNumeral::parse(&numeral)?;
            let conn = open_db(&db)?;
            let repo = SqliteNumeralRepository::new(&conn);
            let id = repo.create_numeral(&numeral)?;
            println!("{id} {numeral} {}", numeral.value());
        }
        Commands::List { db } => {
            let conn = open_db(&db)?;
            let repo = SqliteNumeralRepository::new(&conn);
            for record in repo.list_numerals()? {
                println!("{} {} {}", record.id, record.numeral, record.numeral.value());
            }
        }
    }
    Ok(())
}
