//! CLI argument definitions for the `numerus` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate and convert Roman numerals
#[derive(Parser, Debug)]
#[command(name = "numerus")]
#[command(version)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "NUMERUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files; logs go to stderr when unset
    #[arg(long, global = true, env = "NUMERUS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the integer value of a numeral
    ToInt {
        /// Numeral text; whitespace and letter case are ignored
        numeral: String,
    },
    /// Print the canonical numeral for an integer in 0..=3999
    ToRoman {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Report whether a numeral is well formed and why not
    Check { numeral: String },
    /// Validate a numeral and add it to a numeral store
    Store {
        /// SQLite numeral store, created when missing
        #[arg(long, env = "NUMERUS_DB")]
        db: PathBuf,
        numeral: String,
    },
    /// List every numeral in a numeral store
    List {
        #[arg(long, env = "NUMERUS_DB")]
        db: PathBuf,
    },
}
