//! ledger-dump library
//!
//! Argument parsing, configuration, console narration and output file
//! handling for the `ledger-dump` binary.

pub mod args;
pub mod config;
pub mod console_progress;
pub mod output;

pub use args::{parse_sequence, CliArgs};
pub use config::{DumpConfig, DEFAULT_LOG_FILTER};
pub use console_progress::ConsoleProgress;
pub use output::OutputFile;
