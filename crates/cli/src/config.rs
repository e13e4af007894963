//! Configuration for ledger-dump.
//!
//! Settings come from an optional TOML file; command-line flags override it.

use crate::args::CliArgs;
use anyhow::{Context, Result};
use ledger_rpc_client::DEFAULT_ENDPOINT;
use ledger_snapshot::{FormatConfig, FormatMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,ledger=info";

/// Complete tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    /// JSON-RPC endpoint of the full-history server
    pub endpoint: String,
    /// Output layout
    pub format: FormatMode,
    /// Directory the `ledger.<seq>` file is created in
    pub output_dir: PathBuf,
    /// Explicit output file, overriding `output_dir`
    pub output: Option<PathBuf>,
    /// Write to a temporary file and rename it into place on success
    pub atomic: bool,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            format: FormatMode::Pretty,
            output_dir: PathBuf::from("."),
            output: None,
            atomic: false,
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DumpConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// Builds the configuration for a run: the file named by `--config` (or
    /// defaults), then command-line overrides.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Apply command-line arguments to override configuration
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.format = format;
        }

        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }

        if let Some(output) = &args.output {
            self.output = Some(output.clone());
        }

        if args.atomic {
            self.atomic = true;
        }
    }

    /// Path the document for ledger `seq` is written to.
    pub fn output_path(&self, seq: u32) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.output_dir.join(format!("ledger.{seq}")))
    }

    /// Structural strings for the configured format.
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig::new(self.format)
    }
}
