//! Configuration loading and override tests.

use clap::Parser;
use ledger_cli::{CliArgs, DumpConfig, DEFAULT_LOG_FILTER};
use ledger_rpc_client::DEFAULT_ENDPOINT;
use ledger_snapshot::{FormatConfig, FormatMode};
use std::path::PathBuf;
use tempfile::TempDir;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["ledger-dump"];
    argv.extend_from_slice(extra);
    argv.push("32570");
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_match_the_public_cluster() {
    let config = DumpConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.format, FormatMode::Pretty);
    assert_eq!(config.format_config(), FormatConfig::PRETTY);
    assert!(!config.atomic);
    assert_eq!(config.log_level, DEFAULT_LOG_FILTER);
    assert_eq!(config.output_path(32570), PathBuf::from("./ledger.32570"));
}

#[test]
fn toml_file_is_loaded_and_flags_override_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dump.toml");
    std::fs::write(
        &path,
        r#"
endpoint = "http://10.0.0.5:51234"
format = "compact"
output_dir = "/var/ledgers"
"#,
    )
    .unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let config = DumpConfig::load(&args(&["--config", &path_arg])).unwrap();
    assert_eq!(config.endpoint, "http://10.0.0.5:51234");
    assert_eq!(config.format, FormatMode::Compact);
    assert_eq!(
        config.output_path(7),
        PathBuf::from("/var/ledgers").join("ledger.7")
    );

    let config = DumpConfig::load(&args(&[
        "--config",
        &path_arg,
        "--format",
        "pretty",
        "--output",
        "snapshot.json",
        "--atomic",
    ]))
    .unwrap();
    assert_eq!(config.format, FormatMode::Pretty);
    assert_eq!(config.output_path(7), PathBuf::from("snapshot.json"));
    assert!(config.atomic);
    assert_eq!(config.endpoint, "http://10.0.0.5:51234");
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let path_arg = path.to_string_lossy().to_string();
    assert!(DumpConfig::load(&args(&["--config", &path_arg])).is_err());
}

#[test]
fn invalid_format_in_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dump.toml");
    std::fs::write(&path, "format = \"fancy\"\n").unwrap();
    assert!(DumpConfig::load_from_file(&path).is_err());
}

#[test]
fn format_in_file_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dump.toml");
    std::fs::write(&path, "format = \"COMPACT\"\n").unwrap();
    let config = DumpConfig::load_from_file(&path).unwrap();
    assert_eq!(config.format, FormatMode::Compact);
    assert_eq!(config.format_config(), FormatConfig::COMPACT);
}

#[test]
fn config_round_trips_through_toml() {
    let config = DumpConfig {
        atomic: true,
        format: FormatMode::Compact,
        ..DumpConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: DumpConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
