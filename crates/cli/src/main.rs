use anyhow::{Context, Result};
use clap::Parser;
use ledger_cli::{CliArgs, ConsoleProgress, DumpConfig, OutputFile};
use ledger_rpc_client::{LedgerApi, LedgerFault, RpcClient};
use ledger_snapshot::{fetch_snapshot, SnapshotError, SnapshotSummary};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match DumpConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    let seq = args.sequence();
    println!("Seq = {seq}");

    match run(&config, seq).await {
        Ok((summary, path)) => {
            info!(
                target: "ledger",
                seq,
                entries = summary.state_entries,
                path = %path.display(),
                "snapshot complete"
            );
            println!("File \"{}\" written", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &DumpConfig, seq: u32) -> Result<(SnapshotSummary, PathBuf)> {
    let client = RpcClient::http(&config.endpoint)?;
    let api = LedgerApi::new(Arc::new(client));

    let path = config.output_path(seq);
    let output = OutputFile::create(&path, config.atomic)
        .with_context(|| format!("cannot create output file {}", path.display()))?;

    let mut console = ConsoleProgress::new(io::stdout());
    let (summary, output) =
        fetch_snapshot(&api, seq, output, config.format_config(), &mut console).await?;

    let path = output
        .commit()
        .with_context(|| format!("cannot finish output file {}", path.display()))?;
    Ok((summary, path))
}

fn report_failure(err: &anyhow::Error) {
    error!(target: "ledger", error = %err, "snapshot failed");
    eprintln!("Query failed: {err:#}");

    let payload = err
        .downcast_ref::<SnapshotError>()
        .and_then(SnapshotError::fault)
        .or_else(|| err.downcast_ref::<LedgerFault>())
        .and_then(LedgerFault::payload);
    if let Some(payload) = payload {
        let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        eprintln!("{text}");
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
