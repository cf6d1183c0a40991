//! # Ledger Runtime
//!
//! Reads contract invocations as JSON lines and writes one JSON response per
//! line to stdout. Logs go to stderr.
//!
//! ```text
//! {"function":"CreateAsset","args":["A1","BMW","Sport","a@x.com","h1"]}
//! {"function":"TransferAsset","args":["A1","b@x.com"]}
//! ```
//!
//! Input ends at EOF or Ctrl+C.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use ledger_runtime::{LedgerRuntime, RuntimeConfig};
use ledger_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};

/// Asset ledger execution context
#[derive(Parser, Debug)]
#[command(name = "ledger-runtime")]
#[command(about = "Replay asset ledger invocations against a world state")]
struct Args {
    /// JSON-lines invocation script (stdin when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// World-state backend: memory or rocksdb
    #[arg(long)]
    store: Option<String>,

    /// RocksDB data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Run InitLedger before the first invocation
    #[arg(long)]
    init_ledger: bool,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long)]
    metrics: bool,
}

impl Args {
    fn apply(&self, config: &mut RuntimeConfig) -> Result<()> {
        if let Some(store) = &self.store {
            config.store = store.parse().context("Invalid --store")?;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if self.init_ledger {
            config.init_ledger = true;
        }
        Ok(())
    }
}

type InputLines = tokio::io::Lines<Box<dyn AsyncBufRead + Unpin + Send>>;

async fn open_input(script: Option<&PathBuf>) -> Result<InputLines> {
    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    Ok(reader.lines())
}

async fn emit<W: AsyncWrite + Unpin>(out: &mut W, response: &asset_ledger::InvocationResponse) -> Result<()> {
    let mut line = serde_json::to_string(response).context("Failed to serialize response")?;
    line.push('\n');
    out.write_all(line.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _telemetry = init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let mut config = RuntimeConfig::from_env().context("Invalid environment configuration")?;
    args.apply(&mut config)?;

    let mut runtime = LedgerRuntime::from_config(&config).context("Failed to start execution context")?;
    let mut stdout = tokio::io::stdout();

    if config.init_ledger {
        let response = runtime.init_ledger();
        emit(&mut stdout, &response).await?;
    }

    let mut lines = open_input(args.script.as_ref()).await?;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read invocation")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let response = runtime.execute_line(&line);
                emit(&mut stdout, &response).await?;
            }
            _ = &mut shutdown => {
                warn!("Interrupted, stopping before the next invocation");
                break;
            }
        }
    }

    info!(
        channel = runtime.channel(),
        executed = runtime.executed(),
        audit_entries = runtime.audit_log().len(),
        "Execution context closed"
    );

    if args.metrics {
        eprint!("{}", gather_metrics().context("Failed to gather metrics")?);
    }

    Ok(())
}
