use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use trade_finance::application::dispatcher::{Dispatcher, Invocation, RESULT_OVERRIDE_KEY};
use trade_finance::application::engine::WorkflowEngine;
use trade_finance::domain::ports::RecordStoreBox;
use trade_finance::infrastructure::in_memory::InMemoryRecordStore;
use trade_finance::interfaces::csv::invocation_reader::InvocationReader;
use trade_finance::interfaces::csv::response_writer::{ResponseRow, ResponseWriter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true, env = "TRADE_FINANCE_DB_PATH")]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single invocation and print its payload
    Invoke {
        /// Action name followed by its arguments
        #[arg(num_args = 0..)]
        args: Vec<String>,

        /// Function identifier passed to the dispatcher
        #[arg(long, default_value = "invoke")]
        function: String,

        /// Side-channel payload returned instead of the record on success
        #[arg(long)]
        result: Option<String>,
    },
    /// Run every invocation in a CSV file and print one response row per call
    Replay {
        /// Input invocations CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = open_store(cli.db_path)?;
    let dispatcher = Dispatcher::new(WorkflowEngine::new(store));

    match cli.command {
        Command::Invoke {
            args,
            function,
            result,
        } => {
            let mut invocation = Invocation::invoke(args);
            invocation.function = function;
            if let Some(result) = result {
                invocation = invocation.with_transient(RESULT_OVERRIDE_KEY, result);
            }

            let outcome = dispatcher.handle(&invocation).await.into_diagnostic()?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(outcome.body()).into_diagnostic()?;
            if !outcome.body().is_empty() {
                writeln!(stdout).into_diagnostic()?;
            }
        }
        Command::Replay { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = InvocationReader::new(file);

            let stdout = io::stdout();
            let mut writer = ResponseWriter::new(stdout.lock());
            for row in reader.invocations() {
                match row {
                    Ok((line, invocation)) => {
                        let result = dispatcher.handle(&invocation).await;
                        let action = invocation.args.first().map(String::as_str).unwrap_or("");
                        writer
                            .write(&ResponseRow::new(line, action, &result))
                            .into_diagnostic()?;
                    }
                    Err(e) => {
                        eprintln!("Error reading invocation: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>) -> Result<RecordStoreBox> {
    use trade_finance::infrastructure::rocksdb::RocksDBStore;

    match db_path {
        Some(path) => Ok(Box::new(RocksDBStore::open(path).into_diagnostic()?)),
        None => Ok(Box::new(InMemoryRecordStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>) -> Result<RecordStoreBox> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryRecordStore::new()))
}
