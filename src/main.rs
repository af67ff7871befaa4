use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use transaction_ledger::error::LedgerError;
use transaction_ledger::io::{load_csv, load_drafts, write_records};
use transaction_ledger::ledger::{IdGenerator, Ledger, SequentialIds};
use transaction_ledger::report::{write_ledger, write_report};
use transaction_ledger::sample::sample_transactions;
use transaction_ledger::transaction::TransactionRecord;

#[derive(Parser)]
struct Args {
    /// One of error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer the standard questions about a set of transactions.
    Report {
        /// Transactions CSV; the built-in sample is used when omitted.
        file: Option<PathBuf>,
    },
    /// Write transactions back out as CSV.
    Export { file: Option<PathBuf> },
    /// Build a ledger from `description,amount,category` rows.
    Ledger {
        file: PathBuf,
        /// Entry ids to remove after loading.
        #[arg(long)]
        remove: Vec<String>,
        /// Print the full description of this entry after the table.
        #[arg(long)]
        show: Option<String>,
    },
}

fn main() {
    let args = Args::parse();
    setup_logging(args.log_level);

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the command output, so logs go to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn run(command: Command) -> Result<(), LedgerError> {
    let stdout = io::stdout();

    match command {
        Command::Report { file } => {
            let records = load_records(file.as_deref())?;
            write_report(stdout.lock(), &records)
        }
        Command::Export { file } => {
            let records = load_records(file.as_deref())?;
            write_records(stdout.lock(), &records)
        }
        Command::Ledger { file, remove, show } => {
            let ledger = build_ledger(&file, &remove)?;
            write_ledger(stdout.lock(), &ledger, show.as_deref())
        }
    }
}

fn load_records(file: Option<&Path>) -> Result<Vec<TransactionRecord>, LedgerError> {
    match file {
        Some(path) => {
            tracing::info!("reading transactions from {}", path.display());
            load_csv(BufReader::new(File::open(path)?))
        }
        None => {
            tracing::info!("no input file given, using the sample transactions");
            Ok(sample_transactions())
        }
    }
}

fn build_ledger(file: &Path, remove: &[String]) -> Result<Ledger, LedgerError> {
    let drafts = load_drafts(BufReader::new(File::open(file)?))?;
    let date = today();
    let mut ids = SequentialIds::default();

    let mut ledger = Ledger::new();
    for draft in drafts {
        match draft.validate(ids.generate_id(), date) {
            Ok(entry) => ledger = ledger.add(entry),
            Err(e) => tracing::warn!("skipping ledger row: {e}"),
        }
    }

    for id in remove {
        ledger = ledger.remove(id);
    }

    Ok(ledger)
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .inspect_err(|e| tracing::debug!("local offset unavailable, using UTC: {e}"))
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
