use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fltcli::cli::Session;
use fltcli::config::LedgerPaths;
use fltcli::storage::SheetStore;

#[derive(Parser)]
#[command(
    name = "fltcli",
    author = "Bgc and Chen X.",
    version,
    about = "Interactive financial log tool",
    long_about = "fltcli keeps a log of financial transactions in a JSON sheet. \
                  Start it and type [help] at the prompt for the list of commands."
)]
struct Cli {
    /// Sheet file holding the transactions [default: sheet.json]
    #[arg(long, value_name = "PATH")]
    sheet: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(log_level(cli.verbose));

    let paths = match cli.sheet {
        Some(sheet) => LedgerPaths::with_sheet_file(sheet),
        None => LedgerPaths::new(),
    };
    debug!(sheet = %paths.sheet_file().display(), "starting session");

    let store = SheetStore::new(paths.sheet_file());
    let stdin = io::stdin();
    Session::new(store, stdin.lock(), io::stdout(), io::stderr())
        .run()
        .context("Interactive session failed")?;

    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initializes the tracing subscriber; `RUST_LOG` takes precedence when set
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
