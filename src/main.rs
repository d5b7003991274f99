//! confluence-alfred: Confluence search for Alfred
//!
//! Usage:
//!   confluence-alfred --token <TOKEN> --url <URL> --username <USER> --query <QUERY>
//!
//! Prints script filter JSON on stdout. Any failure prints one line to stderr
//! and exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use confluence_alfred::cli::{self, Args};
use confluence_alfred::error::AppError;
use confluence_alfred::{alfred, search_pages};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage() {
                eprintln!("{}", cli::usage());
            }
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let input = args.resolve()?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;
    let output = rt.block_on(search_pages(&input))?;

    let json = alfred::to_json(&output)?;
    tracing::debug!(items = output.items.len(), "Writing script filter output");
    alfred::emit(std::io::stdout().lock(), &json)?;
    Ok(())
}

/// Logs go to stderr; stdout is reserved for the JSON document.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
