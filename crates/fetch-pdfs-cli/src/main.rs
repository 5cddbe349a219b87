use clap::Parser;
use fetch_pdfs_core::logging;

mod cli;

use crate::cli::Cli;

/// Exit status for errors that abort the run (scan, read, rewrite, config).
const FATAL_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    // Fall back to stderr if the state directory is unusable.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    match cli.execute() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("fetch_pdfs error: {:#}", err);
            std::process::exit(FATAL_EXIT);
        }
    }
}
