//! frontcheck-index
//!
//! Rebuilds the `## Documentation` section of a README from article files.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use frontcheck_cli::config::DEFAULT_LOG_LEVEL;
use frontcheck_cli::runner::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_TOOL_ERROR};
use frontcheck_cli::{logging, run_index, IndexArgs, INDEX_USAGE};

fn main() -> ExitCode {
    let args = IndexArgs::parse();

    if args.files.is_empty() {
        println!("{INDEX_USAGE}");
        return ExitCode::from(EXIT_FAILURE);
    }

    logging::init(if args.verbose { "debug" } else { DEFAULT_LOG_LEVEL });
    tracing::debug!(files = args.files.len(), readme = %args.readme.display(), "Starting index");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_index(&args.files, &args.readme, args.print, &mut out) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("frontcheck-index: {e}");
            ExitCode::from(EXIT_TOOL_ERROR)
        }
    }
}
