//! frontcheck
//!
//! Checks that the YAML frontmatter of each given file parses.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use frontcheck_cli::runner::{EXIT_FAILURE, EXIT_TOOL_ERROR};
use frontcheck_cli::{exit_code, logging, run, Args, CheckConfig, Options, USAGE};

fn main() -> ExitCode {
    let args = Args::parse();

    if args.files.is_empty() {
        println!("{USAGE}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let config = match CheckConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("frontcheck: {e}");
            return ExitCode::from(EXIT_TOOL_ERROR);
        }
    };
    let options = Options::resolve(&args, &config);
    logging::init(&options.log_level);

    tracing::debug!(files = args.files.len(), ?options, "Starting frontmatter check");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args.files, &options, &mut out) {
        Ok(report) => ExitCode::from(exit_code(&report)),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(EXIT_TOOL_ERROR)
        }
    }
}
