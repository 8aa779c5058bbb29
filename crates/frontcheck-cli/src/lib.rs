//! # frontcheck-cli
//!
//! Command-line front end for frontcheck.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: optional TOML config file
//! - [`runner`]: checking files, printing status lines, exit codes
//! - [`indexer`]: regenerating the README documentation section
//! - [`logging`]: tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod indexer;
pub mod logging;
pub mod runner;

pub use cli::{Args, IndexArgs};
pub use config::CheckConfig;
pub use error::{Error, Result};
pub use indexer::{run_index, INDEX_USAGE};
pub use runner::{exit_code, run, Options, USAGE};
