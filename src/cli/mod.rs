//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! The roster lives in memory for the duration of one invocation, so the
//! CLI is script-oriented: `shiftman run` executes a line-oriented
//! command script (from a file or stdin) against a fresh
//! [`RosterService`](crate::service::RosterService), and `shiftman demo`
//! runs a built-in walkthrough.
//!
//! All commands support the global `--format text|json` flag; `--verbose`
//! enables debug output on stderr.

mod app;
mod output;
mod script;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
