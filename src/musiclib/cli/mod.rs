//! # CLI Layer
//!
//! This module is **one possible UI client** for musiclib: an interactive prompt.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the logging subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: process arguments (clap) and logging
//! - `repl`: turns one prompt line into a [`repl::ReplCommand`]
//! - `commands`: the session loop and one `handle_*` per command
//! - `print`: output formatting

mod commands;
mod print;
mod repl;
mod setup;

pub use commands::run;
