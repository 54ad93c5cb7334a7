//! # Musiclib Architecture
//!
//! Musiclib keeps a catalog of albums, their artists and their songs in memory, reads and
//! writes it as plain text, and answers whole-word boolean searches over it. The
//! interactive prompt is one client of the library; nothing below the CLI knows about
//! the terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads the prompt, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog store and the configuration             │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, clear, stats, export, search, help                 │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Search (search/) · Format (format.rs) · Storage (store/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns `Result<CmdResult>`
//! and never writes to stdout or stderr. Diagnostics go through `tracing`; whether and
//! where they are shown is decided by the binary.
//!
//! ## Testing Strategy
//!
//! 1. **Search, format, store**: unit tests beside the code.
//! 2. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`, with
//!    `tempfile` for anything that touches files.
//! 3. **CLI**: integration tests in `tests/` drive the binary over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`search`]: Query parsing, whole-word matching and boolean evaluation
//! - [`format`]: Reading and writing catalog text files
//! - [`store`]: Catalog storage abstraction
//! - [`model`]: Core data types (`Album`, `Song`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod search;
pub mod store;
