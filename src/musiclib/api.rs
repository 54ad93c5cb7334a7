//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: one entry point for every
//! catalog operation, whatever UI sits on top.
//!
//! The facade owns the catalog store and the loaded configuration, and passes both
//! explicitly into each command. There is no global catalog; whoever owns the
//! `MusicLibraryApi` controls the catalog's lifetime.
//!
//! The API explicitly avoids:
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O to the terminal**: no stdout or stderr
//! - **Presentation concerns**: returns data structures, not strings
//!
//! `MusicLibraryApi<S: CatalogStore>` is generic over the storage backend so tests can
//! hand in a pre-populated store.

use crate::commands;
use crate::config::LibraryConfig;
use crate::error::Result;
use crate::store::CatalogStore;

/// The main API facade for music library operations.
pub struct MusicLibraryApi<S: CatalogStore> {
    store: S,
    config: LibraryConfig,
}

impl<S: CatalogStore> MusicLibraryApi<S> {
    pub fn new(store: S, config: LibraryConfig) -> Self {
        Self { store, config }
    }

    pub fn load(&mut self, filename: &str) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, filename)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn stats(&self, detailed: bool) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, detailed)
    }

    pub fn export(&self, filename: &str) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, filename, &self.config.default_export_file)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, self.config.exclusion_policy)
    }

    pub fn help(&self) -> Result<commands::CmdResult> {
        commands::help::run(self.config.help_file.as_deref())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, LibraryStats, MessageLevel};
