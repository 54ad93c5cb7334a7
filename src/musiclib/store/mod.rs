//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalog. The [`CatalogStore`]
//! trait lets commands and the search core work against any backend that can hand out
//! albums keyed by title.
//!
//! ## Ordering
//!
//! Implementations must yield albums in ascending title order. Search results, stats
//! listings and exports all inherit their ordering from the store, so this is part of
//! the contract rather than an implementation detail.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the catalog held by the interactive session. Catalog
//!   files are read into it with `load` and written back out with `export`; the store
//!   itself never touches the filesystem.

use crate::model::Album;

pub mod memory;

/// Abstract interface for the album catalog.
pub trait CatalogStore {
    /// Insert an album, replacing any album with the same title.
    /// Returns the replaced album, if there was one.
    fn put_album(&mut self, album: Album) -> Option<Album>;

    /// Look up an album by its exact title
    fn get_album(&self, title: &str) -> Option<&Album>;

    /// All albums in ascending title order
    fn albums(&self) -> Vec<&Album>;

    /// Number of albums in the catalog
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every album
    fn clear(&mut self);
}
