use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub total_records: usize,
    /// Distinct artist names across all albums, compared exactly as stored
    pub unique_artists: usize,
    pub total_songs: usize,
}

/// Count records, distinct artists and songs. With `detailed`, the albums themselves
/// are returned too, in title order.
pub fn run<S: CatalogStore>(store: &S, detailed: bool) -> Result<CmdResult> {
    let albums = store.albums();

    let artists: BTreeSet<&str> = albums
        .iter()
        .flat_map(|album| album.artists.iter().map(String::as_str))
        .collect();

    let stats = LibraryStats {
        total_records: albums.len(),
        unique_artists: artists.len(),
        total_songs: albums.iter().map(|album| album.songs.len()).sum(),
    };

    let result = CmdResult::default().with_stats(stats);
    if detailed {
        let listed = albums.into_iter().cloned().collect();
        return Ok(result.with_listed_albums(listed));
    }
    Ok(result)
}
