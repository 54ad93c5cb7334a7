use super::CatalogStore;
use crate::model::Album;
use std::collections::BTreeMap;

/// Catalog kept entirely in memory, keyed by album title.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    albums: BTreeMap<String, Album>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn put_album(&mut self, album: Album) -> Option<Album> {
        self.albums.insert(album.title.clone(), album)
    }

    fn get_album(&self, title: &str) -> Option<&Album> {
        self.albums.get(title)
    }

    fn albums(&self) -> Vec<&Album> {
        self.albums.values().collect()
    }

    fn len(&self) -> usize {
        self.albums.len()
    }

    fn clear(&mut self) {
        self.albums.clear();
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Album with the given artists and one song per title, numbered from 1
        pub fn with_simple_album(mut self, title: &str, artists: &[&str], songs: &[&str]) -> Self {
            let mut album = Album::new(title);
            for artist in artists {
                album = album.with_artist(*artist);
            }
            for (i, song) in songs.iter().enumerate() {
                album = album.with_song(format!("{:02}", i + 1), *song);
            }
            self.store.put_album(album);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn albums_come_back_in_title_order() {
        let mut store = InMemoryStore::new();
        store.put_album(Album::new("Zebra"));
        store.put_album(Album::new("Abbey Road"));
        store.put_album(Album::new("Metallica"));

        let titles: Vec<_> = store.albums().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Abbey Road", "Metallica", "Zebra"]);
    }

    #[test]
    fn put_replaces_same_title() {
        let mut store = InMemoryStore::new();
        store.put_album(Album::new("Thriller").with_artist("Michael Jackson"));
        let replaced = store.put_album(Album::new("Thriller").with_artist("Someone Else"));

        assert!(replaced.is_some());
        assert_eq!(store.len(), 1);
        let album = store.get_album("Thriller").unwrap();
        assert!(album.artists.contains("Someone Else"));
        assert!(!album.artists.contains("Michael Jackson"));
    }

    #[test]
    fn clear_empties_the_catalog() {
        let mut store = InMemoryStore::new();
        store.put_album(Album::new("One"));
        store.put_album(Album::new("Two"));
        store.clear();

        assert!(store.is_empty());
        assert!(store.get_album("One").is_none());
    }
}
