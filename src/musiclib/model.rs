use std::collections::BTreeSet;

/// A single track on an album.
///
/// The track number is kept as text: catalog files allow arbitrary prefixes
/// such as `01` or `2a`, and nothing downstream does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub track_number: String,
    pub title: String,
}

impl Song {
    pub fn new(track_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            track_number: track_number.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    // Ordered so listings and exports come out stable.
    pub artists: BTreeSet<String>,
    pub songs: Vec<Song>,
}

impl Album {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artists: BTreeSet::new(),
            songs: Vec::new(),
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artists.insert(artist.into());
        self
    }

    pub fn with_song(mut self, track_number: impl Into<String>, title: impl Into<String>) -> Self {
        self.songs.push(Song::new(track_number, title));
        self
    }
}
