use super::query::Field;
use crate::model::Album;

/// Whole-word, case-insensitive containment.
///
/// `term` must already be lowercased (see [`super::Term`]). It matches when it equals
/// one whitespace-delimited word of `text`; substrings never match, and neither does
/// an empty term.
pub fn contains_word(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    // Same folding as Term::parse; per-char lowercasing misses final sigma.
    text.split_whitespace()
        .any(|word| word.to_lowercase() == term)
}

/// Does the selected field of `album` contain `term` as a word?
///
/// Artist and song fields match when any one artist or song title does.
pub fn field_contains(album: &Album, field: Field, term: &str) -> bool {
    match field {
        Field::Album => contains_word(&album.title, term),
        Field::Artist => album
            .artists
            .iter()
            .any(|artist| contains_word(artist, term)),
        Field::Song => album
            .songs
            .iter()
            .any(|song| contains_word(&song.title, term)),
    }
}
