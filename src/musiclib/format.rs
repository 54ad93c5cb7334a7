//! # Catalog Text Format
//!
//! Catalog files are plain text, one block per album:
//!
//! ```text
//! Abbey Road            <- album title, opens the block
//! The Beatles           <- one or more artist lines
//! 01 Come Together      <- song lines: <track><space><title>, first char is a digit
//! 02 Something
//! Abbey Road            <- the title again, closes the block
//! ```
//!
//! Blank lines are ignored everywhere. A block that is never closed swallows the rest
//! of the file and is dropped: only closed blocks produce albums.
//!
//! [`write_catalog`] emits the same shape, so a written catalog reads back unchanged.

use crate::error::Result;
use crate::model::{Album, Song};
use std::io::{BufRead, Write};

/// Read every closed album block from `reader`, in file order.
///
/// Albums are returned as parsed; if a title appears twice, both blocks are returned
/// and it is up to the caller (normally the store) to let the later one win.
pub fn parse_catalog<R: BufRead>(mut reader: R) -> Result<Vec<Album>> {
    let mut albums = Vec::new();
    let mut open: Option<Album> = None;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        if line.is_empty() {
            continue;
        }

        match open.take() {
            None => open = Some(Album::new(line)),
            Some(album) if line == album.title => albums.push(album),
            Some(mut album) => {
                if starts_with_digit(&line) {
                    album.songs.push(parse_song(&line));
                } else {
                    album.artists.insert(line);
                }
                open = Some(album);
            }
        }
    }

    if let Some(album) = open {
        tracing::warn!(
            "Album block '{}' is never closed; dropping {} artist(s) and {} song(s)",
            album.title,
            album.artists.len(),
            album.songs.len()
        );
    }

    Ok(albums)
}

/// Write albums in the order given, one closed block each.
pub fn write_catalog<'a, W, I>(mut writer: W, albums: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Album>,
{
    for album in albums {
        writeln!(writer, "{}", album.title)?;
        for artist in &album.artists {
            writeln!(writer, "{}", artist)?;
        }
        for song in &album.songs {
            writeln!(writer, "{} {}", song.track_number, song.title)?;
        }
        writeln!(writer, "{}", album.title)?;
    }
    writer.flush()?;
    Ok(())
}

// Strip the line ending; bytes that are not UTF-8 become U+FFFD instead of
// failing the whole file.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(_) => {
            tracing::warn!("Catalog line is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

fn starts_with_digit(line: &str) -> bool {
    line.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

// A song line without a space is all track number.
fn parse_song(line: &str) -> Song {
    match line.split_once(' ') {
        Some((track, title)) => Song::new(track, title),
        None => Song::new(line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Abbey Road
The Beatles
01 Come Together
02 Something
Abbey Road

Rumours
Fleetwood Mac
Stevie Nicks
1 Second Hand News
2 Dreams
Rumours
";

    fn parse(text: &str) -> Vec<Album> {
        parse_catalog(Cursor::new(text)).unwrap()
    }

    #[test]
    fn parses_blocks_in_file_order() {
        let albums = parse(SAMPLE);
        assert_eq!(albums.len(), 2);

        assert_eq!(albums[0].title, "Abbey Road");
        assert!(albums[0].artists.contains("The Beatles"));
        assert_eq!(albums[0].songs[0], Song::new("01", "Come Together"));
        assert_eq!(albums[0].songs[1], Song::new("02", "Something"));

        assert_eq!(albums[1].title, "Rumours");
        assert_eq!(albums[1].artists.len(), 2);
        assert_eq!(albums[1].songs.len(), 2);
    }

    #[test]
    fn song_title_keeps_inner_spaces() {
        let albums = parse("X\nA\n07 Hey  There Delilah\nX\n");
        assert_eq!(albums[0].songs[0].track_number, "07");
        assert_eq!(albums[0].songs[0].title, "Hey  There Delilah");
    }

    #[test]
    fn track_number_only_line_has_empty_title() {
        let albums = parse("X\nA\n12\nX\n");
        assert_eq!(albums[0].songs[0], Song::new("12", ""));
    }

    #[test]
    fn blank_lines_are_ignored_inside_blocks() {
        let albums = parse("X\n\nA\n\n1 Song\n\nX\n");
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].artists.len(), 1);
        assert_eq!(albums[0].songs.len(), 1);
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let albums = parse("Closed\nA\nClosed\nOpen\nB\n1 Lost\nNever Closed\n");
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Closed");
    }

    #[test]
    fn duplicate_artist_lines_collapse() {
        let albums = parse("X\nA\nA\nX\n");
        assert_eq!(albums[0].artists.len(), 1);
    }

    #[test]
    fn windows_line_endings() {
        let albums = parse("X\r\nA\r\n1 Song\r\nX\r\n");
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].songs[0].title, "Song");
    }

    #[test]
    fn latin1_bytes_do_not_abort_the_load() {
        let mut bytes = b"Caf\xe9\nSomeone\n1 Song\nCaf\xe9\n".to_vec();
        bytes.extend_from_slice("Blue\nJoni Mitchell\nBlue\n".as_bytes());

        let albums = parse_catalog(Cursor::new(bytes)).unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].title, "Caf\u{FFFD}");
        assert_eq!(albums[0].songs.len(), 1);
        assert_eq!(albums[1].title, "Blue");
    }

    #[test]
    fn last_line_without_newline() {
        let albums = parse("X\nA\nX");
        assert_eq!(albums.len(), 1);
    }

    #[test]
    fn written_catalog_reads_back_the_same() {
        let albums = parse(SAMPLE);
        let mut buf = Vec::new();
        write_catalog(&mut buf, &albums).unwrap();

        let reread = parse_catalog(Cursor::new(buf)).unwrap();
        assert_eq!(reread, albums);
    }

    #[test]
    fn write_emits_closing_title() {
        let album = Album::new("Solo").with_artist("Me").with_song("1", "Only");
        let mut buf = Vec::new();
        write_catalog(&mut buf, [&album]).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Solo\nMe\n1 Only\nSolo\n");
    }
}
