use colored::Colorize;
use musiclib::api::{CmdMessage, LibraryStats, MessageLevel};
use musiclib::model::Album;
use std::fmt::Write;

const SEARCH_HEADER: &str = "Your search results exist in the following albums: ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_search_results(titles: &[String]) {
    print!("{}", render_search_results(titles));
}

pub(super) fn print_stats(stats: &LibraryStats, albums: &[Album], detailed: bool) {
    print!("{}", render_stats(stats, albums, detailed));
}

/// Header, one title per line, then a blank line. No "no matches" line: an empty
/// result is just the header and the blank line.
pub(super) fn render_search_results(titles: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", SEARCH_HEADER);
    for title in titles {
        let _ = writeln!(out, "{}", title);
    }
    out.push('\n');
    out
}

pub(super) fn render_stats(stats: &LibraryStats, albums: &[Album], detailed: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Overall Music Library Stats");
    let _ = writeln!(out, "===========================");
    let _ = writeln!(out, "Total Records: {}", stats.total_records);
    let _ = writeln!(out, "Total Unique Artists: {}", stats.unique_artists);
    let _ = writeln!(out, "Total Songs: {}", stats.total_songs);
    out.push('\n');

    if detailed {
        let _ = writeln!(out, "Your Current Music Library Includes");
        let _ = writeln!(out, "===================================");
        for album in albums {
            let _ = writeln!(out, "{}", album.title);
            for artist in &album.artists {
                let _ = writeln!(out, " {}", artist);
            }
            for song in &album.songs {
                let _ = writeln!(out, "   {} {}", song.track_number, song.title);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_have_header_and_trailing_blank() {
        let out = render_search_results(&["A".to_string(), "B".to_string()]);
        assert_eq!(
            out,
            "Your search results exist in the following albums: \nA\nB\n\n"
        );
    }

    #[test]
    fn empty_search_results_still_print_header() {
        assert_eq!(
            render_search_results(&[]),
            "Your search results exist in the following albums: \n\n"
        );
    }

    #[test]
    fn stats_summary() {
        let stats = LibraryStats {
            total_records: 2,
            unique_artists: 3,
            total_songs: 10,
        };
        assert_eq!(
            render_stats(&stats, &[], false),
            "Overall Music Library Stats\n\
             ===========================\n\
             Total Records: 2\n\
             Total Unique Artists: 3\n\
             Total Songs: 10\n\n"
        );
    }

    #[test]
    fn stats_detail_indents_artists_and_songs() {
        let album = Album::new("Blue")
            .with_artist("Joni Mitchell")
            .with_song("1", "All I Want");
        let stats = LibraryStats {
            total_records: 1,
            unique_artists: 1,
            total_songs: 1,
        };

        let out = render_stats(&stats, &[album], true);
        assert!(out.ends_with(
            "Your Current Music Library Includes\n\
             ===================================\n\
             Blue\n Joni Mitchell\n   1 All I Want\n\n"
        ));
    }
}
