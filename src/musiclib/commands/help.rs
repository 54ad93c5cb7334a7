use crate::commands::CmdResult;
use crate::error::Result;
use std::fs;
use std::path::Path;

const HEADER: &str = "\
Music Library Help
------------------
Command Options: clear, exit, export, help, load, search

";

const COMMAND_HELP: &str = "\
clear
    Removes every album from the current library.

exit
    Leaves the music library app.

export [filename]
    Writes the current library to a file in the load format.
    Without a filename the library is written to musicdatabase.txt.

help
    Shows this help.

load <filename>
    Adds the albums in a library file to the current library.
    Albums with a title that is already loaded are replaced.

stats [-d]
    Prints the number of albums, unique artists and songs.
    With -d, also lists every album with its artists and songs.

search <album|artist|song> [[+|-]term ...]
    Lists albums whose field contains a term as a whole word.
    Matching ignores case. Plain terms widen the results,
    +term requires every result to contain the term,
    -term filters the results on the term.
";

/// Build the help text. A readable `help_file` replaces the built-in command list;
/// an unreadable one is logged and the built-in list is used instead.
pub fn run(help_file: Option<&Path>) -> Result<CmdResult> {
    let commands = match help_file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            tracing::warn!("Cannot read help file {:?}: {}", path, e);
            COMMAND_HELP.to_string()
        }),
        None => COMMAND_HELP.to_string(),
    };

    Ok(CmdResult::default().with_help_text(format!("{}{}", HEADER, commands)))
}
