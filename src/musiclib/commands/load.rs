use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::parse_catalog;
use crate::store::CatalogStore;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Merge a catalog file into the store. Albums already present under the same title
/// are replaced. An empty filename does nothing.
pub fn run<S: CatalogStore>(store: &mut S, filename: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if filename.is_empty() {
        return Ok(result);
    }

    let path = Path::new(filename);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!("Failed to open {:?}: {}", path, e);
            result.add_message(CmdMessage::error(format!(
                "Error: Could not open music library file - {}",
                filename
            )));
            return Ok(result);
        }
    };

    let albums = parse_catalog(BufReader::new(file))?;
    let loaded = albums.len();
    let replaced = albums
        .into_iter()
        .filter_map(|album| store.put_album(album))
        .count();

    tracing::info!(
        "Loaded {} album(s) from {:?} ({} replaced), catalog now holds {}",
        loaded,
        path,
        replaced,
        store.len()
    );
    Ok(result)
}
