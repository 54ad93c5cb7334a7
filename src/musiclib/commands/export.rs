use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::write_catalog;
use crate::store::CatalogStore;
use std::fs::File;
use std::io::BufWriter;

/// Write the whole catalog to `filename` in the load format, replacing the file.
/// An empty filename falls back to `default_file`.
pub fn run<S: CatalogStore>(store: &S, filename: &str, default_file: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let target = if filename.is_empty() {
        default_file
    } else {
        filename
    };

    let file = match File::create(target) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!("Failed to create {}: {}", target, e);
            result.add_message(CmdMessage::error(format!(
                "Error: could not open file {} for writing",
                target
            )));
            return Ok(result);
        }
    };

    write_catalog(BufWriter::new(file), store.albums())?;
    tracing::info!("Exported {} album(s) to {}", store.len(), target);
    Ok(result)
}
