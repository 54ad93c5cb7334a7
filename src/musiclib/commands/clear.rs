use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.len();
    store.clear();
    tracing::info!("Cleared {} album(s) from the catalog", removed);
    Ok(CmdResult::default())
}
