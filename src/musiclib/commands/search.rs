use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MusicLibError, Result};
use crate::search::{evaluate, ExclusionPolicy, Query};
use crate::store::CatalogStore;

/// Run a raw `search` query against the catalog.
///
/// An empty query is reported through messages and leaves `search_results` unset.
/// Every other query, including a field-only or unknown-field one, sets
/// `search_results`, possibly to an empty list.
pub fn run<S: CatalogStore>(store: &S, raw: &str, policy: ExclusionPolicy) -> Result<CmdResult> {
    let query = match Query::parse(raw) {
        Ok(query) => query,
        Err(MusicLibError::EmptyQuery) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Error: {}",
                MusicLibError::EmptyQuery
            )));
            result.add_message(CmdMessage::info("No results found."));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    tracing::debug!("Searching {:?} with {} term(s)", query.field, query.terms.len());
    let titles = evaluate(store, &query, policy).into_iter().collect();
    Ok(CmdResult::default().with_search_results(titles))
}
