use super::matcher::field_contains;
use super::query::{Field, Modifier, Query, Term};
use crate::store::CatalogStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the exclusion pass does with albums whose field contains a `-term`.
///
/// Only the refinement pass is configurable. In the base pass a `-term` always adds
/// the albums that contain it; earlier releases added the albums that lacked it, so
/// `artist nicks -beatles` once returned only albums by Beatles that also had some
/// other artist. Both base-pass readings end in the same exclusion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPolicy {
    /// Keep albums containing every `-term`. This is how the catalog tool has always
    /// answered `-` queries, so it stays the default.
    #[default]
    KeepMatching,
    /// Drop albums containing any `-term`.
    DropMatching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineMode {
    Intersect,
    Exclude(ExclusionPolicy),
}

/// Run a query against the catalog and return the matching album titles, ordered.
///
/// 1. Base pass: every term, whatever its modifier, adds the albums whose field
///    contains it.
/// 2. If any `+term` exists, the set is refined to albums containing all of them.
/// 3. If any `-term` exists, the result of step 2 is refined by the exclusion policy.
pub fn evaluate<S: CatalogStore>(
    store: &S,
    query: &Query,
    policy: ExclusionPolicy,
) -> BTreeSet<String> {
    let Some(field) = query.field else {
        tracing::debug!("Unknown search field '{}', no results", query.selector);
        return BTreeSet::new();
    };

    let mut results = base_pass(store, field, &query.terms);
    tracing::debug!("Base pass over {:?}: {} album(s)", field, results.len());

    if query.has_modifier(Modifier::Required) {
        let required = query.terms_with(Modifier::Required);
        results = refine(store, field, results, &required, RefineMode::Intersect);
        tracing::debug!("After intersection: {} album(s)", results.len());
    }

    if query.has_modifier(Modifier::Excluded) {
        let excluded = query.terms_with(Modifier::Excluded);
        results = refine(store, field, results, &excluded, RefineMode::Exclude(policy));
        tracing::debug!("After exclusion ({:?}): {} album(s)", policy, results.len());
    }

    results
}

fn base_pass<S: CatalogStore>(store: &S, field: Field, terms: &[Term]) -> BTreeSet<String> {
    let mut results = BTreeSet::new();
    for term in terms {
        for album in store.albums() {
            if field_contains(album, field, &term.text) {
                results.insert(album.title.clone());
            }
        }
    }
    results
}

/// Filter `results` against `terms`, re-checking each album in the store.
///
/// Titles no longer present in the store are dropped.
pub fn refine<S: CatalogStore>(
    store: &S,
    field: Field,
    results: BTreeSet<String>,
    terms: &[&Term],
    mode: RefineMode,
) -> BTreeSet<String> {
    results
        .into_iter()
        .filter(|title| {
            let Some(album) = store.get_album(title) else {
                return false;
            };
            let found = |term: &&Term| field_contains(album, field, &term.text);
            match mode {
                RefineMode::Intersect | RefineMode::Exclude(ExclusionPolicy::KeepMatching) => {
                    terms.iter().all(found)
                }
                RefineMode::Exclude(ExclusionPolicy::DropMatching) => !terms.iter().any(found),
            }
        })
        .collect()
}
