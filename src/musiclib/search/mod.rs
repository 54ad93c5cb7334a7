//! # Search
//!
//! Free-text search over one album field at a time.
//!
//! A query reads `<field> [[+|-]term ...]` where field is `album`, `artist` or `song`:
//!
//! - [`query`] splits the raw text into a [`Query`], resolving the field once and
//!   lowercasing each term.
//! - [`matcher`] decides whether an album's field contains a term as a whole word.
//! - [`evaluator`] combines terms: a union over every term, then an AND over the `+`
//!   terms, then the exclusion pass over the `-` terms.
//!
//! Search only ever borrows the store; it never modifies the catalog.

pub mod evaluator;
pub mod matcher;
pub mod query;

pub use evaluator::{evaluate, refine, ExclusionPolicy, RefineMode};
pub use matcher::{contains_word, field_contains};
pub use query::{Field, Modifier, Query, Term};
