//! Error types shared by the loader and the query library.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures surfaced by the catalog loader and the query library.
///
/// Nothing here is retryable: every variant is a data-contract or
/// precondition violation and propagates straight to the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A query needed at least one show and none was available, either
    /// because the catalog itself was empty or because a filtering step
    /// left nothing to pick from.
    #[error("empty catalog: {0}")]
    EmptyCatalog(&'static str),

    /// A record in the backing table violates the data model. Fatal at
    /// load time; no query ever sees such a record.
    #[error("malformed record {name:?}: {reason}")]
    MalformedRecord { name: String, reason: String },

    /// Columnar-layer failure while building or reading the show table.
    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
