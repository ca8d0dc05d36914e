//! Immutable title-indexed vector corpus.
//!
//! The corpus is loaded once at startup from two row-aligned artifacts and is
//! never mutated afterwards. Request handlers share it through an `Arc`.

mod artifact;
mod store;

pub use artifact::{load, CorpusEntry};
pub use store::Corpus;

/// Fatal errors raised while loading the corpus artifacts
#[derive(thiserror::Error, Debug)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("row count mismatch: {titles} titles but {vectors} vectors")]
    RowCountMismatch { titles: usize, vectors: usize },

    #[error("vector row {row} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("vector row {row} contains a non-finite value")]
    NonFiniteValue { row: usize },

    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("vectors have zero dimensions")]
    ZeroDimension,
}
