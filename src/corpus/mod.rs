//! Corpus store collaborators: bulk loading and word-frequency indexing.
//!
//! These are the thin, linear pipelines around the variation engine. They
//! consume an abstract sorted key-value store ([`store::CorpusStore`]) and a
//! lazy line-then-token text source; there is no scheduling, consistency, or
//! recovery logic here.
//!
//! - [`loader`] - parse a JSON object of string/string pairs and `put` each
//!   one into a store.
//! - [`indexer`] - count whitespace-delimited words from a text source into a
//!   store, with counts encoded as big-endian `u64` values.

pub mod indexer;
pub mod loader;
pub mod store;

pub use indexer::{index_words, IndexSummary};
pub use loader::load_json_pairs;
pub use store::{CorpusStore, MemoryStore};

use thiserror::Error;

/// Errors from the corpus pipelines.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Reading the input or writing the store failed.
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bulk-load input is not a JSON object of string/string pairs.
    #[error("invalid key/value input: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
