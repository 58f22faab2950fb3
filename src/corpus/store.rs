//! Abstract sorted key-value store and its in-memory implementation.
//!
//! The pipelines only need three single-key operations, each individually
//! atomic; everything about persistence formats and storage engine internals
//! stays behind this trait.

use std::collections::BTreeMap;
use std::io;

/// A sorted key-value store over byte-string keys and values.
pub trait CorpusStore {
    /// Store `value` under `key`, replacing any existing value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> io::Result<()>;

    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> io::Result<Option<Vec<u8>>>;

    /// Check whether `key` is present.
    fn has(&self, key: &[u8]) -> io::Result<bool>;
}

/// In-memory sorted store backed by a `BTreeMap`.
///
/// Iteration order is key order, which is what the CLI relies on when writing
/// snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl CorpusStore for MemoryStore {
    fn put(&mut self, key: &[u8], value: &[u8]) -> io::Result<()> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn has(&self, key: &[u8]) -> io::Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}
