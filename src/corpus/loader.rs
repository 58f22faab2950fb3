//! Bulk loading of key/value records.
//!
//! The input is one JSON object mapping string keys to string values; each
//! pair is written to the store as-is. This is a plain linear pipeline.

use std::collections::BTreeMap;
use std::io::Read;

use super::store::CorpusStore;
use super::Result;

/// Load a JSON object of string/string pairs into `store`.
///
/// # Arguments
///
/// * `input` - reader over a JSON document like `{"kaam": "work", ...}`
/// * `store` - destination store
///
/// # Returns
///
/// The number of entries stored.
///
/// # Errors
///
/// Fails if the input is not a JSON object of string/string pairs or a store
/// write fails. Entries written before the failure are not rolled back.
pub fn load_json_pairs<R: Read, S: CorpusStore>(input: R, store: &mut S) -> Result<u64> {
    let pairs: BTreeMap<String, String> = serde_json::from_reader(input)?;

    let mut count = 0u64;
    for (key, value) in &pairs {
        store.put(key.as_bytes(), value.as_bytes())?;
        count += 1;
    }
    Ok(count)
}
