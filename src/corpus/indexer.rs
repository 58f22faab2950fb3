//! Word-frequency indexing.
//!
//! Consumes a lazy line-then-token source (lines from a `BufRead`, split on
//! whitespace) and maintains one counter per distinct word in the store.
//! Counts are stored as 8-byte big-endian `u64` values so keys and values
//! both stay plain byte strings.

use std::io::BufRead;

use super::store::CorpusStore;
use super::Result;

/// Totals reported by a [`index_words`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexSummary {
    /// Number of distinct words indexed.
    pub distinct_words: u64,
    /// Total number of tokens seen.
    pub total_tokens: u64,
}

/// Encode a word count as its stored byte value.
#[inline]
pub fn encode_count(count: u64) -> [u8; 8] {
    count.to_be_bytes()
}

/// Decode a stored byte value back into a word count.
///
/// Returns `None` if the value is not exactly 8 bytes.
#[inline]
pub fn decode_count(value: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = value.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}

/// Count word frequencies from `input` into `store`.
///
/// Each line is split on whitespace; each token becomes a key whose value is
/// its occurrence count so far. A token seen for the first time is stored
/// with count 1; later occurrences read, increment, and rewrite the count.
///
/// # Returns
///
/// An [`IndexSummary`] with the number of distinct words and total tokens.
///
/// # Errors
///
/// Fails on a read error or a store failure. Counts written before the
/// failure are not rolled back.
pub fn index_words<R: BufRead, S: CorpusStore>(input: R, store: &mut S) -> Result<IndexSummary> {
    let mut summary = IndexSummary::default();

    for line in input.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            summary.total_tokens += 1;
            let key = word.as_bytes();

            if !store.has(key)? {
                store.put(key, &encode_count(1))?;
                summary.distinct_words += 1;
                continue;
            }

            let count = store
                .get(key)?
                .as_deref()
                .and_then(decode_count)
                .unwrap_or(0);
            store.put(key, &encode_count(count + 1))?;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::store::MemoryStore;
    use std::io::Cursor;

    fn count_of(store: &MemoryStore, word: &str) -> u64 {
        decode_count(&store.get(word.as_bytes()).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_count_encoding_round_trip() {
        assert_eq!(encode_count(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(decode_count(&encode_count(1)), Some(1));
        assert_eq!(decode_count(&encode_count(u64::MAX)), Some(u64::MAX));
        assert_eq!(decode_count(b"short"), None);
    }

    #[test]
    fn test_index_counts_words() {
        let input = Cursor::new("kaam kaam dhoom\nkaam paani\n");
        let mut store = MemoryStore::new();
        let summary = index_words(input, &mut store).unwrap();

        assert_eq!(summary.distinct_words, 3);
        assert_eq!(summary.total_tokens, 5);
        assert_eq!(count_of(&store, "kaam"), 3);
        assert_eq!(count_of(&store, "dhoom"), 1);
        assert_eq!(count_of(&store, "paani"), 1);
    }

    #[test]
    fn test_blank_lines_and_extra_whitespace() {
        let input = Cursor::new("  kaam \n\n\t kaam\tdhoom \n");
        let mut store = MemoryStore::new();
        let summary = index_words(input, &mut store).unwrap();

        assert_eq!(summary.distinct_words, 2);
        assert_eq!(summary.total_tokens, 3);
        assert_eq!(count_of(&store, "kaam"), 2);
    }

    #[test]
    fn test_empty_input() {
        let mut store = MemoryStore::new();
        let summary = index_words(Cursor::new(""), &mut store).unwrap();
        assert_eq!(summary, IndexSummary::default());
        assert!(store.is_empty());
    }
}
