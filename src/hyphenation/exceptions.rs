//! Explicit hyphenation for irregular words.
//!
//! Exceptions are written with hyphens at every allowed break (`u-na`) and stored
//! under the word with the hyphens removed. Their break-point vectors are used as
//! given, bypassing the pattern trie.

use rustc_hash::FxHashMap;

use super::pattern::fold_case;
use crate::error::{Error, Result};

const HYPHEN: char = '-';

/// Lookup table from lowercased words to explicit break-point vectors.
///
/// Each vector has the same layout as one computed from patterns: length
/// `len(word) + 3`, with index `i + 2` holding the break after character `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct ExceptionTable {
    entries: FxHashMap<String, Vec<u8>>,
}

impl ExceptionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated exception tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedException`] for the first token with a leading,
    /// trailing or doubled hyphen.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for token in text.split_whitespace() {
            table.insert(token)?;
        }
        Ok(table)
    }

    /// Add one hyphenated token, replacing any previous entry for the same word.
    pub fn insert(&mut self, token: &str) -> Result<()> {
        let mut word = String::with_capacity(token.len());
        let mut points = vec![0u8, 0u8];
        let mut after_hyphen = false;

        for c in token.chars() {
            if c == HYPHEN {
                if word.is_empty() {
                    return Err(malformed(token, "leading hyphen"));
                }
                if after_hyphen {
                    return Err(malformed(token, "consecutive hyphens"));
                }
                if let Some(last) = points.last_mut() {
                    *last = 1;
                }
                after_hyphen = true;
            } else {
                word.push(fold_case(c));
                points.push(0);
                after_hyphen = false;
            }
        }

        if after_hyphen {
            return Err(malformed(token, "trailing hyphen"));
        }
        points.push(0);

        self.entries.insert(word, points);
        Ok(())
    }

    /// Rebuild a table from stored entries, checking every vector's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTable`] for an empty word or a vector whose length
    /// is not the word's character count plus three.
    #[cfg(any(feature = "serialization", test))]
    pub(crate) fn from_entries(entries: FxHashMap<String, Vec<u8>>) -> Result<Self> {
        for (word, points) in &entries {
            let expected = word.chars().count() + 3;
            if word.is_empty() || points.len() != expected {
                return Err(Error::InvalidTable(format!(
                    "exception '{}' has {} break points, expected {}",
                    word,
                    points.len(),
                    expected
                )));
            }
        }
        Ok(ExceptionTable { entries })
    }

    /// Break-point vector for an already lowercased word.
    #[inline]
    pub fn get(&self, word: &str) -> Option<&[u8]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Returns true if the lowercased word has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries written back in hyphenated token form, sorted by word.
    pub fn tokens(&self) -> Vec<String> {
        let mut words: Vec<&String> = self.entries.keys().collect();
        words.sort();

        words
            .into_iter()
            .map(|word| {
                let points = &self.entries[word];
                let mut token = String::with_capacity(word.len() + 4);
                for (i, c) in word.chars().enumerate() {
                    token.push(c);
                    if points[i + 2] % 2 == 1 {
                        token.push(HYPHEN);
                    }
                }
                token
            })
            .collect()
    }
}

fn malformed(token: &str, reason: &'static str) -> Error {
    Error::MalformedException {
        token: token.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_break() {
        let table = ExceptionTable::parse("u-na").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("una"), Some(&[0, 0, 1, 0, 0, 0][..]));
        assert_eq!(table.get("u-na"), None);
    }

    #[test]
    fn test_parse_without_breaks() {
        let table = ExceptionTable::parse("project").unwrap();
        let points = table.get("project").unwrap();
        assert_eq!(points.len(), "project".len() + 3);
        assert!(points.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_keys_are_lowercased() {
        let table = ExceptionTable::parse("U-no").unwrap();
        assert!(table.contains("uno"));
        assert!(!table.contains("Uno"));
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let table = ExceptionTable::parse("ta-ble tab-le").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.tokens(), vec!["tab-le".to_string()]);
    }

    #[test]
    fn test_rejects_misplaced_hyphens() {
        for token in ["-una", "una-", "u--na", "-"] {
            assert!(
                matches!(
                    ExceptionTable::parse(token),
                    Err(Error::MalformedException { .. })
                ),
                "{} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_tokens_restore_hyphens() {
        let table = ExceptionTable::parse("u-no as-so-ciate u-na").unwrap();
        assert_eq!(
            table.tokens(),
            vec![
                "as-so-ciate".to_string(),
                "u-na".to_string(),
                "u-no".to_string()
            ]
        );
    }

    #[test]
    fn test_from_entries_checks_lengths() {
        let parsed = ExceptionTable::parse("u-na").unwrap();
        let rebuilt = ExceptionTable::from_entries(parsed.entries.clone()).unwrap();
        assert_eq!(rebuilt, parsed);

        for (word, points) in [("una", vec![0]), ("una", vec![0; 7]), ("", vec![0; 3])] {
            let mut entries = FxHashMap::default();
            entries.insert(word.to_string(), points);
            assert!(matches!(
                ExceptionTable::from_entries(entries),
                Err(Error::InvalidTable(_))
            ));
        }
    }

    #[test]
    fn test_empty_text() {
        let table = ExceptionTable::parse(" \n ").unwrap();
        assert!(table.is_empty());
    }
}
