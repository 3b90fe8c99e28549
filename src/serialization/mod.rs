//! Compiled hyphenator serialization.
//!
//! Parsing several hundred pattern tokens on every start is cheap but not free;
//! a compiled [`Hyphenator`] (trie and exception table) can instead be written
//! once and loaded back in one of three formats.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use silabeo::hyphenation::Hyphenator;
//! use silabeo::serialization::{BincodeSerializer, HyphenatorSerializer};
//!
//! let hyphenator = Hyphenator::new("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n", "project")?;
//!
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize(&hyphenator, &mut buffer)?;
//!
//! let loaded = BincodeSerializer::deserialize(&buffer[..])?;
//! assert_eq!(loaded.hyphenate("hyphenation"), vec!["hy", "phen", "ation"]);
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};

use rustc_hash::FxHashMap;

use crate::hyphenation::trie::TrieNode;
use crate::hyphenation::{ExceptionTable, Hyphenator, PatternTrie};

mod bincode_impl;
mod json_impl;
mod plaintext_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;
pub use self::plaintext_impl::PlainTextSerializer;

/// Trait for serializing and deserializing hyphenators.
pub trait HyphenatorSerializer {
    /// Serialize a hyphenator to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(hyphenator: &Hyphenator, writer: W) -> Result<(), SerializationError>;

    /// Deserialize a hyphenator from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the data holds a
    /// malformed pattern or exception.
    fn deserialize<R: Read>(reader: R) -> Result<Hyphenator, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Pattern or exception data is malformed
    #[error(transparent)]
    Data(#[from] crate::error::Error),
}

/// Stored form of a [`Hyphenator`], checked before use.
///
/// Field order and names match the serialized `Hyphenator`, so bincode and
/// JSON output read back into this type.
#[derive(serde::Deserialize)]
pub(crate) struct CompiledHyphenator {
    trie: CompiledTrie,
    exceptions: CompiledExceptions,
}

#[derive(serde::Deserialize)]
struct CompiledTrie {
    nodes: Vec<TrieNode>,
    pattern_count: usize,
}

#[derive(serde::Deserialize)]
struct CompiledExceptions {
    entries: FxHashMap<String, Vec<u8>>,
}

impl CompiledHyphenator {
    /// Validate the trie arena and the exception vectors.
    pub(crate) fn into_hyphenator(self) -> crate::error::Result<Hyphenator> {
        let trie = PatternTrie::from_nodes(self.trie.nodes, self.trie.pattern_count)?;
        let exceptions = ExceptionTable::from_entries(self.exceptions.entries)?;
        Ok(Hyphenator::from_parts(trie, exceptions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    pub(super) const ENGLISH_SAMPLE: &str = "hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n";

    fn roundtrip<S: HyphenatorSerializer>(hyphenator: &Hyphenator) -> Hyphenator {
        let mut buffer = Vec::new();
        S::serialize(hyphenator, &mut buffer).unwrap();
        S::deserialize(&buffer[..]).unwrap()
    }

    #[test]
    fn test_all_formats_preserve_behavior() {
        let hyphenator = Hyphenator::new(ENGLISH_SAMPLE, "project ta-ble").unwrap();
        for loaded in [
            roundtrip::<BincodeSerializer>(&hyphenator),
            roundtrip::<JsonSerializer>(&hyphenator),
            roundtrip::<PlainTextSerializer>(&hyphenator),
        ] {
            assert_eq!(loaded.hyphenate("hyphenation"), vec!["hy", "phen", "ation"]);
            assert_eq!(loaded.hyphenate("project"), vec!["project"]);
            assert_eq!(loaded.hyphenate("table"), vec!["ta", "ble"]);
            assert_eq!(loaded.trie().pattern_count(), 9);
        }
    }

    #[test]
    fn test_spanish_bincode_roundtrip() {
        let spanish = Hyphenator::spanish().unwrap();
        let loaded = roundtrip::<BincodeSerializer>(spanish);
        assert_eq!(&loaded, spanish);
    }

    fn assert_invalid_table(result: Result<Hyphenator, SerializationError>) {
        match result {
            Err(SerializationError::Data(Error::InvalidTable(_))) => {}
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("inconsistent data was accepted"),
        }
    }

    #[test]
    fn test_json_exception_with_short_vector_is_rejected() {
        let json = r#"{
            "trie": { "nodes": [{ "edges": [], "points": null }], "pattern_count": 0 },
            "exceptions": { "entries": { "una": [0] } }
        }"#;
        assert_invalid_table(JsonSerializer::deserialize(json.as_bytes()));
    }

    #[test]
    fn test_json_edge_out_of_range_is_rejected() {
        let json = r#"{
            "trie": { "nodes": [{ "edges": [["a", 7]], "points": null }], "pattern_count": 0 },
            "exceptions": { "entries": {} }
        }"#;
        assert_invalid_table(JsonSerializer::deserialize(json.as_bytes()));
    }

    #[test]
    fn test_bincode_edge_out_of_range_is_rejected() {
        // Same layout as a serialized hyphenator: ((nodes, pattern_count), entries)
        let nodes: Vec<(Vec<(char, usize)>, Option<Vec<u8>>)> = vec![(vec![('a', 7)], None)];
        let entries: FxHashMap<String, Vec<u8>> = FxHashMap::default();
        let buffer = bincode::serialize(&((nodes, 0usize), entries)).unwrap();

        assert_invalid_table(BincodeSerializer::deserialize(&buffer[..]));
    }

    #[test]
    fn test_bincode_exception_with_short_vector_is_rejected() {
        let nodes: Vec<(Vec<(char, usize)>, Option<Vec<u8>>)> = vec![(vec![], None)];
        let mut entries: FxHashMap<String, Vec<u8>> = FxHashMap::default();
        entries.insert("una".to_string(), vec![0]);
        let buffer = bincode::serialize(&((nodes, 0usize), entries)).unwrap();

        assert_invalid_table(BincodeSerializer::deserialize(&buffer[..]));
    }

    #[test]
    fn test_data_error_is_reported() {
        let err = PlainTextSerializer::deserialize("a12b\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SerializationError::Data(_)));
    }
}
