//! JSON serializer for human-readable format.

use std::io::{Read, Write};

use super::{CompiledHyphenator, HyphenatorSerializer, SerializationError};
use crate::hyphenation::Hyphenator;

/// JSON serializer for human-readable format.
///
/// Useful for inspecting a compiled trie; larger and slower than bincode.
pub struct JsonSerializer;

impl HyphenatorSerializer for JsonSerializer {
    fn serialize<W: Write>(
        hyphenator: &Hyphenator,
        mut writer: W,
    ) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, hyphenator)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Hyphenator, SerializationError> {
        let compiled: CompiledHyphenator = serde_json::from_reader(&mut reader)?;
        Ok(compiled.into_hyphenator()?)
    }
}
