//! Bincode serializer for compact binary format.

use std::io::{Read, Write};

use super::{CompiledHyphenator, HyphenatorSerializer, SerializationError};
use crate::hyphenation::Hyphenator;

/// Bincode serializer for compact binary format.
///
/// Stores the compiled trie arena as is, so loading skips pattern parsing
/// entirely. This is the format to ship alongside an application.
pub struct BincodeSerializer;

impl HyphenatorSerializer for BincodeSerializer {
    fn serialize<W: Write>(
        hyphenator: &Hyphenator,
        mut writer: W,
    ) -> Result<(), SerializationError> {
        bincode::serialize_into(&mut writer, hyphenator)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Hyphenator, SerializationError> {
        let compiled: CompiledHyphenator = bincode::deserialize_from(&mut reader)?;
        Ok(compiled.into_hyphenator()?)
    }
}
