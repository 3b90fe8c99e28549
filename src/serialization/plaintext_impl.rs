//! Plain text serialization for hyphenators.
//!
//! Writes the source form: one pattern token per line, a blank line, then one
//! hyphenated exception per line. This is the most human-readable format, ideal for:
//! - Manual editing
//! - Version control
//! - Sharing pattern sets with other hyphenation tools
//!
//! # Format
//!
//! ```text
//! 1na
//! hy3ph
//! n2at
//!
//! ta-ble
//! ```

use std::io::{BufRead, BufReader, Read, Write};

use super::{HyphenatorSerializer, SerializationError};
use crate::hyphenation::{ExceptionTable, Hyphenator, Pattern, PatternTrie};

/// Plain text serializer using newline-delimited UTF-8 tokens.
pub struct PlainTextSerializer;

impl HyphenatorSerializer for PlainTextSerializer {
    fn serialize<W: Write>(
        hyphenator: &Hyphenator,
        mut writer: W,
    ) -> Result<(), SerializationError> {
        for pattern in hyphenator.trie().patterns() {
            writeln!(writer, "{}", pattern)?;
        }
        writeln!(writer)?;
        for token in hyphenator.exceptions().tokens() {
            writeln!(writer, "{}", token)?;
        }
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Hyphenator, SerializationError> {
        let buf_reader = BufReader::new(reader);
        let mut patterns = Vec::new();
        let mut exceptions = ExceptionTable::new();
        let mut in_exceptions = false;

        for line in buf_reader.lines() {
            let line = line?;
            // The first blank line separates patterns from exceptions
            if line.trim().is_empty() {
                in_exceptions = true;
                continue;
            }
            for token in line.split_whitespace() {
                if in_exceptions {
                    exceptions.insert(token)?;
                } else {
                    patterns.push(Pattern::parse(token)?);
                }
            }
        }

        Ok(Hyphenator::from_parts(
            PatternTrie::from_patterns(patterns),
            exceptions,
        ))
    }
}
