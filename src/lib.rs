//! # silabeo
//!
//! Syllabification, stress assignment and phonemic transcription for Spanish text.
//!
//! Words are split into syllables with Liang's pattern hyphenation algorithm,
//! stress is placed from written accents or the default Spanish rule, and each
//! syllable is transcribed to IPA with context-sensitive Castilian phoneme rules:
//!
//! > Liang, Franklin Mark. "Word Hy-phen-a-tion by Com-put-er."
//! > PhD thesis, Stanford University (1983).
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> silabeo::Result<()> {
//! use silabeo::prelude::*;
//!
//! let transcriber = Transcriber::for_tag("es_ES")?;
//! assert_eq!(
//!     transcriber.transcribe("Esto es una prueba")?,
//!     "ˈes.to|es|ˈu.na|ˈpɾwe.βa"
//! );
//!
//! let hyphenator = Hyphenator::spanish()?;
//! assert_eq!(hyphenator.hyphenate("problema"), vec!["pro", "ble", "ma"]);
//! # Ok(())
//! # }
//! ```
//!
//! All tables (patterns, exceptions, rules, character classes) are built once and
//! shared read-only, so transcribers can be used from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hyphenation;
pub mod language;
pub mod phonetic;
pub mod stress;
pub mod transcription;

/// Compiled hyphenator serialization
#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hyphenation::{ExceptionTable, Hyphenator, Pattern, PatternTrie};
    pub use crate::language::{Language, Phonology};
    pub use crate::phonetic::{normalize, transcribe_syllable, Neighbor};
    pub use crate::stress::find_stress;
    pub use crate::transcription::{Separators, Transcriber, Transcription, Word};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, HyphenatorSerializer, JsonSerializer, PlainTextSerializer,
    };
}
