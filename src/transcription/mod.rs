//! The transcription pipeline.
//!
//! Text is lowercased and split into phrases and words. Each word is hyphenated,
//! its stress resolved and every syllable transcribed with its neighbors as
//! context. The result is rendered with four configurable [`Separators`].
//!
//! ```text
//! "Esto es una prueba"  →  ˈes.to|es|ˈu.na|ˈpɾwe.βa
//! ```

pub mod config;
pub mod pipeline;
pub mod segment;

pub use config::{Separators, ASCII_STRESS, IPA_STRESS};
pub use pipeline::{Phrase, Transcriber, Transcription, Word};
pub use segment::{segment, PHRASE_DELIMITERS};
