//! Context-sensitive phoneme rules for Castilian Spanish.
//!
//! A syllable is first normalized so that digraphs (`rr`, `ll`, `ch`, `gu`, `qu`)
//! become single placeholder symbols. Each symbol is then dispatched to the rule
//! registered for it, which sees the symbol before and after it. At the edges of
//! the syllable those neighbors come from the adjacent syllables of the same word,
//! or are a pause (`‖`) at the word boundary.
//!
//! # Usage
//!
//! ```rust
//! # fn main() -> silabeo::Result<()> {
//! use silabeo::phonetic::{transcribe_syllable, transcribe_with_context, Neighbor};
//!
//! assert_eq!(transcribe_syllable("prue", None, Some("ba"))?, "pɾwe");
//! assert_eq!(
//!     transcribe_with_context("ba", Neighbor::Letter('e'), Neighbor::Pause)?,
//!     "βa"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Letters without a rule are reported as
//! [`Error::UnmappedSymbol`](crate::error::Error::UnmappedSymbol) rather than
//! dropped.

pub mod context;
pub mod digraphs;
pub mod engine;
pub mod rules;

pub use context::{ContextSets, LetterContext, Neighbor, CASTILIAN, PAUSE};
pub use digraphs::{normalize, DIGRAPHS};
pub use engine::{transcribe_syllable, transcribe_with_context};
pub use rules::{rule_for, Rule};
