//! Liang pattern hyphenation.
//!
//! Words are split into syllables by superimposing digit-weighted patterns over the
//! word padded with boundary markers and breaking at every odd weight.
//!
//! # Reference
//!
//! > Liang, Franklin Mark. "Word Hy-phen-a-tion by Com-put-er."
//! > PhD thesis, Stanford University (1983).
//!
//! # Example
//!
//! ```rust
//! # fn main() -> silabeo::Result<()> {
//! use silabeo::hyphenation::Hyphenator;
//!
//! let english = Hyphenator::new("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n", "project")?;
//! assert_eq!(english.hyphenate("hyphenation"), vec!["hy", "phen", "ation"]);
//! assert_eq!(english.hyphenate("project"), vec!["project"]);
//! # Ok(())
//! # }
//! ```

pub mod exceptions;
pub mod hyphenator;
pub mod pattern;
pub mod trie;

pub use exceptions::ExceptionTable;
pub use hyphenator::Hyphenator;
pub use pattern::{parse_patterns, Pattern};
pub use trie::{PatternTrie, PatternTrieBuilder};

/// Spanish hyphenation patterns from the LibreOffice dictionaries.
pub const SPANISH_PATTERNS: &str = include_str!("data/es.pat");

/// Spanish words hyphenated explicitly.
pub const SPANISH_EXCEPTIONS: &str = include_str!("data/es.exc");
