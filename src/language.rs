//! Supported languages and the capabilities each one provides.
//!
//! A [`Language`] is resolved from a language tag and hands out its
//! [`Phonology`], a process-wide read-only object bundling syllabification,
//! stress assignment and phoneme rules.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::hyphenation::Hyphenator;
use crate::phonetic::{self, Neighbor};
use crate::stress;

/// What the transcription pipeline needs from a language.
pub trait Phonology: Send + Sync {
    /// Canonical language tag, e.g. `es_ES`.
    fn tag(&self) -> &'static str;

    /// Split a lowercase word into syllables.
    fn syllabify<'w>(&self, word: &'w str) -> Vec<&'w str>;

    /// Index of the stressed syllable, or `None` if the word is left unmarked.
    fn find_stress(&self, syllables: &[&str]) -> Option<usize>;

    /// Transcribe one syllable given the symbols around it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedSymbol`] if a letter has no rule.
    fn transcribe_syllable(
        &self,
        syllable: &str,
        previous: Neighbor,
        next: Neighbor,
    ) -> Result<String>;
}

/// Castilian Spanish: bundled Spanish patterns and the Castilian rule table.
#[derive(Debug, Clone, Copy)]
pub struct Castilian {
    hyphenator: &'static Hyphenator,
}

impl Castilian {
    /// Create the Castilian phonology over the shared Spanish hyphenator.
    pub fn new() -> Result<Self> {
        Ok(Castilian {
            hyphenator: Hyphenator::spanish()?,
        })
    }

    /// The hyphenator used for syllabification.
    pub fn hyphenator(&self) -> &'static Hyphenator {
        self.hyphenator
    }
}

impl Phonology for Castilian {
    fn tag(&self) -> &'static str {
        Language::Spanish.tag()
    }

    fn syllabify<'w>(&self, word: &'w str) -> Vec<&'w str> {
        self.hyphenator.hyphenate(word)
    }

    fn find_stress(&self, syllables: &[&str]) -> Option<usize> {
        stress::find_stress(syllables)
    }

    fn transcribe_syllable(
        &self,
        syllable: &str,
        previous: Neighbor,
        next: Neighbor,
    ) -> Result<String> {
        phonetic::transcribe_with_context(syllable, previous, next)
    }
}

static CASTILIAN: OnceLock<Castilian> = OnceLock::new();

/// A language with a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Castilian Spanish
    Spanish,
}

/// Accepted tags, compared case-insensitively.
const TAGS: &[(&str, Language)] = &[
    ("es", Language::Spanish),
    ("es_es", Language::Spanish),
    ("es-es", Language::Spanish),
    ("spa", Language::Spanish),
    ("spanish", Language::Spanish),
];

impl Language {
    /// Every supported language.
    pub const ALL: &'static [Language] = &[Language::Spanish];

    /// Resolve a language tag such as `es` or `es_ES`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] naming the tag if no rule set matches.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        TAGS.iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, language)| *language)
            .ok_or_else(|| Error::UnsupportedLanguage(tag.to_string()))
    }

    /// Canonical tag.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Spanish => "es_ES",
        }
    }

    /// The shared phonology for this language, built on first use.
    pub fn phonology(self) -> Result<&'static dyn Phonology> {
        match self {
            Language::Spanish => {
                if let Some(castilian) = CASTILIAN.get() {
                    return Ok(castilian);
                }
                let castilian = Castilian::new()?;
                debug!(tag = self.tag(), "initialized phonology");
                Ok(CASTILIAN.get_or_init(|| castilian))
            }
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_tag(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
