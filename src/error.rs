//! Error types for hyphenation data loading and transcription.

use thiserror::Error;

/// Errors produced while loading hyphenation data or transcribing text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested language tag has no rule set.
    ///
    /// Raised by [`Language::from_tag`](crate::language::Language::from_tag) before any
    /// text reaches the pipeline.
    #[error("Unsupported language code '{0}'")]
    UnsupportedLanguage(String),

    /// A letter has no registered phoneme rule.
    ///
    /// The pipeline never drops or guesses an unknown letter; the offending symbol and
    /// the normalized syllable it appeared in are reported instead.
    #[error("No phoneme rule for symbol '{symbol}' in syllable '{syllable}'")]
    UnmappedSymbol {
        /// The letter without a rule
        symbol: char,
        /// The syllable being transcribed when the letter was found
        syllable: String,
    },

    /// A hyphenation pattern token could not be parsed.
    #[error("Malformed hyphenation pattern '{token}': {reason}")]
    MalformedPattern {
        /// The offending token
        token: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A hyphenation exception token could not be parsed.
    #[error("Malformed hyphenation exception '{token}': {reason}")]
    MalformedException {
        /// The offending token
        token: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A compiled hyphenation table is internally inconsistent.
    ///
    /// Raised while loading serialized data, so a damaged file is rejected before
    /// any word is hyphenated with it.
    #[error("Invalid hyphenation table: {0}")]
    InvalidTable(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = Error::UnsupportedLanguage("xx_XX".to_string());
        assert_eq!(err.to_string(), "Unsupported language code 'xx_XX'");
    }

    #[test]
    fn test_invalid_table_message() {
        let err = Error::InvalidTable("node 3 is unreachable".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid hyphenation table: node 3 is unreachable"
        );
    }

    #[test]
    fn test_unmapped_symbol_message() {
        let err = Error::UnmappedSymbol {
            symbol: 'ç',
            syllable: "ça".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No phoneme rule for symbol 'ç' in syllable 'ça'"
        );
    }
}
