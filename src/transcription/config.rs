//! Output separators.

/// IPA primary stress mark.
pub const IPA_STRESS: char = 'ˈ';

/// ASCII stress mark.
pub const ASCII_STRESS: char = '\'';

/// The four characters used to lay out a transcription.
///
/// # Examples
///
/// ```rust
/// use silabeo::transcription::{Separators, ASCII_STRESS};
///
/// let separators = Separators::default().with_word(' ').with_stress(ASCII_STRESS);
/// assert_eq!(separators, Separators::ascii().with_word(' '));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Separators {
    /// Between phrases (default `/`)
    pub phrase: char,
    /// Between words of a phrase (default `|`)
    pub word: char,
    /// Between syllables of a word (default `.`)
    pub syllable: char,
    /// Prepended to the stressed syllable (default `ˈ`)
    pub stress: char,
}

impl Separators {
    /// Defaults with the ASCII apostrophe as stress mark.
    pub fn ascii() -> Self {
        Self::default().with_stress(ASCII_STRESS)
    }

    /// Set the phrase separator.
    pub fn with_phrase(mut self, phrase: char) -> Self {
        self.phrase = phrase;
        self
    }

    /// Set the word separator.
    pub fn with_word(mut self, word: char) -> Self {
        self.word = word;
        self
    }

    /// Set the syllable separator.
    pub fn with_syllable(mut self, syllable: char) -> Self {
        self.syllable = syllable;
        self
    }

    /// Set the stress mark.
    pub fn with_stress(mut self, stress: char) -> Self {
        self.stress = stress;
        self
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators {
            phrase: '/',
            word: '|',
            syllable: '.',
            stress: IPA_STRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let separators = Separators::default();
        assert_eq!(separators.phrase, '/');
        assert_eq!(separators.word, '|');
        assert_eq!(separators.syllable, '.');
        assert_eq!(separators.stress, 'ˈ');
    }

    #[test]
    fn test_ascii_changes_only_stress() {
        let ascii = Separators::ascii();
        assert_eq!(ascii.stress, '\'');
        assert_eq!(ascii.with_stress(IPA_STRESS), Separators::default());
    }

    #[test]
    fn test_setters_are_independent() {
        let separators = Separators::default()
            .with_phrase('#')
            .with_word(' ')
            .with_syllable('-');
        assert_eq!(separators.phrase, '#');
        assert_eq!(separators.word, ' ');
        assert_eq!(separators.syllable, '-');
        assert_eq!(separators.stress, IPA_STRESS);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let separators: Separators = serde_json::from_str(r#"{"word": " "}"#).unwrap();
        assert_eq!(separators, Separators::default().with_word(' '));
    }
}
