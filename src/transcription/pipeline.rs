//! Text to transcription: segmentation, syllabification, stress and phonemes.

use std::fmt;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

use super::config::Separators;
use super::segment::segment;
use crate::error::Result;
use crate::hyphenation::pattern::fold_case;
use crate::language::{Language, Phonology};
use crate::phonetic::Neighbor;

// ============================================================================
// Structured results
// ============================================================================

/// One analyzed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Orthographic syllables, lowercased
    pub syllables: Vec<String>,
    /// Phonetic transcription of each syllable
    pub phonemes: Vec<String>,
    /// Index of the stressed syllable
    pub stress: Option<usize>,
}

impl Word {
    /// Phonemes joined by the syllable separator, stress mark included.
    pub fn render(&self, separators: &Separators) -> String {
        let mut out = String::new();
        push_marked(&mut out, &self.phonemes, self.stress, separators);
        out
    }

    /// Orthographic syllables joined by the syllable separator, stress mark included.
    pub fn render_orthographic(&self, separators: &Separators) -> String {
        let mut out = String::new();
        push_marked(&mut out, &self.syllables, self.stress, separators);
        out
    }
}

/// A run of words between two phrase delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    /// The words, in order
    pub words: Vec<Word>,
}

/// The analysis of a whole text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcription {
    /// The phrases, in order
    pub phrases: Vec<Phrase>,
}

impl Transcription {
    /// Returns true if the text had no words.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// All words across phrases.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.phrases.iter().flat_map(|phrase| phrase.words.iter())
    }

    /// Phonetic rendering.
    pub fn render(&self, separators: &Separators) -> String {
        self.render_with(separators, Word::render)
    }

    /// Syllabified orthographic rendering.
    pub fn render_orthographic(&self, separators: &Separators) -> String {
        self.render_with(separators, Word::render_orthographic)
    }

    fn render_with(
        &self,
        separators: &Separators,
        render_word: fn(&Word, &Separators) -> String,
    ) -> String {
        let mut out = String::new();
        for (i, phrase) in self.phrases.iter().enumerate() {
            if i > 0 {
                out.push(separators.phrase);
            }
            for (j, word) in phrase.words.iter().enumerate() {
                if j > 0 {
                    out.push(separators.word);
                }
                out.push_str(&render_word(word, separators));
            }
        }
        out
    }
}

fn push_marked(out: &mut String, parts: &[String], stress: Option<usize>, separators: &Separators) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(separators.syllable);
        }
        if stress == Some(i) {
            out.push(separators.stress);
        }
        out.push_str(part);
    }
}

// ============================================================================
// Transcriber
// ============================================================================

/// Transcribes text with one language's phonology and a set of separators.
///
/// A transcriber only borrows process-wide read-only tables, so it is cheap to
/// clone and can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// # fn main() -> silabeo::Result<()> {
/// use silabeo::prelude::*;
///
/// let transcriber = Transcriber::spanish()?;
/// assert_eq!(
///     transcriber.transcribe("Esto es una prueba")?,
///     "ˈes.to|es|ˈu.na|ˈpɾwe.βa"
/// );
/// assert_eq!(transcriber.syllabify("Esto es una prueba"), "ˈes.to|es|ˈu.na|ˈprue.ba");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Transcriber {
    phonology: &'static dyn Phonology,
    separators: Separators,
}

impl Transcriber {
    /// Create a transcriber for a language with default separators.
    pub fn new(language: Language) -> Result<Self> {
        Ok(Transcriber {
            phonology: language.phonology()?,
            separators: Separators::default(),
        })
    }

    /// Create a transcriber from a language tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`](crate::error::Error::UnsupportedLanguage)
    /// for an unknown tag.
    pub fn for_tag(tag: &str) -> Result<Self> {
        Self::new(Language::from_tag(tag)?)
    }

    /// Create a Castilian Spanish transcriber.
    pub fn spanish() -> Result<Self> {
        Self::new(Language::Spanish)
    }

    /// Create a transcriber over any phonology.
    pub fn with_phonology(phonology: &'static dyn Phonology) -> Self {
        Transcriber {
            phonology,
            separators: Separators::default(),
        }
    }

    /// Replace the separators.
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// The separators in use.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Tag of the language in use.
    pub fn language_tag(&self) -> &'static str {
        self.phonology.tag()
    }

    /// Syllabify, stress and transcribe a single word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedSymbol`](crate::error::Error::UnmappedSymbol) if the
    /// word contains a letter without a rule.
    pub fn analyze_word(&self, word: &str) -> Result<Word> {
        let lowered: String = word.chars().map(fold_case).collect();
        let syllables = self.phonology.syllabify(&lowered);
        let stress = self.phonology.find_stress(&syllables);

        let mut phonemes = Vec::with_capacity(syllables.len());
        for (i, syllable) in syllables.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| syllables[p]);
            let next = syllables.get(i + 1).copied();
            phonemes.push(self.phonology.transcribe_syllable(
                syllable,
                Neighbor::trailing(previous),
                Neighbor::leading(next),
            )?);
        }

        trace!(word = %lowered, syllables = syllables.len(), ?stress, "analyzed word");

        Ok(Word {
            syllables: syllables.into_iter().map(str::to_string).collect(),
            phonemes,
            stress,
        })
    }

    /// Analyze a pre-segmented phrase.
    pub fn analyze_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Phrase> {
        let words = words
            .iter()
            .map(|word| self.analyze_word(word.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Phrase { words })
    }

    /// Segment and analyze a text.
    pub fn analyze(&self, text: &str) -> Result<Transcription> {
        let segmented = segment(text);

        #[cfg(feature = "rayon")]
        let phrases = segmented
            .par_iter()
            .map(|words| self.analyze_words(words))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "rayon"))]
        let phrases = segmented
            .iter()
            .map(|words| self.analyze_words(words))
            .collect::<Result<Vec<_>>>()?;

        Ok(Transcription { phrases })
    }

    /// Transcribe a text into a single string.
    ///
    /// Empty text gives an empty string.
    pub fn transcribe(&self, text: &str) -> Result<String> {
        Ok(self.analyze(text)?.render(&self.separators))
    }

    /// Transcribe a single word.
    pub fn transcribe_word(&self, word: &str) -> Result<String> {
        Ok(self.analyze_word(word)?.render(&self.separators))
    }

    /// Transcribe pre-segmented words as one phrase.
    pub fn transcribe_words<S: AsRef<str>>(&self, words: &[S]) -> Result<String> {
        let transcription = Transcription {
            phrases: vec![self.analyze_words(words)?],
        };
        Ok(transcription.render(&self.separators))
    }

    /// Syllabify a text and mark stress without transcribing it.
    ///
    /// This never fails: letters without phoneme rules are kept as written.
    pub fn syllabify(&self, text: &str) -> String {
        let phrases = segment(text)
            .iter()
            .map(|words| Phrase {
                words: words.iter().map(|word| self.syllabify_word(word)).collect(),
            })
            .collect();
        Transcription { phrases }.render_orthographic(&self.separators)
    }

    fn syllabify_word(&self, word: &str) -> Word {
        let syllables = self.phonology.syllabify(word);
        let stress = self.phonology.find_stress(&syllables);
        Word {
            syllables: syllables.into_iter().map(str::to_string).collect(),
            phonemes: Vec::new(),
            stress,
        }
    }
}

impl fmt::Debug for Transcriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcriber")
            .field("language", &self.phonology.tag())
            .field("separators", &self.separators)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn spanish() -> Transcriber {
        Transcriber::spanish().unwrap()
    }

    #[test]
    fn test_reference_sentence() {
        assert_eq!(
            spanish().transcribe("Esto es una prueba").unwrap(),
            "ˈes.to|es|ˈu.na|ˈpɾwe.βa"
        );
    }

    #[test]
    fn test_ascii_stress() {
        let transcriber = spanish().with_separators(Separators::ascii());
        assert_eq!(
            transcriber.transcribe("Esto es una prueba").unwrap(),
            "'es.to|es|'u.na|'pɾwe.βa"
        );
    }

    #[test]
    fn test_phrases() {
        assert_eq!(
            spanish().transcribe("Hola, ¿cómo estás? Muy bien.").unwrap(),
            "ˈo.la/ˈso.mo|es.ˈtas/mui|bjen"
        );
    }

    #[test]
    fn test_custom_separators() {
        let separators = Separators::default()
            .with_phrase('#')
            .with_word(' ')
            .with_syllable('-')
            .with_stress('*');
        let transcriber = spanish().with_separators(separators);
        assert_eq!(
            transcriber.transcribe("el niño, la casa").unwrap(),
            "el *ni-ɲo#la *ka-sa"
        );
    }

    #[test]
    fn test_analyze_word() {
        let word = spanish().analyze_word("Página").unwrap();
        assert_eq!(word.syllables, vec!["pá", "gi", "na"]);
        assert_eq!(word.phonemes, vec!["pa", "xi", "na"]);
        assert_eq!(word.stress, Some(0));
    }

    #[test]
    fn test_transcribe_word() {
        let transcriber = spanish();
        assert_eq!(transcriber.transcribe_word("problema").unwrap(), "pɾo.ˈβle.ma");
        assert_eq!(transcriber.transcribe_word("verdad").unwrap(), "beɾ.ˈðað");
        assert_eq!(transcriber.transcribe_word("rey").unwrap(), "rei");
        assert_eq!(transcriber.transcribe_word("").unwrap(), "");
    }

    #[test]
    fn test_transcribe_words() {
        assert_eq!(
            spanish().transcribe_words(&["esto", "es"]).unwrap(),
            "ˈes.to|es"
        );
    }

    #[test]
    fn test_syllabify() {
        assert_eq!(
            spanish().syllabify("Esto es una prueba"),
            "ˈes.to|es|ˈu.na|ˈprue.ba"
        );
        assert_eq!(spanish().syllabify("ça va"), "ça|va");
    }

    #[test]
    fn test_empty_text() {
        let transcriber = spanish();
        assert_eq!(transcriber.transcribe("").unwrap(), "");
        assert!(transcriber.analyze("  ¿? ").unwrap().is_empty());
    }

    #[test]
    fn test_unmapped_symbol_fails_the_call() {
        let err = spanish().transcribe("hola 42").unwrap_err();
        assert!(matches!(err, Error::UnmappedSymbol { symbol: '4', .. }));
        // Shared tables are untouched
        assert_eq!(spanish().transcribe("hola").unwrap(), "ˈo.la");
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            Transcriber::for_tag("fr_FR"),
            Err(Error::UnsupportedLanguage(tag)) if tag == "fr_FR"
        ));
        assert_eq!(Transcriber::for_tag("es").unwrap().language_tag(), "es_ES");
    }

    #[test]
    fn test_words_iterator() {
        let transcription = spanish().analyze("uno, dos tres").unwrap();
        assert_eq!(transcription.phrases.len(), 2);
        assert_eq!(transcription.words().count(), 3);
    }
}
