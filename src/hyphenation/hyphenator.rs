//! Word hyphenation combining the pattern trie with an exception table.

use std::iter;
use std::sync::OnceLock;

use tracing::debug;

use super::exceptions::ExceptionTable;
use super::pattern::{fold_case, parse_patterns, BOUNDARY};
use super::trie::PatternTrie;
use super::{SPANISH_EXCEPTIONS, SPANISH_PATTERNS};
use crate::error::Result;

/// Words this short are never split.
pub const MIN_SPLIT_LEN: usize = 3;

static SPANISH: OnceLock<Hyphenator> = OnceLock::new();

/// Splits words into syllables with Liang's algorithm.
///
/// A break is allowed wherever the superimposed pattern weight is odd. Breaks
/// computed from patterns are never placed within two characters of either end
/// of the word; exception entries are taken as written.
///
/// With the `serialization` feature only `Serialize` is derived. Compiled
/// hyphenators are loaded through the `serialization` module, which checks the
/// trie and the exception table first.
///
/// # Examples
///
/// ```rust
/// # fn main() -> silabeo::Result<()> {
/// use silabeo::hyphenation::Hyphenator;
///
/// let hyphenator = Hyphenator::spanish()?;
/// assert_eq!(hyphenator.hyphenate("problema"), vec!["pro", "ble", "ma"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Hyphenator {
    trie: PatternTrie,
    exceptions: ExceptionTable,
}

impl Hyphenator {
    /// Build a hyphenator from pattern and exception text.
    ///
    /// # Arguments
    ///
    /// * `patterns` - Whitespace-separated digit-annotated pattern tokens
    /// * `exceptions` - Whitespace-separated hyphenated words
    ///
    /// # Errors
    ///
    /// Returns the first malformed pattern or exception token.
    pub fn new(patterns: &str, exceptions: &str) -> Result<Self> {
        let trie = PatternTrie::from_patterns(parse_patterns(patterns)?);
        let exceptions = ExceptionTable::parse(exceptions)?;
        debug!(exceptions = exceptions.len(), "loaded hyphenation exceptions");
        Ok(Self::from_parts(trie, exceptions))
    }

    /// Assemble a hyphenator from an existing trie and exception table.
    pub fn from_parts(trie: PatternTrie, exceptions: ExceptionTable) -> Self {
        Hyphenator { trie, exceptions }
    }

    /// The process-wide Spanish hyphenator, built from the bundled data on first use.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is malformed; the error is returned on every
    /// call and nothing is cached.
    pub fn spanish() -> Result<&'static Hyphenator> {
        if let Some(hyphenator) = SPANISH.get() {
            return Ok(hyphenator);
        }
        let hyphenator = Hyphenator::new(SPANISH_PATTERNS, SPANISH_EXCEPTIONS)?;
        debug!(
            patterns = hyphenator.trie.pattern_count(),
            "initialized Spanish hyphenator"
        );
        Ok(SPANISH.get_or_init(|| hyphenator))
    }

    /// The pattern trie.
    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    /// The exception table.
    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Returns true if the word has an exception entry, ignoring case.
    pub fn is_exception(&self, word: &str) -> bool {
        let lowered: String = word.chars().map(fold_case).collect();
        self.exceptions.contains(&lowered)
    }

    /// Break-point vector for a word.
    ///
    /// The vector has `len(word) + 3` entries (length in characters); entry
    /// `i + 2` is the weight of the break after character `i`, and odd entries
    /// mark allowed breaks.
    pub fn break_points(&self, word: &str) -> Vec<u8> {
        let lowered: String = word.chars().map(fold_case).collect();
        if let Some(points) = self.exceptions.get(&lowered) {
            return points.to_vec();
        }

        let padded: Vec<char> = iter::once(BOUNDARY)
            .chain(lowered.chars())
            .chain(iter::once(BOUNDARY))
            .collect();
        let mut points = self.trie.superimpose(&padded);

        let n = points.len();
        for idx in [1, 2, n - 2, n - 3] {
            points[idx] = 0;
        }
        points
    }

    /// Split a word into syllables.
    ///
    /// Syllables are slices of `word`, so concatenating them always gives back the
    /// original word, casing included. Empty input gives no syllables and words
    /// shorter than three characters are returned whole.
    pub fn hyphenate<'w>(&self, word: &'w str) -> Vec<&'w str> {
        let len = word.chars().count();
        if len == 0 {
            return Vec::new();
        }
        if len < MIN_SPLIT_LEN {
            return vec![word];
        }

        let points = self.break_points(word);
        let mut syllables = Vec::with_capacity(len / 2 + 1);
        let mut start = 0;

        for (i, (byte_idx, c)) in word.char_indices().enumerate() {
            let end = byte_idx + c.len_utf8();
            if points[i + 2] % 2 == 1 && end < word.len() {
                syllables.push(&word[start..end]);
                start = end;
            }
        }
        syllables.push(&word[start..]);
        syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_SAMPLE: &str = "hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n";

    fn spanish() -> &'static Hyphenator {
        Hyphenator::spanish().unwrap()
    }

    #[test]
    fn test_english_sample_patterns() {
        let hyphenator = Hyphenator::new(ENGLISH_SAMPLE, "project").unwrap();
        assert_eq!(
            hyphenator.hyphenate("hyphenation"),
            vec!["hy", "phen", "ation"]
        );
        assert_eq!(hyphenator.hyphenate("project"), vec!["project"]);
    }

    #[test]
    fn test_bundled_data_loads() {
        let hyphenator = spanish();
        assert_eq!(hyphenator.trie().pattern_count(), 862);
        assert_eq!(hyphenator.exceptions().len(), 2);
        assert!(hyphenator.is_exception("UNA"));
    }

    #[test]
    fn test_spanish_is_shared() {
        let first = spanish() as *const Hyphenator;
        let second = spanish() as *const Hyphenator;
        assert_eq!(first, second);
    }

    #[test]
    fn test_spanish_words() {
        let cases: &[(&str, &[&str])] = &[
            ("esto", &["es", "to"]),
            ("prueba", &["prue", "ba"]),
            ("página", &["pá", "gi", "na"]),
            ("problema", &["pro", "ble", "ma"]),
            ("verdad", &["ver", "dad"]),
            ("perro", &["pe", "rro"]),
            ("calle", &["ca", "lle"]),
            ("guerra", &["gue", "rra"]),
            ("hombre", &["hom", "bre"]),
            ("cantando", &["can", "tan", "do"]),
            ("niño", &["ni", "ño"]),
            ("ciudad", &["ciu", "dad"]),
            ("corazón", &["co", "ra", "zón"]),
            ("universidad", &["uni", "ver", "si", "dad"]),
            ("mariposa", &["ma", "ri", "po", "sa"]),
        ];
        for (word, expected) in cases {
            assert_eq!(&spanish().hyphenate(word), expected, "hyphenating {}", word);
        }
    }

    #[test]
    fn test_edges_stay_attached() {
        assert_eq!(spanish().hyphenate("ojalá"), vec!["oja", "lá"]);
        assert_eq!(spanish().hyphenate("ahora"), vec!["aho", "ra"]);
        assert_eq!(spanish().hyphenate("agua"), vec!["agua"]);
    }

    #[test]
    fn test_exception_overrides_edge_rule() {
        assert_eq!(spanish().hyphenate("una"), vec!["u", "na"]);
        assert_eq!(spanish().hyphenate("Uno"), vec!["U", "no"]);
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(spanish().hyphenate("y"), vec!["y"]);
        assert_eq!(spanish().hyphenate("es"), vec!["es"]);
        assert!(spanish().hyphenate("").is_empty());
    }

    #[test]
    fn test_preserves_input_case() {
        assert_eq!(spanish().hyphenate("Esto"), vec!["Es", "to"]);
        assert_eq!(spanish().hyphenate("PÁGINA"), vec!["PÁ", "GI", "NA"]);
    }

    #[test]
    fn test_break_points_layout() {
        let points = spanish().break_points("esto");
        assert_eq!(points.len(), 7);
        assert_eq!(points[3] % 2, 1);
        for idx in [1, 2, 4, 5] {
            assert_eq!(points[idx], 0);
        }
    }

    #[test]
    fn test_empty_hyphenator_never_splits() {
        let hyphenator = Hyphenator::default();
        assert_eq!(hyphenator.hyphenate("palabra"), vec!["palabra"]);
    }
}
