//! Per-syllable transcription.

use super::context::{LetterContext, Neighbor};
use super::digraphs::normalize;
use super::rules::rule_for;
use crate::error::{Error, Result};
use crate::hyphenation::pattern::fold_case;

/// Transcribe a syllable given its neighboring syllables.
///
/// The previous context is the last symbol of `previous` and the next context the
/// first symbol of `next`, both after digraph normalization; a missing neighbor is
/// a pause.
///
/// # Examples
///
/// ```rust
/// # fn main() -> silabeo::Result<()> {
/// use silabeo::phonetic::transcribe_syllable;
///
/// assert_eq!(transcribe_syllable("prue", None, Some("ba"))?, "pɾwe");
/// assert_eq!(transcribe_syllable("ba", Some("prue"), None)?, "βa");
/// # Ok(())
/// # }
/// ```
pub fn transcribe_syllable(
    syllable: &str,
    previous: Option<&str>,
    next: Option<&str>,
) -> Result<String> {
    transcribe_with_context(
        syllable,
        Neighbor::trailing(previous),
        Neighbor::leading(next),
    )
}

/// Transcribe a syllable with explicit boundary context.
///
/// # Arguments
///
/// * `syllable` - The orthographic syllable
/// * `previous` - Symbol before the first letter
/// * `next` - Symbol after the last letter
///
/// # Errors
///
/// Returns [`Error::UnmappedSymbol`] for the first letter with no rule.
pub fn transcribe_with_context(
    syllable: &str,
    previous: Neighbor,
    next: Neighbor,
) -> Result<String> {
    let lowered: String = syllable.chars().map(fold_case).collect();
    let symbols: Vec<char> = normalize(&lowered).chars().collect();
    let mut phonemes = String::with_capacity(symbols.len() * 2);

    for (index, &symbol) in symbols.iter().enumerate() {
        let ctx = LetterContext {
            previous: match index {
                0 => previous,
                _ => Neighbor::Letter(symbols[index - 1]),
            },
            next: symbols
                .get(index + 1)
                .map_or(next, |&c| Neighbor::Letter(c)),
            index,
        };

        let rule = rule_for(symbol).ok_or_else(|| Error::UnmappedSymbol {
            symbol,
            syllable: lowered.clone(),
        })?;
        phonemes.push_str(rule.apply(&ctx));
    }

    Ok(phonemes)
}
