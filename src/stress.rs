//! Prosodic stress assignment.
//!
//! A written accent marks the stressed syllable. Without one, Spanish words ending
//! in a vowel, `n` or `s` are stressed on the penultimate syllable and all others on
//! the final syllable. Monosyllables receive no stress mark.

use crate::hyphenation::pattern::fold_case;

/// Vowels carrying a written acute accent.
pub const ACCENTED_VOWELS: &[char] = &['á', 'é', 'í', 'ó', 'ú'];

/// Final letters that put default stress on the penultimate syllable.
pub const GRAVE_ENDINGS: &[char] = &['a', 'e', 'i', 'o', 'u', 'n', 's'];

/// Returns true if the syllable contains a written accent.
#[inline]
pub fn has_written_accent(syllable: &str) -> bool {
    syllable
        .chars()
        .any(|c| ACCENTED_VOWELS.contains(&fold_case(c)))
}

/// Index of the stressed syllable, or `None` for monosyllables and empty input.
///
/// # Arguments
///
/// * `syllables` - The syllables of one word, in order
///
/// # Examples
///
/// ```rust
/// use silabeo::stress::find_stress;
///
/// assert_eq!(find_stress(&["pá", "gi", "na"]), Some(0));
/// assert_eq!(find_stress(&["pro", "ble", "ma"]), Some(1));
/// assert_eq!(find_stress(&["ver", "dad"]), Some(1));
/// assert_eq!(find_stress(&["sol"]), None);
/// ```
pub fn find_stress<S: AsRef<str>>(syllables: &[S]) -> Option<usize> {
    if syllables.len() < 2 {
        return None;
    }

    if let Some(idx) = syllables
        .iter()
        .position(|s| has_written_accent(s.as_ref()))
    {
        return Some(idx);
    }

    let last = syllables.len() - 1;
    let ending = syllables[last]
        .as_ref()
        .chars()
        .last()
        .map(fold_case);

    match ending {
        Some(c) if GRAVE_ENDINGS.contains(&c) => Some(last - 1),
        _ => Some(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_accent_wins() {
        assert_eq!(find_stress(&["pá", "gi", "na"]), Some(0));
        assert_eq!(find_stress(&["o", "ja", "lá"]), Some(2));
        assert_eq!(find_stress(&["co", "ra", "zón"]), Some(2));
    }

    #[test]
    fn test_grave_default() {
        assert_eq!(find_stress(&["pro", "ble", "ma"]), Some(1));
        assert_eq!(find_stress(&["can", "tan", "do"]), Some(1));
        assert_eq!(find_stress(&["jo", "ven"]), Some(0));
        assert_eq!(find_stress(&["me", "sas"]), Some(0));
    }

    #[test]
    fn test_acute_default() {
        assert_eq!(find_stress(&["ver", "dad"]), Some(1));
        assert_eq!(find_stress(&["ha", "blar"]), Some(1));
        assert_eq!(find_stress(&["re", "loj"]), Some(1));
    }

    #[test]
    fn test_monosyllables_unstressed() {
        assert_eq!(find_stress(&["sol"]), None);
        assert_eq!(find_stress(&["más"]), None);
        assert_eq!(find_stress::<&str>(&[]), None);
    }

    #[test]
    fn test_uppercase_ending() {
        assert_eq!(find_stress(&["ES", "TO"]), Some(0));
        assert_eq!(find_stress(&["VER", "DAD"]), Some(1));
        assert_eq!(find_stress(&["PÁ", "GI", "NA"]), Some(0));
    }

    #[test]
    fn test_owned_syllables() {
        let syllables = vec!["ár".to_string(), "bol".to_string()];
        assert_eq!(find_stress(&syllables), Some(0));
    }
}
