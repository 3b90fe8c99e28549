//! Digraph normalization.
//!
//! Two-letter spellings of a single sound are replaced by one placeholder symbol
//! before rules are dispatched, scanning left to right without overlap.

/// Placeholder for `rr`.
pub const TRILL: char = 'R';
/// Placeholder for `ll`.
pub const PALATAL_LATERAL: char = 'ʎ';
/// Placeholder for `ch`.
pub const AFFRICATE: char = 'ʧ';
/// Placeholder for `gu` before a front vowel (U+0261, distinct from the letter `g`).
pub const HARD_G: char = 'ɡ';
/// Placeholder for `qu`.
pub const VOICELESS_VELAR: char = 'k';

/// The digraph table: first letter, second letter, placeholder.
pub const DIGRAPHS: &[(char, char, char)] = &[
    ('r', 'r', TRILL),
    ('l', 'l', PALATAL_LATERAL),
    ('c', 'h', AFFRICATE),
    ('g', 'u', HARD_G),
    ('q', 'u', VOICELESS_VELAR),
];

const FRONT_VOWELS: &[char] = &['e', 'i', 'é', 'í'];

/// Placeholder for the pair `(first, second)` given the letter that follows it.
///
/// `gu` only spells a hard g before `e` or `i`; elsewhere the `u` is pronounced.
#[inline]
pub fn digraph(first: char, second: char, following: Option<char>) -> Option<char> {
    let (_, _, placeholder) = DIGRAPHS
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)?;

    if *placeholder == HARD_G && !following.is_some_and(|c| FRONT_VOWELS.contains(&c)) {
        return None;
    }
    Some(*placeholder)
}

/// Replace every digraph in a lowercase syllable with its placeholder.
///
/// # Examples
///
/// ```rust
/// use silabeo::phonetic::normalize;
///
/// assert_eq!(normalize("rro"), "Ro");
/// assert_eq!(normalize("gue"), "ɡe");
/// assert_eq!(normalize("gua"), "gua");
/// ```
pub fn normalize(syllable: &str) -> String {
    let chars: Vec<char> = syllable.chars().collect();
    let mut out = String::with_capacity(syllable.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(&second) = chars.get(i + 1) {
            if let Some(placeholder) = digraph(chars[i], second, chars.get(i + 2).copied()) {
                out.push(placeholder);
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
