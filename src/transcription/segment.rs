//! Splitting text into phrases and words.

/// Characters that end a phrase.
pub const PHRASE_DELIMITERS: &[char] = &[
    '.', ',', ';', ':', '?', '!', '¡', '¿', '…', '(', ')', '[', ']', '"', '«', '»', '“', '”',
    '\u{2014}', '\u{2013}',
];

/// Lowercase `text` and split it into phrases of words.
///
/// Phrases end at [`PHRASE_DELIMITERS`]; words are separated by whitespace. Phrases
/// without words are dropped, so empty or punctuation-only text gives no phrases.
pub fn segment(text: &str) -> Vec<Vec<String>> {
    text.to_lowercase()
        .split(|c: char| PHRASE_DELIMITERS.contains(&c))
        .map(|phrase| {
            phrase
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|words| !words.is_empty())
        .collect()
}
