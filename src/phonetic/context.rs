//! Phonological context: neighbor symbols and the character classes rules consult.

use std::fmt;

use super::digraphs::normalize;
use crate::hyphenation::pattern::fold_case;

/// Symbol standing for a word boundary with no adjacent letter.
pub const PAUSE: char = '‖';

// ============================================================================
// Neighbor context
// ============================================================================

/// The symbol on one side of a letter.
///
/// Inside a syllable this is always a letter. At the syllable edges it is the
/// nearest symbol of the neighboring syllable, or [`Neighbor::Pause`] at the word
/// edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Word boundary
    Pause,
    /// A normalized letter
    Letter(char),
}

impl Neighbor {
    /// Context contributed by a preceding syllable: its last normalized symbol.
    pub fn trailing(syllable: Option<&str>) -> Self {
        syllable
            .and_then(|s| normalized(s).chars().last())
            .map_or(Neighbor::Pause, Neighbor::Letter)
    }

    /// Context contributed by a following syllable: its first normalized symbol.
    pub fn leading(syllable: Option<&str>) -> Self {
        syllable
            .and_then(|s| normalized(s).chars().next())
            .map_or(Neighbor::Pause, Neighbor::Letter)
    }

    /// Returns true at a word boundary.
    #[inline]
    pub fn is_pause(self) -> bool {
        matches!(self, Neighbor::Pause)
    }

    /// The letter, if this is not a pause.
    #[inline]
    pub fn letter(self) -> Option<char> {
        match self {
            Neighbor::Letter(c) => Some(c),
            Neighbor::Pause => None,
        }
    }

    /// Returns true if this is a letter from `class`.
    #[inline]
    pub fn is_in(self, class: &[char]) -> bool {
        matches!(self, Neighbor::Letter(c) if class.contains(&c))
    }

    /// Returns true for a pause or a letter from `class`.
    #[inline]
    pub fn is_pause_or_in(self, class: &[char]) -> bool {
        self.is_pause() || self.is_in(class)
    }
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neighbor::Pause => write!(f, "{}", PAUSE),
            Neighbor::Letter(c) => write!(f, "{}", c),
        }
    }
}

fn normalized(syllable: &str) -> String {
    let lowered: String = syllable.chars().map(fold_case).collect();
    normalize(&lowered)
}

/// Everything a letter rule may inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterContext {
    /// Symbol before the letter
    pub previous: Neighbor,
    /// Symbol after the letter
    pub next: Neighbor,
    /// Position of the letter within its normalized syllable
    pub index: usize,
}

// ============================================================================
// Character classes
// ============================================================================

/// Named character classes consulted by the rules.
///
/// Classes hold normalized symbols, so digraph placeholders (`R`, `ʎ`, `ʧ`, `ɡ`)
/// appear alongside plain letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSets {
    /// m n ñ
    pub nasals: &'static [char],
    /// l
    pub laterals: &'static [char],
    /// Plain, accented and diaeresis vowels
    pub vowels: &'static [char],
    /// Vowels plus voiced consonants and glides
    pub voiced: &'static [char],
    /// Consonants that voice a preceding sibilant
    pub voiced_consonants: &'static [char],
    /// f v
    pub labiodentals: &'static [char],
    /// Dental and alveolar consonants
    pub coronals: &'static [char],
    /// y ʎ
    pub palatals: &'static [char],
    /// b m p
    pub bilabials: &'static [char],
    /// Velar consonants, including `c` and the hard `ɡ` of `gu`
    pub velars: &'static [char],
}

/// Classes for the Castilian rule set.
pub const CASTILIAN: ContextSets = ContextSets {
    nasals: &['m', 'n', 'ñ'],
    laterals: &['l'],
    vowels: &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü'],
    voiced: &[
        'a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü', 'b', 'd', 'g', 'l', 'm', 'n',
        'r', 'R', 'v', 'w',
    ],
    voiced_consonants: &['b', 'd', 'g', 'l', 'm', 'n', 'r', 'R', 'v', 'ʎ', 'ɡ'],
    labiodentals: &['f', 'v'],
    coronals: &['d', 'l', 'r', 'n', 's', 't', 'z', 'ʧ', 'R'],
    palatals: &['y', 'ʎ'],
    bilabials: &['b', 'm', 'p'],
    velars: &['g', 'j', 'k', 'q', 'c', 'ɡ'],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_and_leading() {
        assert_eq!(Neighbor::trailing(None), Neighbor::Pause);
        assert_eq!(Neighbor::trailing(Some("can")), Neighbor::Letter('n'));
        assert_eq!(Neighbor::leading(Some("rro")), Neighbor::Letter('R'));
        assert_eq!(Neighbor::trailing(Some("")), Neighbor::Pause);
        assert_eq!(Neighbor::leading(Some("Ma")), Neighbor::Letter('m'));
    }

    #[test]
    fn test_class_membership() {
        let n = Neighbor::Letter('n');
        assert!(n.is_in(CASTILIAN.nasals));
        assert!(!n.is_in(CASTILIAN.vowels));
        assert!(!Neighbor::Pause.is_in(CASTILIAN.nasals));
        assert!(Neighbor::Pause.is_pause_or_in(CASTILIAN.nasals));
        assert_eq!(n.letter(), Some('n'));
        assert_eq!(Neighbor::Pause.letter(), None);
    }

    #[test]
    fn test_voiced_covers_voiced_consonants() {
        for c in ['b', 'd', 'g', 'l', 'm', 'n', 'r', 'R', 'v'] {
            assert!(CASTILIAN.voiced.contains(&c));
            assert!(CASTILIAN.voiced_consonants.contains(&c));
        }
        assert!(!CASTILIAN.voiced.contains(&'s'));
    }

    #[test]
    fn test_pause_display() {
        assert_eq!(Neighbor::Pause.to_string(), "‖");
        assert_eq!(Neighbor::Letter('ʎ').to_string(), "ʎ");
    }
}
