//! Digit-annotated hyphenation patterns.
//!
//! A pattern token such as `4a3bri1g2` interleaves letters with single decimal
//! digits. Stripping the digits yields the letter sequence (`abrig`); the digit
//! found after letter `i` is the weight of the break following that letter, and a
//! leading digit is the weight of the break before the first letter. A `.` at either
//! end anchors the pattern to a word boundary.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Inline capacity for pattern weights; almost every pattern is shorter.
pub(crate) type Points = SmallVec<[u8; 8]>;

/// The word-boundary marker used in patterns and padded words.
pub const BOUNDARY: char = '.';

/// A parsed hyphenation pattern.
///
/// `points` always has one more entry than `letters`: `points[0]` is the weight
/// before the first letter and `points[i + 1]` the weight after letter `i`.
///
/// # Examples
///
/// ```rust
/// # fn main() -> silabeo::Result<()> {
/// use silabeo::hyphenation::Pattern;
///
/// let pattern = Pattern::parse("a1bc3d4")?;
/// assert_eq!(pattern.letters(), &['a', 'b', 'c', 'd']);
/// assert_eq!(pattern.points(), &[0, 1, 0, 3, 4]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Pattern {
    letters: Vec<char>,
    points: Points,
}

impl Pattern {
    /// Parse a single pattern token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] if the token has no letters, has two
    /// consecutive digits, contains a boundary marker away from its ends, or contains
    /// a character that is neither a letter, a digit nor `.`.
    pub fn parse(token: &str) -> Result<Self> {
        let mut letters = Vec::with_capacity(token.len());
        let mut points = Points::new();
        points.push(0);
        let mut after_digit = false;

        for c in token.chars() {
            if let Some(digit) = c.to_digit(10) {
                if after_digit {
                    return Err(malformed(token, "weights must be single digits"));
                }
                if let Some(last) = points.last_mut() {
                    *last = digit as u8;
                }
                after_digit = true;
            } else if c == BOUNDARY || c.is_alphabetic() {
                letters.push(fold_case(c));
                points.push(0);
                after_digit = false;
            } else {
                return Err(malformed(token, "unexpected character"));
            }
        }

        if letters.iter().all(|&c| c == BOUNDARY) {
            return Err(malformed(token, "pattern has no letters"));
        }

        let last = letters.len() - 1;
        let misplaced_boundary = letters
            .iter()
            .enumerate()
            .any(|(i, &c)| c == BOUNDARY && i != 0 && i != last);
        if misplaced_boundary {
            return Err(malformed(token, "boundary marker inside pattern"));
        }

        Ok(Pattern { letters, points })
    }

    /// Create a pattern from already decomposed parts.
    ///
    /// Returns `None` unless `points` has exactly one more entry than `letters`.
    pub fn from_parts(letters: Vec<char>, points: &[u8]) -> Option<Self> {
        if letters.is_empty() || points.len() != letters.len() + 1 {
            return None;
        }
        Some(Pattern {
            letters,
            points: Points::from_slice(points),
        })
    }

    /// The letter sequence, digits stripped.
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Break weights, one more than there are letters.
    #[inline]
    pub fn points(&self) -> &[u8] {
        &self.points
    }

    pub(crate) fn into_parts(self) -> (Vec<char>, Points) {
        (self.letters, self.points)
    }
}

impl fmt::Display for Pattern {
    /// Writes the pattern back in token form, omitting zero weights.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.letters.iter().enumerate() {
            if self.points[i] > 0 {
                write!(f, "{}", self.points[i])?;
            }
            write!(f, "{}", letter)?;
        }
        match self.points.last() {
            Some(&w) if w > 0 => write!(f, "{}", w),
            _ => Ok(()),
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::parse(s)
    }
}

/// Parse whitespace-separated pattern tokens.
///
/// Empty input yields an empty list. The first malformed token aborts parsing.
pub fn parse_patterns(text: &str) -> Result<Vec<Pattern>> {
    text.split_whitespace().map(Pattern::parse).collect()
}

/// Lowercase a single character without changing the character count.
#[inline]
pub(crate) fn fold_case(c: char) -> char {
    if c.is_lowercase() {
        c
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

fn malformed(token: &str, reason: &'static str) -> Error {
    Error::MalformedPattern {
        token: token.to_string(),
        reason,
    }
}
