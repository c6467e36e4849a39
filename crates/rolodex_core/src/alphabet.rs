//! The alphabet rail and name classification.
//!
//! The rail has 27 symbols: `A` through `Z` followed by the catch-all `#`.
//! Classification looks only at the first character of a name:
//!
//! - a logographic first character (CJK unified ideographs `U+4E00..=U+9FA5`)
//!   goes to `#`
//! - otherwise the character is uppercased, and a single `A`..`Z` result picks
//!   that letter
//! - anything else (digits, symbols, emoji, accented letters, empty names)
//!   goes to `#`

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Every rail symbol, in display order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ#";

/// Characters classified as logographic.
pub const LOGOGRAPHIC_RANGE: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

const LETTER_COUNT: u8 = 26;

/// One symbol of the alphabet rail.
///
/// Keys order by rail position, so `Z < #`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct BucketKey(u8);

impl BucketKey {
    /// The catch-all bucket `#`.
    pub const OTHER: Self = Self(LETTER_COUNT);

    /// Number of keys on the rail.
    pub const COUNT: usize = LETTER_COUNT as usize + 1;

    /// Returns the key for an uppercase ASCII letter.
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the key at a rail position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the rail position of this key.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the rail symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        if self.0 == LETTER_COUNT {
            '#'
        } else {
            (b'A' + self.0) as char
        }
    }

    /// Returns true for the catch-all key.
    #[must_use]
    pub const fn is_other(self) -> bool {
        self.0 == LETTER_COUNT
    }

    /// Iterates over every key in rail order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl TryFrom<char> for BucketKey {
    type Error = CoreError;

    /// Parses a rail symbol. Lowercase letters are accepted.
    fn try_from(c: char) -> CoreResult<Self> {
        if c == '#' {
            return Ok(Self::OTHER);
        }
        Self::letter(c.to_ascii_uppercase()).ok_or(CoreError::InvalidBucketKey(c))
    }
}

impl From<BucketKey> for char {
    fn from(key: BucketKey) -> Self {
        key.as_char()
    }
}

impl fmt::Debug for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BucketKey({})", self.as_char())
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Returns true if `c` belongs to the logographic range.
#[inline]
#[must_use]
pub fn is_logographic(c: char) -> bool {
    LOGOGRAPHIC_RANGE.contains(&c)
}

/// Picks the bucket for a display name.
#[must_use]
pub fn classify(name: &str) -> BucketKey {
    let Some(first) = name.chars().next() else {
        return BucketKey::OTHER;
    };
    if is_logographic(first) {
        return BucketKey::OTHER;
    }

    // Some characters uppercase to several ('ß' -> "SS"); those stay in '#'.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => BucketKey::letter(c).unwrap_or(BucketKey::OTHER),
        _ => BucketKey::OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> BucketKey {
        BucketKey::try_from(c).unwrap()
    }

    #[test]
    fn alphabet_matches_keys() {
        let rail: String = BucketKey::all().map(BucketKey::as_char).collect();
        assert_eq!(rail, ALPHABET);
        assert_eq!(BucketKey::all().len(), BucketKey::COUNT);
    }

    #[test]
    fn keys_order_by_rail_position() {
        assert!(key('A') < key('B'));
        assert!(key('Z') < BucketKey::OTHER);
        assert_eq!(BucketKey::OTHER.index(), 26);
        assert_eq!(BucketKey::from_index(26), Some(BucketKey::OTHER));
        assert_eq!(BucketKey::from_index(27), None);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!(key('q'), key('Q'));
        assert!(key('#').is_other());
        assert_eq!(
            BucketKey::try_from('1'),
            Err(CoreError::InvalidBucketKey('1'))
        );
        assert_eq!(
            BucketKey::try_from('é'),
            Err(CoreError::InvalidBucketKey('é'))
        );
    }

    #[test]
    fn logographic_range_bounds() {
        assert!(is_logographic('\u{4e00}'));
        assert!(is_logographic('张'));
        assert!(is_logographic('\u{9fa5}'));
        assert!(!is_logographic('\u{9fa6}'));
        assert!(!is_logographic('\u{4dff}'));
        assert!(!is_logographic('A'));
    }

    #[test]
    fn classify_letters_case_insensitively() {
        assert_eq!(classify("alice"), key('A'));
        assert_eq!(classify("Bob"), key('B'));
        assert_eq!(classify("zed"), key('Z'));
    }

    #[test]
    fn classify_logographic_to_other() {
        assert_eq!(classify("张三"), BucketKey::OTHER);
        assert_eq!(classify("李A"), BucketKey::OTHER);
    }

    #[test]
    fn classify_fallbacks_to_other() {
        assert_eq!(classify(""), BucketKey::OTHER);
        assert_eq!(classify("42 Street"), BucketKey::OTHER);
        assert_eq!(classify("@home"), BucketKey::OTHER);
        assert_eq!(classify("😀 smile"), BucketKey::OTHER);
        assert_eq!(classify("émile"), BucketKey::OTHER);
        assert_eq!(classify("ßeta"), BucketKey::OTHER);
        assert_eq!(classify(" alice"), BucketKey::OTHER);
        // Hiragana is outside the logographic range but still not a letter.
        assert_eq!(classify("さくら"), BucketKey::OTHER);
    }

    #[test]
    fn classify_only_reads_first_character() {
        assert_eq!(classify("a张"), key('A'));
        assert_eq!(classify("A1"), key('A'));
    }

    #[test]
    fn serde_uses_rail_symbol() {
        let json = serde_json::to_string(&BucketKey::OTHER).unwrap();
        assert_eq!(json, "\"#\"");
        let parsed: BucketKey = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(parsed, key('M'));
        assert!(serde_json::from_str::<BucketKey>("\"1\"").is_err());
    }
}
