//! The RNA base alphabet.
//!
//! `Base` is the only symbol type sequences are built from. Raw input
//! (keyboard characters) crosses into the typed alphabet exactly once, at
//! [`Base::from_char`] or [`parse_sequence`]; everything past that boundary
//! is total and cannot hold an out-of-alphabet symbol.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four RNA bases.
///
/// ```
/// use rna_relay::core::Base;
///
/// assert_eq!(Base::from_char('g'), Some(Base::G));
/// assert_eq!(Base::from_char('T'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    /// All four bases, in table order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// Table index of this base (A=0, C=1, G=2, U=3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a single character, case-insensitively.
    ///
    /// Returns `None` for anything outside the alphabet. This is the
    /// silent-discard path for input adapters: a non-matching key produces
    /// no engine call.
    #[must_use]
    pub fn from_char(c: char) -> Option<Base> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'U' => Some(Base::U),
            _ => None,
        }
    }

    /// The uppercase character for this base.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A character outside the `A`/`C`/`G`/`U` alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid base {0:?}: expected one of A, C, G, U")]
pub struct InvalidBase(pub char);

impl TryFrom<char> for Base {
    type Error = InvalidBase;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Base::from_char(c).ok_or(InvalidBase(c))
    }
}

/// Parse a whole sequence string, case-insensitively.
///
/// Fails on the first character outside the alphabet.
pub fn parse_sequence(s: &str) -> Result<Vec<Base>, InvalidBase> {
    s.chars().map(Base::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_uppercase() {
        assert_eq!(Base::from_char('A'), Some(Base::A));
        assert_eq!(Base::from_char('C'), Some(Base::C));
        assert_eq!(Base::from_char('G'), Some(Base::G));
        assert_eq!(Base::from_char('U'), Some(Base::U));
    }

    #[test]
    fn test_from_char_lowercase() {
        assert_eq!(Base::from_char('a'), Some(Base::A));
        assert_eq!(Base::from_char('u'), Some(Base::U));
    }

    #[test]
    fn test_from_char_rejects_outside_alphabet() {
        // T is DNA, not RNA
        assert_eq!(Base::from_char('T'), None);
        assert_eq!(Base::from_char('x'), None);
        assert_eq!(Base::from_char(' '), None);
        assert_eq!(Base::from_char('1'), None);
    }

    #[test]
    fn test_try_from_error() {
        let err = Base::try_from('z').unwrap_err();
        assert_eq!(err, InvalidBase('z'));
        assert_eq!(
            err.to_string(),
            "invalid base 'z': expected one of A, C, G, U"
        );
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, base) in Base::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
    }

    #[test]
    fn test_display_round_trip() {
        for base in Base::ALL {
            assert_eq!(Base::from_char(base.to_char()), Some(base));
            assert_eq!(format!("{}", base), base.to_char().to_string());
        }
    }

    #[test]
    fn test_parse_sequence_case_insensitive() {
        let upper = parse_sequence("AUGUUUUAG").unwrap();
        let mixed = parse_sequence("augUUUuag").unwrap();
        assert_eq!(upper, mixed);
        assert_eq!(upper.len(), 9);
    }

    #[test]
    fn test_parse_sequence_rejects_first_bad_char() {
        assert_eq!(parse_sequence("AUGX"), Err(InvalidBase('X')));
        assert_eq!(parse_sequence(""), Ok(vec![]));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Base::G).unwrap();
        let back: Base = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Base::G);
    }
}
