//! The 26-letter alphabet and modulo-26 arithmetic.
//!
//! All positional arithmetic in the machine happens on letter indices
//! `0..26`. [`Letter`] carries that range in the type so rotor and
//! plugboard code never has to re-check it.

use std::fmt;

/// Ordered alphabet the machine operates on.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters on a rotor.
pub const ALPHABET_LEN: u8 = 26;

/// A single letter of the alphabet, stored as its index `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Converts a character to a letter.
    ///
    /// Lowercase ASCII letters are folded to uppercase.
    ///
    /// # Returns
    /// `None` for anything that is not an ASCII letter.
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Builds a letter from any integer index, reducing it modulo 26.
    pub fn from_index(index: i32) -> Self {
        Letter(modulo(index))
    }

    /// Index of the letter in the alphabet (`A` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// The uppercase character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Shifts the letter by `offset` positions around the alphabet.
    pub(crate) fn shift(self, offset: i32) -> Self {
        Letter::from_index(self.0 as i32 + offset)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Reduces `n` into `0..26`, wrapping negative values.
pub(crate) fn modulo(n: i32) -> u8 {
    n.rem_euclid(ALPHABET_LEN as i32) as u8
}

/// Letter at position `index` of a 26-character wiring string.
///
/// Wiring tables are static ASCII permutations, so indexing is by byte.
pub(crate) fn wired_letter(wiring: &str, index: u8) -> Letter {
    Letter(wiring.as_bytes()[index as usize] - b'A')
}
