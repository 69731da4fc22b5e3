//! Plugboard (Steckerbrett): letter-pair swaps before and after the rotors.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Swaps `c` with its partner if it appears in `pairs`.
///
/// Both members of each pair are checked, and the first matching pair wins.
/// Characters named in no pair are returned unchanged.
///
/// # Examples
///
/// ```
/// use enigma::plugboard::plugboard_swap;
///
/// let pairs = [('A', 'B'), ('C', 'D')];
/// assert_eq!(plugboard_swap('A', &pairs), 'B');
/// assert_eq!(plugboard_swap('D', &pairs), 'C');
/// assert_eq!(plugboard_swap('Z', &pairs), 'Z');
/// ```
pub fn plugboard_swap(c: char, pairs: &[(char, char)]) -> char {
    for &(a, b) in pairs {
        if c == a {
            return b;
        }
        if c == b {
            return a;
        }
    }
    c
}

/// A validated set of disjoint plugboard pairs.
///
/// Unplugged letters map to themselves. The lookup table is an involution,
/// so the same board undoes its own swap on the return path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(char, char)>,
    table: [Letter; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            pairs: Vec::new(),
            table: identity(),
        }
    }
}

impl Plugboard {
    /// Builds a plugboard from letter pairs.
    ///
    /// Lowercase letters are folded to uppercase.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidPlugLetter`] if a pair names a non-letter.
    /// - [`EnigmaError::SelfPairedPlug`] if a pair connects a letter to itself.
    /// - [`EnigmaError::DuplicatePlugLetter`] if a letter is in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// assert!(Plugboard::new(&[('a', 'b'), ('C', 'D')]).is_ok());
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut table = identity();
        let mut used = [false; ALPHABET_LEN as usize];
        let mut normalized = Vec::with_capacity(pairs.len());

        for &(a, b) in pairs {
            let la = Letter::from_char(a).ok_or(EnigmaError::InvalidPlugLetter(a))?;
            let lb = Letter::from_char(b).ok_or(EnigmaError::InvalidPlugLetter(b))?;
            if la == lb {
                return Err(EnigmaError::SelfPairedPlug(la.to_char()));
            }
            for l in [la, lb] {
                if used[l.index() as usize] {
                    return Err(EnigmaError::DuplicatePlugLetter(l.to_char()));
                }
                used[l.index() as usize] = true;
            }
            table[la.index() as usize] = lb;
            table[lb.index() as usize] = la;
            normalized.push((la.to_char(), lb.to_char()));
        }

        Ok(Plugboard {
            pairs: normalized,
            table,
        })
    }

    /// The normalized (uppercase) pairs, in the order given.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// Number of cables plugged in.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no cables are plugged in.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Swaps a letter through the board.
    pub fn swap(&self, c: Letter) -> Letter {
        self.table[c.index() as usize]
    }
}

fn identity() -> [Letter; 26] {
    let mut table = [Letter::from_index(0); 26];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = Letter::from_index(i as i32);
    }
    table
}
