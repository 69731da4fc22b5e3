//! Error types for the Enigma library.
//!
//! Every error is a caller configuration error raised while building a
//! machine. Encryption itself never fails: characters outside the alphabet
//! pass through unchanged.

use thiserror::Error;

/// Errors produced while configuring an [`Enigma`](crate::Enigma) machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A per-rotor setting list does not have one entry per rotor slot.
    #[error("expected {expected} {field}, found {found}")]
    SlotCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// Rotor id is outside the built-in rotor table.
    #[error("unknown rotor id {id} (valid ids are 0..{available})")]
    UnknownRotor { id: usize, available: usize },
    /// A plugboard pair names a character outside A-Z.
    #[error("plugboard letter {0:?} is not in A-Z")]
    InvalidPlugLetter(char),
    /// A plugboard pair connects a letter to itself.
    #[error("plugboard pair connects {0} to itself")]
    SelfPairedPlug(char),
    /// A letter appears in more than one plugboard pair.
    #[error("plugboard letter {0} is used by more than one pair")]
    DuplicatePlugLetter(char),
    /// A plugboard cable entry is not exactly two characters.
    #[error("plugboard pair {0:?} must be exactly two letters")]
    MalformedPlugPair(String),
    /// A rotor position or ring setting could not be parsed as an integer.
    #[error("invalid rotor setting {0:?}")]
    InvalidSetting(String),
}
