//! Built-in wiring tables for the Enigma I.
//!
//! Rotors I, II and III and reflector B, as used by the Wehrmacht Enigma I.
//! Position `i` of a wiring string is the letter that alphabet letter `i`
//! is wired to at rotor offset 0.

/// Static description of one rotor model.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// Historical rotor designation.
    pub name: &'static str,
    /// Forward substitution at offset 0.
    pub wiring: &'static str,
    /// Window letter at which the rotor carries the rotor to its left.
    pub notch: char,
}

/// Rotors available to a machine, indexed by rotor id.
pub static ROTORS: [RotorSpec; 3] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
];

/// Reflector B (UKW-B).
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
