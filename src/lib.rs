//! Enigma I cipher machine simulator.
//!
//! Reproduces the Wehrmacht Enigma I with rotors I, II and III, reflector B
//! and a plugboard. The machine is a self-reciprocal stream cipher: a machine
//! built with the same settings turns ciphertext back into plaintext.
//!
//! # Architecture
//!
//! ```text
//! Letter     (alphabet index 0..26, modulo-26 arithmetic)
//!     ↓
//! Rotor      (forward/backward substitution, ring setting, notch)
//! Plugboard  (disjoint letter-pair swaps)
//!     ↓
//! Enigma     (double-stepping, plugboard → rotors → reflector → rotors → plugboard)
//! ```
//!
//! Letters advance the rotors before they are enciphered; every other
//! character passes through unchanged and leaves the rotors where they are.
//!
//! # Examples
//!
//! The reference vector for rotors I-II-III at `AAA`:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
//! assert_eq!(machine.process("AAAAA"), "BDZGO");
//! ```
//!
//! Encrypt and decrypt with ring settings and plugboard cables:
//!
//! ```
//! use enigma::Enigma;
//!
//! let plugs = [('A', 'B'), ('C', 'D'), ('E', 'F')];
//! let mut encoder = Enigma::new(&[0, 1, 2], &[5, 12, 21], &[1, 2, 3], &plugs).unwrap();
//! let ciphertext = encoder.process("THIS IS A TEST");
//!
//! let mut decoder = Enigma::new(&[0, 1, 2], &[5, 12, 21], &[1, 2, 3], &plugs).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "THIS IS A TEST");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod rotor;
pub mod wiring;

mod machine;

pub use alphabet::Letter;
pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::{Enigma, ROTOR_SLOTS};
pub use plugboard::Plugboard;
pub use rotor::Rotor;
