//! Enigma: three rotors, reflector B and a plugboard.
//!
//! The machine steps its rotors before every letter, then sends the letter
//! through the plugboard, the rotors right to left, the reflector, the
//! rotors left to right and the plugboard again. Because the reflector and
//! plugboard are involutions and every rotor's backward path inverts its
//! forward path, a machine built with the same settings decrypts what it
//! encrypts.

use tracing::{debug, trace};

use crate::alphabet::{wired_letter, Letter};
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::wiring::REFLECTOR_B;

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

/// An Enigma I with three rotors, reflector B and a plugboard.
///
/// Slot 0 is the leftmost rotor and slot 2 the rightmost (fast) rotor.
/// Encrypting advances rotor state, so one machine serves one message;
/// clone it or build another for independent streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    rotors: [Rotor; ROTOR_SLOTS],
    plugboard: Plugboard,
}

impl Enigma {
    /// Builds a machine from per-slot rotor ids, positions and ring settings.
    ///
    /// # Parameters
    /// - `rotor_ids`: Built-in rotor for each slot, left to right (0 = I, 1 = II, 2 = III).
    /// - `positions`: Starting window position of each rotor (`0` = A, reduced modulo 26).
    /// - `ring_settings`: Ring setting of each rotor (`0` = A, reduced modulo 26).
    /// - `plugboard_pairs`: Disjoint letter pairs to swap.
    ///
    /// # Errors
    /// - [`EnigmaError::SlotCount`] if any per-rotor slice does not have 3 entries.
    /// - [`EnigmaError::UnknownRotor`] if a rotor id is not in the built-in table.
    /// - Plugboard errors from [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// assert!(Enigma::new(&[0, 1], &[0, 0, 0], &[0, 0, 0], &[]).is_err());
    /// ```
    pub fn new(
        rotor_ids: &[usize],
        positions: &[i32],
        ring_settings: &[i32],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        check_slots("rotor ids", rotor_ids.len())?;
        check_slots("rotor positions", positions.len())?;
        check_slots("ring settings", ring_settings.len())?;

        let rotors = [
            Rotor::from_id(rotor_ids[0], ring_settings[0], positions[0])?,
            Rotor::from_id(rotor_ids[1], ring_settings[1], positions[1])?,
            Rotor::from_id(rotor_ids[2], ring_settings[2], positions[2])?,
        ];
        let plugboard = Plugboard::new(plugboard_pairs)?;

        let machine = Enigma { rotors, plugboard };
        debug!(
            rotors = ?machine.rotors.iter().map(|r| r.spec().name).collect::<Vec<_>>(),
            window = %machine.window(),
            rings = ?machine.rotors.iter().map(Rotor::ring_setting).collect::<Vec<_>>(),
            plugs = machine.plugboard.len(),
            "enigma configured"
        );
        Ok(machine)
    }

    /// Builds a machine from a [`MachineConfig`].
    ///
    /// # Errors
    /// Same as [`Enigma::new`], plus [`EnigmaError::MalformedPlugPair`] for a
    /// plugboard entry that is not exactly two characters.
    pub fn from_config(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let pairs = config.plugboard_pairs()?;
        Self::new(&config.rotors, &config.positions, &config.ring_settings, &pairs)
    }

    /// The mounted rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; ROTOR_SLOTS] {
        &self.rotors
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_SLOTS] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    /// Letters shown in the windows, left to right (e.g. `"ADU"`).
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Advances the rotors for one key press.
    ///
    /// Both notch checks observe the state before anything moves. A middle
    /// rotor sitting on its notch carries the left rotor and also steps
    /// itself, so it advances on two consecutive key presses (double step).
    pub fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[1].at_notch();
        let right_at_notch = self.rotors[2].at_notch();

        if middle_at_notch {
            trace!(window = %self.window(), "double step");
            self.rotors[0].step();
        }
        if right_at_notch || middle_at_notch {
            self.rotors[1].step();
        }
        self.rotors[2].step();
    }

    /// Encrypts a single character.
    ///
    /// Characters outside `A..=Z` are returned unchanged and do not advance
    /// the rotors. Callers that need case folding should use
    /// [`process`](Self::process).
    pub fn encrypt_char(&mut self, c: char) -> char {
        let letter = match Letter::from_char(c) {
            Some(letter) if c.is_ascii_uppercase() => letter,
            _ => return c,
        };
        self.step_rotors();
        self.encipher(letter).to_char()
    }

    /// Sends a letter through the current wiring without stepping.
    fn encipher(&self, letter: Letter) -> Letter {
        let mut c = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            c = rotor.forward(c);
        }
        c = wired_letter(REFLECTOR_B, c.index());
        for rotor in self.rotors.iter() {
            c = rotor.backward(c);
        }
        self.plugboard.swap(c)
    }

    /// Encrypts (or decrypts) a whole message.
    ///
    /// Each character is uppercased and letters are enciphered in order;
    /// every other character is copied through at the same position.
    /// Characters whose uppercase form is more than one character (such as
    /// `ß`) are left as typed, so the output has as many characters as the
    /// input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut encoder = Enigma::new(&[0, 1, 2], &[5, 12, 21], &[1, 2, 3], &[('A', 'B')]).unwrap();
    /// let ciphertext = encoder.process("attack at dawn");
    ///
    /// let mut decoder = Enigma::new(&[0, 1, 2], &[5, 12, 21], &[1, 2, 3], &[('A', 'B')]).unwrap();
    /// assert_eq!(decoder.process(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        trace!(chars = text.chars().count(), window = %self.window(), "processing message");
        text.chars()
            .map(|c| self.encrypt_char(uppercase(c)))
            .collect()
    }
}

/// Uppercases `c` when its uppercase form is a single character.
fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn check_slots(field: &'static str, found: usize) -> Result<(), EnigmaError> {
    if found != ROTOR_SLOTS {
        return Err(EnigmaError::SlotCount {
            field,
            expected: ROTOR_SLOTS,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_machine() -> Enigma {
        Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap()
    }

    #[test]
    fn test_reference_vector() {
        let mut machine = default_machine();
        assert_eq!(machine.process("AAAAA"), "BDZGO");
        assert_eq!(machine.window(), "AAF");
    }

    #[test]
    fn test_single_step_moves_right_rotor_only() {
        let mut machine = default_machine();
        machine.step_rotors();
        assert_eq!(machine.positions(), [0, 0, 1]);
    }

    #[test]
    fn test_right_notch_carries_middle() {
        let mut machine = Enigma::new(&[0, 1, 2], &[0, 0, 21], &[0, 0, 0], &[]).unwrap();
        machine.step_rotors();
        assert_eq!(machine.window(), "ABW");
        machine.step_rotors();
        assert_eq!(machine.window(), "ABX");
    }

    #[test]
    fn test_double_step() {
        let mut machine = Enigma::new(&[0, 1, 2], &[0, 3, 21], &[0, 0, 0], &[]).unwrap();
        assert_eq!(machine.window(), "ADV");
        let mut windows = Vec::new();
        for _ in 0..5 {
            machine.step_rotors();
            windows.push(machine.window());
        }
        assert_eq!(windows, ["AEW", "BFX", "BFY", "BFZ", "BFA"]);
    }

    #[test]
    fn test_non_letters_do_not_step() {
        let mut machine = default_machine();
        for c in [' ', '1', '.', 'a', 'é'] {
            assert_eq!(machine.encrypt_char(c), c);
        }
        assert_eq!(machine.positions(), [0, 0, 0]);
    }

    #[test]
    fn test_no_letter_encrypts_to_itself() {
        let mut machine = default_machine();
        for _ in 0..200 {
            assert_ne!(machine.encrypt_char('E'), 'E');
        }
    }

    #[test]
    fn test_process_uppercases_and_preserves_layout() {
        let mut machine = default_machine();
        let out = machine.process("hello, world 42");
        assert_eq!(out.chars().count(), 15);
        assert_eq!(&out[5..7], ", ");
        assert_eq!(&out[12..], " 42");
        assert!(out
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| c.is_ascii_uppercase()));
        assert_eq!(machine.positions(), [0, 0, 10]);
    }

    #[test]
    fn test_process_uppercases_unicode_per_char() {
        let mut machine = default_machine();
        let out = machine.process("café ß");
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars.len(), 6);
        assert!(chars[..3].iter().all(|c| c.is_ascii_uppercase()));
        assert_eq!(&chars[3..], &['É', ' ', 'ß']);
        assert_eq!(machine.positions(), [0, 0, 3]);
    }

    #[test]
    fn test_uppercase_helper() {
        assert_eq!(uppercase('a'), 'A');
        assert_eq!(uppercase('é'), 'É');
        assert_eq!(uppercase('ß'), 'ß');
        assert_eq!(uppercase('7'), '7');
    }

    #[test]
    fn test_slot_count_errors() {
        assert_eq!(
            Enigma::new(&[0, 1, 2, 0], &[0, 0, 0], &[0, 0, 0], &[]),
            Err(EnigmaError::SlotCount {
                field: "rotor ids",
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            Enigma::new(&[0, 1, 2], &[0, 0], &[0, 0, 0], &[]),
            Err(EnigmaError::SlotCount {
                field: "rotor positions",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Enigma::new(&[0, 1, 2], &[0, 0, 0], &[], &[]),
            Err(EnigmaError::SlotCount {
                field: "ring settings",
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn test_unknown_rotor_error() {
        assert_eq!(
            Enigma::new(&[0, 5, 2], &[0, 0, 0], &[0, 0, 0], &[]),
            Err(EnigmaError::UnknownRotor { id: 5, available: 3 })
        );
    }

    #[test]
    fn test_plugboard_error_propagates() {
        assert_eq!(
            Enigma::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B'), ('B', 'C')]),
            Err(EnigmaError::DuplicatePlugLetter('B'))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = default_machine();
        let mut b = a.clone();
        assert_eq!(a.process("AAAAA"), "BDZGO");
        assert_eq!(b.positions(), [0, 0, 0]);
        assert_eq!(b.process("AAAAA"), "BDZGO");
    }

    #[test]
    fn test_machine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Enigma>();
    }
}
