//! Rotor: a single rotating substitution disk.
//!
//! A rotor substitutes letters through its fixed wiring, offset by the
//! current rotation (`position`) and the wiring's offset against the
//! alphabet ring (`ring_setting`). Current flows through it twice per key
//! press: [`forward`](Rotor::forward) on the way to the reflector and
//! [`backward`](Rotor::backward) on the way back.

use crate::alphabet::{modulo, wired_letter, Letter, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::wiring::{RotorSpec, ROTORS};

/// One rotor mounted in a machine slot.
///
/// `position` and `ring_setting` are always kept in `0..26`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: &'static RotorSpec,
    forward_map: [Letter; 26],
    backward_map: [Letter; 26],
    notch: Letter,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor from a wiring spec.
    ///
    /// Any integer is accepted for `ring_setting` and `position`; both are
    /// reduced modulo 26, so `-1` means `Z`. `spec` must be one of the
    /// validated built-in tables; callers outside the crate go through
    /// [`from_id`](Self::from_id).
    ///
    /// ```compile_fail
    /// use enigma::rotor::Rotor;
    /// use enigma::wiring::ROTORS;
    ///
    /// let _ = Rotor::new(&ROTORS[0], 0, 0);
    /// ```
    pub(crate) fn new(spec: &'static RotorSpec, ring_setting: i32, position: i32) -> Self {
        let mut forward_map = [Letter::from_index(0); 26];
        let mut backward_map = [Letter::from_index(0); 26];
        for i in 0..ALPHABET_LEN {
            let out = wired_letter(spec.wiring, i);
            forward_map[i as usize] = out;
            backward_map[out.index() as usize] = Letter::from_index(i as i32);
        }
        let notch = Letter::from_index(spec.notch as i32 - 'A' as i32);

        Rotor {
            spec,
            forward_map,
            backward_map,
            notch,
            ring_setting: modulo(ring_setting),
            position: modulo(position),
        }
    }

    /// Creates one of the built-in rotors by id (0 = I, 1 = II, 2 = III).
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] if `id` is not in the table.
    pub fn from_id(id: usize, ring_setting: i32, position: i32) -> Result<Self, EnigmaError> {
        let spec = ROTORS.get(id).ok_or(EnigmaError::UnknownRotor {
            id,
            available: ROTORS.len(),
        })?;
        Ok(Self::new(spec, ring_setting, position))
    }

    /// The wiring spec this rotor was built from.
    pub fn spec(&self) -> &'static RotorSpec {
        self.spec
    }

    /// Current rotation, `0..26`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting, `0..26`.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Letter currently visible in the machine window.
    pub fn window(&self) -> char {
        Letter::from_index(self.position as i32).to_char()
    }

    /// Advances the rotor by one position.
    pub fn step(&mut self) {
        self.position = modulo(self.position as i32 + 1);
    }

    /// True if the window shows this rotor's notch letter.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch.index()
    }

    /// Offset between the alphabet and the wiring contacts.
    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }

    /// Substitutes a letter entering from the plugboard side.
    pub fn forward(&self, c: Letter) -> Letter {
        let contact = c.shift(self.offset());
        let out = self.forward_map[contact.index() as usize];
        out.shift(-self.offset())
    }

    /// Substitutes a letter returning from the reflector side.
    ///
    /// Exact inverse of [`forward`](Self::forward) at the same rotor state.
    pub fn backward(&self, c: Letter) -> Letter {
        let contact = c.shift(self.offset());
        let out = self.backward_map[contact.index() as usize];
        out.shift(-self.offset())
    }
}
