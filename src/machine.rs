//! Machine: plugboard, rotor assembly and reflector wired into one cipher.
//!
//! Each letter steps the rotors first and then travels
//! plugboard → rotors → reflector → rotors (reversed) → plugboard.
//! The reflector makes the transform reciprocal: from the same starting
//! positions, enciphering the ciphertext yields the plaintext.

use tracing::debug;

use crate::alphabet::Letter;
use crate::assembly::{Assembly, NUM_ROTORS};
use crate::config::MachineConfig;
use crate::error::RotorCryptError;
use crate::permutation::Permutation;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wirings::{NOTCH_I, NOTCH_II, NOTCH_III, ROTOR_I, ROTOR_II, ROTOR_III};

/// Complete rotor cipher machine.
///
/// The only mutable state is the three rotor positions. A message must be
/// processed sequentially on one instance; separate instances share nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    assembly: Assembly,
    reflector: Reflector,
    plugboard: Plugboard,
}

/// Rotors I, II, III right to left, all at `A`, checked at compile time.
const DEFAULT_ROTORS: [Rotor; NUM_ROTORS] = [
    Rotor::with_permutation(
        Permutation::from_static(ROTOR_I),
        Letter::from_static(NOTCH_I),
        Letter::from_static('A'),
    ),
    Rotor::with_permutation(
        Permutation::from_static(ROTOR_II),
        Letter::from_static(NOTCH_II),
        Letter::from_static('A'),
    ),
    Rotor::with_permutation(
        Permutation::from_static(ROTOR_III),
        Letter::from_static(NOTCH_III),
        Letter::from_static('A'),
    ),
];

impl Default for Machine {
    /// Rotors I, II, III (right to left) at `AAA`, Reflector B, no plugs.
    fn default() -> Self {
        Self::new(DEFAULT_ROTORS, Reflector::default(), Plugboard::identity())
    }
}

impl Machine {
    /// Assembles a machine from its components.
    ///
    /// `rotors` are given right to left.
    pub fn new(rotors: [Rotor; NUM_ROTORS], reflector: Reflector, plugboard: Plugboard) -> Self {
        let machine = Machine {
            assembly: Assembly::new(rotors),
            reflector,
            plugboard,
        };
        debug!(
            start = %machine.window(),
            plugs = machine.plugboard.pairs(),
            "machine assembled"
        );
        machine
    }

    /// Builds a machine from a configuration, validating every component.
    ///
    /// # Errors
    /// Returns the first [`RotorCryptError`] raised by a rotor, the reflector
    /// or the plugboard.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, MachineConfig};
    ///
    /// let mut config = MachineConfig::default();
    /// config.plugboard = "AB CA".into();
    /// assert!(Machine::from_config(&config).is_err());
    /// ```
    pub fn from_config(config: &MachineConfig) -> Result<Self, RotorCryptError> {
        let [r0, r1, r2] = &config.rotors;
        let rotors = [r0.build()?, r1.build()?, r2.build()?];
        let reflector = Reflector::new(&config.reflector)?;
        let plugboard = Plugboard::new(&config.plugboard)?;
        Ok(Self::new(rotors, reflector, plugboard))
    }

    /// Enciphers (or, equivalently, deciphers) `text`.
    ///
    /// Letters are uppercased and transformed, advancing the rotors once
    /// each. Spaces and any other non-letter characters are copied through
    /// unchanged and do not advance the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let mut machine = Machine::default();
    /// let ciphertext = machine.encrypt("Attack at dawn!");
    ///
    /// machine.reset();
    /// assert_eq!(machine.encrypt(&ciphertext), "ATTACK AT DAWN!");
    /// ```
    pub fn encrypt(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Transforms a single character under the passthrough rules of
    /// [`encrypt`](Self::encrypt).
    pub fn encrypt_char(&mut self, c: char) -> char {
        if c == ' ' {
            return c;
        }
        match Letter::from_char(c) {
            Some(letter) => self.encrypt_letter(letter).to_char(),
            None => c,
        }
    }

    /// Steps the rotors and sends one letter through the full signal path.
    pub fn encrypt_letter(&mut self, letter: Letter) -> Letter {
        self.assembly.advance();
        let signal = self.plugboard.substitute(letter);
        let signal = self.assembly.forward_pass(signal);
        let signal = self.reflector.reflect(signal);
        let signal = self.assembly.backward_pass(signal);
        self.plugboard.substitute(signal)
    }

    /// Returns every rotor to its configured starting position.
    pub fn reset(&mut self) {
        self.assembly.reset();
        debug!(start = %self.window(), "machine reset");
    }

    /// Returns the window letters, right rotor first.
    pub fn positions(&self) -> [Letter; NUM_ROTORS] {
        self.assembly.positions()
    }

    /// Returns the rotor assembly.
    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    fn window(&self) -> String {
        self.positions().iter().map(|l| l.to_char()).collect()
    }
}
