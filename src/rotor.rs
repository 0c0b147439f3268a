//! Rotor: position-offset permutation with a turnover notch.
//!
//! The wiring table never moves. Rotation is modelled by shifting the
//! contact index by the current position on the way in and shifting it
//! back on the way out, so stepping is a single counter increment.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::RotorCryptError;
use crate::permutation::Permutation;

/// A single cipher rotor.
///
/// `position` is the only mutable state; it always lies in `[0, 26)` and
/// wraps on rotation. `starting_position` is fixed at construction and is
/// what [`reset`](Self::reset) restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    notch: Letter,
    position: usize,
    starting_position: usize,
}

impl Rotor {
    /// Creates a rotor from its wiring key, notch letter and starting letter.
    ///
    /// # Errors
    /// - Any `InvalidKey*` variant if `wiring` is not a permutation.
    /// - [`RotorCryptError::InvalidNotch`] if `notch` is not a letter.
    /// - [`RotorCryptError::InvalidStartPosition`] if `start` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{wirings, Rotor};
    ///
    /// let rotor = Rotor::new(wirings::ROTOR_I, 'Q', 'A').unwrap();
    /// assert_eq!(rotor.position().to_char(), 'A');
    /// ```
    pub fn new(wiring: &str, notch: char, start: char) -> Result<Self, RotorCryptError> {
        let wiring = Permutation::new(wiring)?;
        let notch =
            Letter::from_char(notch).ok_or(RotorCryptError::InvalidNotch { symbol: notch })?;
        let start = Letter::from_char(start)
            .ok_or(RotorCryptError::InvalidStartPosition { symbol: start })?;
        Ok(Self::with_permutation(wiring, notch, start))
    }

    /// Creates a rotor from an already built permutation.
    pub const fn with_permutation(wiring: Permutation, notch: Letter, start: Letter) -> Self {
        Rotor {
            wiring,
            notch,
            position: start.index(),
            starting_position: start.index(),
        }
    }

    /// Advances the rotor by one position, wrapping after `Z`.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Returns `true` if the rotor is sitting on its notch.
    ///
    /// Checked before this rotor steps, to decide whether its neighbour
    /// steps on the same key press.
    pub fn should_rotate_next(&self) -> bool {
        self.position == self.notch.index()
    }

    /// Passes a letter through the rotor on the way towards the reflector.
    pub fn forward_substitute(&self, letter: Letter) -> Letter {
        let contact = letter.shift(self.position);
        self.wiring.apply(contact).unshift(self.position)
    }

    /// Passes a letter through the rotor on the way back from the reflector.
    ///
    /// Uses the inverse wiring, so
    /// `backward_substitute(forward_substitute(x)) == x` at any position.
    pub fn backward_substitute(&self, letter: Letter) -> Letter {
        let contact = letter.shift(self.position);
        self.wiring.apply_inverse(contact).unshift(self.position)
    }

    /// Restores the configured starting position.
    pub fn reset(&mut self) {
        self.position = self.starting_position;
    }

    /// Returns the letter currently showing in the rotor window.
    pub fn position(&self) -> Letter {
        Letter::wrapping(self.position)
    }

    /// Turns the rotor to `position` without touching its reset value.
    pub fn set_position(&mut self, position: Letter) {
        self.position = position.index();
    }

    /// Returns the configured starting letter.
    pub fn starting_position(&self) -> Letter {
        Letter::wrapping(self.starting_position)
    }

    /// Returns the notch letter.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Returns the fixed wiring table.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
