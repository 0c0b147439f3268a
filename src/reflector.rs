//! Reflector: fixed involution that turns the signal back through the rotors.

use crate::alphabet::Letter;
use crate::error::RotorCryptError;
use crate::permutation::Permutation;
use crate::wirings::REFLECTOR_B;

/// Fixed-point-free involutive permutation.
///
/// `reflect(x) != x` and `reflect(reflect(x)) == x` for every letter. These
/// two properties are what make the whole machine reciprocal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

/// Reflector B, checked at compile time.
const REFLECTOR_B_TABLE: Permutation = Permutation::from_static(REFLECTOR_B);

impl Default for Reflector {
    /// Historical Reflector B.
    fn default() -> Self {
        Reflector {
            wiring: REFLECTOR_B_TABLE,
        }
    }
}

impl Reflector {
    /// Builds a reflector from a 26-symbol wiring key.
    ///
    /// # Errors
    /// - Any `InvalidKey*` variant if `wiring` is not a permutation.
    /// - [`RotorCryptError::ReflectorFixedPoint`] if a letter maps to itself.
    /// - [`RotorCryptError::ReflectorNotInvolutive`] if the wiring is not its
    ///   own inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{wirings, Reflector};
    ///
    /// assert_eq!(Reflector::new(wirings::REFLECTOR_B).unwrap(), Reflector::default());
    /// assert!(Reflector::new(wirings::ROTOR_I).is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, RotorCryptError> {
        let wiring = Permutation::new(wiring)?;
        for x in Letter::all() {
            let y = wiring.apply(x);
            if y == x {
                return Err(RotorCryptError::ReflectorFixedPoint {
                    letter: x.to_char(),
                });
            }
            if wiring.apply(y) != x {
                return Err(RotorCryptError::ReflectorNotInvolutive {
                    letter: x.to_char(),
                });
            }
        }
        Ok(Reflector { wiring })
    }

    /// Returns the letter wired to `letter`.
    #[inline]
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    /// Returns the fixed wiring table.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
