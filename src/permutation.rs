//! Permutation: bijective substitution table over the alphabet.
//!
//! The shared building block of the rotors, the plugboard and the reflector.
//! Each component owns a `Permutation` by value; only the rotor adds mutable
//! state on top of it.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::RotorCryptError;

/// A bijection of the alphabet onto itself with its precomputed inverse.
///
/// Immutable once built. `apply_inverse(apply(x)) == x` holds for every
/// letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Permutation {
    /// Builds a permutation from a 26-symbol key.
    ///
    /// Position `i` of the key is the image of the `i`-th alphabet letter.
    /// Lowercase symbols are accepted and treated as uppercase.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidKeyLength`] if the key is not 26 symbols long.
    /// - [`RotorCryptError::InvalidKeySymbol`] if a symbol is not a letter.
    /// - [`RotorCryptError::DuplicateKeySymbol`] if a letter appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, Permutation};
    ///
    /// let p = Permutation::new("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(p.apply(a).to_char(), 'B');
    /// assert_eq!(p.apply_inverse(p.apply(a)), a);
    ///
    /// assert!(Permutation::new("ABC").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, RotorCryptError> {
        let len = key.chars().count();
        if len != ALPHABET_LEN {
            return Err(RotorCryptError::InvalidKeyLength { len });
        }

        let mut forward = [Letter::wrapping(0); ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (slot, symbol) in forward.iter_mut().zip(key.chars()) {
            let letter =
                Letter::from_char(symbol).ok_or(RotorCryptError::InvalidKeySymbol { symbol })?;
            if seen[letter.index()] {
                return Err(RotorCryptError::DuplicateKeySymbol {
                    symbol: letter.to_char(),
                });
            }
            seen[letter.index()] = true;
            *slot = letter;
        }

        Ok(Self::from_table(forward))
    }

    /// Builds a permutation from a key known at compile time.
    ///
    /// Only used for the built-in tables; an invalid key fails const
    /// evaluation instead of producing a broken table.
    pub(crate) const fn from_static(key: &'static str) -> Self {
        let bytes = key.as_bytes();
        assert!(bytes.len() == ALPHABET_LEN, "static key must have 26 symbols");

        let mut forward = [Letter::wrapping(0); ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            assert!(bytes[i].is_ascii_uppercase(), "static key symbol out of range");
            let index = (bytes[i] - b'A') as usize;
            assert!(!seen[index], "static key repeats a symbol");
            seen[index] = true;
            forward[i] = Letter::wrapping(index);
            i += 1;
        }

        Self::from_table(forward)
    }

    /// The identity permutation.
    pub const fn identity() -> Self {
        let mut forward = [Letter::wrapping(0); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            forward[i] = Letter::wrapping(i);
            i += 1;
        }
        Permutation {
            forward,
            inverse: forward,
        }
    }

    /// Builds a permutation from an already validated forward table.
    ///
    /// For every position `i` holding letter `c`, the inverse maps `c`
    /// back to the `i`-th alphabet letter.
    pub(crate) const fn from_table(forward: [Letter; ALPHABET_LEN]) -> Self {
        let mut inverse = [Letter::wrapping(0); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            inverse[forward[i].index()] = Letter::wrapping(i);
            i += 1;
        }
        Permutation { forward, inverse }
    }

    /// Maps a letter through the forward table.
    #[inline]
    pub fn apply(&self, letter: Letter) -> Letter {
        self.forward[letter.index()]
    }

    /// Maps a letter through the inverse table.
    #[inline]
    pub fn apply_inverse(&self, letter: Letter) -> Letter {
        self.inverse[letter.index()]
    }

    /// Renders the forward table as a key string.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|l| l.to_char()).collect()
    }
}
