//! Error types for the rotor cipher engine.
//!
//! Every variant is raised while a component is being constructed. Once a
//! [`Machine`](crate::Machine) exists, `encrypt` and `reset` cannot fail.

use thiserror::Error;

/// Errors produced while building cipher components.
///
/// The `*Key*` variants report a wiring string that is not a permutation of
/// the alphabet. The remaining variants report configuration values that are
/// well-formed strings but violate a component invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// Wiring string does not contain exactly 26 symbols.
    #[error("Key must contain exactly 26 symbols, got {len}")]
    InvalidKeyLength { len: usize },

    /// Wiring string contains a symbol outside the alphabet.
    #[error("Key symbol {symbol:?} is not in the alphabet")]
    InvalidKeySymbol { symbol: char },

    /// Wiring string repeats a symbol (and therefore misses another).
    #[error("Key symbol {symbol:?} appears more than once")]
    DuplicateKeySymbol { symbol: char },

    /// Reflector wiring maps a letter onto itself.
    #[error("Reflector maps {letter:?} to itself")]
    ReflectorFixedPoint { letter: char },

    /// Reflector wiring is not its own inverse.
    #[error("Reflector is not an involution at {letter:?}")]
    ReflectorNotInvolutive { letter: char },

    /// Plugboard pair string contains a symbol outside the alphabet.
    #[error("Plugboard symbol {symbol:?} is not in the alphabet")]
    InvalidPlugSymbol { symbol: char },

    /// A letter is wired into more than one plugboard pair.
    #[error("Plugboard letter {letter:?} appears in more than one pair")]
    DuplicatePlug { letter: char },

    /// Rotor notch is not an alphabet letter.
    #[error("Notch {symbol:?} is not in the alphabet")]
    InvalidNotch { symbol: char },

    /// Rotor starting position is not an alphabet letter.
    #[error("Starting position {symbol:?} is not in the alphabet")]
    InvalidStartPosition { symbol: char },
}

impl RotorCryptError {
    /// Returns `true` if the error reports a wiring string that is not a
    /// permutation of the alphabet.
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self,
            RotorCryptError::InvalidKeyLength { .. }
                | RotorCryptError::InvalidKeySymbol { .. }
                | RotorCryptError::DuplicateKeySymbol { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = RotorCryptError::InvalidKeyLength { len: 25 };
        assert_eq!(
            format!("{}", err),
            "Key must contain exactly 26 symbols, got 25"
        );
    }

    #[test]
    fn test_display_duplicate_key_symbol() {
        let err = RotorCryptError::DuplicateKeySymbol { symbol: 'Q' };
        assert_eq!(format!("{}", err), "Key symbol 'Q' appears more than once");
    }

    #[test]
    fn test_display_duplicate_plug() {
        let err = RotorCryptError::DuplicatePlug { letter: 'A' };
        assert_eq!(
            format!("{}", err),
            "Plugboard letter 'A' appears in more than one pair"
        );
    }

    #[test]
    fn test_display_reflector_fixed_point() {
        let err = RotorCryptError::ReflectorFixedPoint { letter: 'K' };
        assert_eq!(format!("{}", err), "Reflector maps 'K' to itself");
    }

    #[test]
    fn test_display_invalid_notch() {
        let err = RotorCryptError::InvalidNotch { symbol: '7' };
        assert_eq!(format!("{}", err), "Notch '7' is not in the alphabet");
    }

    #[test]
    fn test_is_invalid_key() {
        assert!(RotorCryptError::InvalidKeySymbol { symbol: '#' }.is_invalid_key());
        assert!(RotorCryptError::InvalidKeyLength { len: 0 }.is_invalid_key());
        assert!(!RotorCryptError::DuplicatePlug { letter: 'A' }.is_invalid_key());
        assert!(!RotorCryptError::ReflectorNotInvolutive { letter: 'B' }.is_invalid_key());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RotorCryptError::InvalidPlugSymbol { symbol: '1' },
            RotorCryptError::InvalidPlugSymbol { symbol: '1' }
        );
        assert_ne!(
            RotorCryptError::InvalidNotch { symbol: '1' },
            RotorCryptError::InvalidStartPosition { symbol: '1' }
        );
    }
}
