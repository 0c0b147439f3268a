//! Plugboard: self-inverse letter swaps applied before and after the rotors.

use tracing::warn;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::RotorCryptError;
use crate::permutation::Permutation;

/// Fixed swap table built from disjoint letter pairs.
///
/// Letters outside every pair map to themselves. Because each pair is a
/// two-cycle, the table is its own inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: Permutation,
    pairs: usize,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Builds a plugboard from a pair string such as `"AMFINV"`.
    ///
    /// Symbols are consumed two at a time; ASCII whitespace between them is
    /// skipped, so `"AM FI NV"` is equivalent. A trailing unpaired symbol is
    /// ignored.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidPlugSymbol`] if a symbol is not a letter.
    /// - [`RotorCryptError::DuplicatePlug`] if a letter appears in two pairs
    ///   (or is paired with itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, Plugboard};
    ///
    /// let board = Plugboard::new("AM").unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(board.substitute(a).to_char(), 'M');
    ///
    /// assert!(Plugboard::new("ABAC").is_err());
    /// ```
    pub fn new(pairs: &str) -> Result<Self, RotorCryptError> {
        let mut symbols = Vec::with_capacity(pairs.len());
        for symbol in pairs.chars().filter(|c| !c.is_ascii_whitespace()) {
            let letter =
                Letter::from_char(symbol).ok_or(RotorCryptError::InvalidPlugSymbol { symbol })?;
            symbols.push(letter);
        }

        let mut forward: [Letter; ALPHABET_LEN] = [Letter::wrapping(0); ALPHABET_LEN];
        for (slot, letter) in forward.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }

        let mut plugged = [false; ALPHABET_LEN];
        let mut chunks = symbols.chunks_exact(2);
        for pair in &mut chunks {
            let (a, b) = (pair[0], pair[1]);
            for letter in [a, b] {
                if plugged[letter.index()] {
                    return Err(RotorCryptError::DuplicatePlug {
                        letter: letter.to_char(),
                    });
                }
                plugged[letter.index()] = true;
            }
            forward[a.index()] = b;
            forward[b.index()] = a;
        }
        if let [orphan] = chunks.remainder() {
            warn!(symbol = %orphan, "ignoring unpaired plugboard symbol");
        }

        Ok(Plugboard {
            table: Permutation::from_table(forward),
            pairs: symbols.len() / 2,
        })
    }

    /// A plugboard with no cables connected.
    pub const fn identity() -> Self {
        Plugboard {
            table: Permutation::identity(),
            pairs: 0,
        }
    }

    /// Swaps a letter with its partner, or returns it unchanged if unplugged.
    #[inline]
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.table.apply(letter)
    }

    /// Returns the number of connected pairs.
    pub fn pairs(&self) -> usize {
        self.pairs
    }
}
