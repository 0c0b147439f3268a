//! The 26-symbol reference alphabet and the [`Letter`] index type.
//!
//! All wiring tables are indexed by alphabet position. Working on `Letter`
//! values instead of raw `char`s keeps every substitution total: a `Letter`
//! is always in `[0, 26)`.

use std::fmt;

/// The ordered reference alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 26;

/// A single alphabet symbol, stored as its index into [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Converts an ASCII letter (either case) into a `Letter`.
    ///
    /// Returns `None` for anything outside `A..=Z` / `a..=z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Letter;
    ///
    /// assert_eq!(Letter::from_char('c'), Letter::from_index(2));
    /// assert_eq!(Letter::from_char('!'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Builds a `Letter` from an alphabet index, or `None` if `index >= 26`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Builds a `Letter` from an uppercase letter known at compile time.
    pub(crate) const fn from_static(c: char) -> Self {
        assert!(c.is_ascii_uppercase(), "static letter out of range");
        Letter((c as u8) - b'A')
    }

    /// Builds a `Letter` from any index, reduced modulo 26.
    pub(crate) const fn wrapping(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Returns the alphabet index in `[0, 26)`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the uppercase ASCII character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Moves the letter `offset` places forward around the alphabet.
    pub(crate) const fn shift(self, offset: usize) -> Self {
        Self::wrapping(self.index() + offset % ALPHABET_LEN)
    }

    /// Moves the letter `offset` places backward around the alphabet.
    pub(crate) const fn unshift(self, offset: usize) -> Self {
        Self::wrapping(self.index() + ALPHABET_LEN - offset % ALPHABET_LEN)
    }

    /// Iterates over the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
