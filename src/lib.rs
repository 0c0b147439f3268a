//! Rotor cipher machine engine.
//!
//! A reciprocal, stateful substitution cipher over the 26-letter alphabet in
//! the style of the three-rotor electromechanical machines. The crate is the
//! engine only: it takes wiring strings, notch letters, starting positions
//! and plugboard pairs, and exposes `encrypt` and `reset`. It makes no
//! security claims; fidelity to the historical algorithm is the goal.
//!
//! # Architecture
//!
//! ```text
//! Permutation (bijective table + inverse, shared by every component)
//!     ↓ owned by value
//! Rotor       (permutation + notch + mutable position offset)
//! Plugboard   (self-inverse swaps)      Reflector (involution, no fixed points)
//!     ↓
//! Assembly    (three rotors right to left, double-stepping, forward/backward relay)
//!     ↓
//! Machine     (advance → plugboard → rotors → reflector → rotors⁻¹ → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the same machine:
//!
//! ```
//! use rotorcrypt::{wirings, Machine, Plugboard, Reflector, Rotor};
//!
//! let rotors = [
//!     Rotor::new(wirings::ROTOR_I, wirings::NOTCH_I, 'A').unwrap(),
//!     Rotor::new(wirings::ROTOR_II, wirings::NOTCH_II, 'A').unwrap(),
//!     Rotor::new(wirings::ROTOR_III, wirings::NOTCH_III, 'A').unwrap(),
//! ];
//! let plugboard = Plugboard::new("AMFINVPSTUWZ").unwrap();
//! let mut machine = Machine::new(rotors, Reflector::default(), plugboard);
//!
//! let ciphertext = machine.encrypt("HELLO WORLD");
//! assert_eq!(ciphertext, "AIVCW YBIWA");
//!
//! machine.reset();
//! assert_eq!(machine.encrypt(&ciphertext), "HELLO WORLD");
//! ```
//!
//! Build from a serializable configuration:
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default().with_starts(['M', 'C', 'K']);
//! let mut machine = Machine::from_config(&config).unwrap();
//! assert_eq!(machine.encrypt("ENIGMA REVEALED"), "IITEZC BXMRDBLA");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod wirings;

mod assembly;
mod config;
mod machine;
mod permutation;
mod plugboard;
mod reflector;
mod rotor;

pub use alphabet::{Letter, ALPHABET, ALPHABET_LEN};
pub use assembly::{Assembly, NUM_ROTORS};
pub use config::{MachineConfig, RotorConfig};
pub use error::RotorCryptError;
pub use machine::Machine;
pub use permutation::Permutation;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
