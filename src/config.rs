//! Serializable machine configuration.
//!
//! The engine itself only needs wiring strings, notch and start letters and
//! a plugboard pair string. This module gives those values a serde shape so
//! an outer tool can load them from JSON, TOML or similar and hand them to
//! [`Machine::from_config`](crate::Machine::from_config).
//!
//! # Example
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default().with_plugboard("AM FI NV PS TU WZ");
//! let mut machine = Machine::from_config(&config).unwrap();
//! assert_eq!(machine.encrypt("HELLO WORLD"), "AIVCW YBIWA");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RotorCryptError;
use crate::machine::Machine;
use crate::rotor::Rotor;
use crate::wirings::{NOTCH_I, NOTCH_II, NOTCH_III, REFLECTOR_B, ROTOR_I, ROTOR_II, ROTOR_III};

/// One rotor slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// 26-symbol wiring key
    pub wiring: String,
    /// Turnover notch letter
    pub notch: char,
    /// Starting window letter, also the reset value
    #[serde(default = "default_start")]
    pub start: char,
}

impl RotorConfig {
    /// Creates a rotor slot description.
    pub fn new(wiring: impl Into<String>, notch: char, start: char) -> Self {
        RotorConfig {
            wiring: wiring.into(),
            notch,
            start,
        }
    }

    /// Validates the slot and builds the rotor.
    pub fn build(&self) -> Result<Rotor, RotorCryptError> {
        Rotor::new(&self.wiring, self.notch, self.start)
    }
}

/// Full machine configuration.
///
/// `rotors` are listed right to left, matching [`Machine::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor slots, right to left
    pub rotors: [RotorConfig; 3],
    /// Reflector wiring key
    #[serde(default = "default_reflector")]
    pub reflector: String,
    /// Plugboard pair string, e.g. `"AM FI NV"`
    #[serde(default)]
    pub plugboard: String,
}

fn default_start() -> char {
    'A'
}

fn default_reflector() -> String {
    REFLECTOR_B.to_string()
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: [
                RotorConfig::new(ROTOR_I, NOTCH_I, 'A'),
                RotorConfig::new(ROTOR_II, NOTCH_II, 'A'),
                RotorConfig::new(ROTOR_III, NOTCH_III, 'A'),
            ],
            reflector: default_reflector(),
            plugboard: String::new(),
        }
    }
}

impl MachineConfig {
    /// Checks every component without keeping the built machine.
    pub fn validate(&self) -> Result<(), RotorCryptError> {
        Machine::from_config(self).map(|_| ())
    }

    /// Builder-style method to set the plugboard pairs
    pub fn with_plugboard(mut self, pairs: impl Into<String>) -> Self {
        self.plugboard = pairs.into();
        self
    }

    /// Builder-style method to set the reflector wiring
    pub fn with_reflector(mut self, wiring: impl Into<String>) -> Self {
        self.reflector = wiring.into();
        self
    }

    /// Builder-style method to set the starting letters, right rotor first
    pub fn with_starts(mut self, starts: [char; 3]) -> Self {
        for (slot, start) in self.rotors.iter_mut().zip(starts) {
            slot.start = start;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wirings::REFLECTOR_C;

    #[test]
    fn test_default_is_valid() {
        assert!(MachineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = MachineConfig::default()
            .with_plugboard("AM")
            .with_reflector(REFLECTOR_C)
            .with_starts(['M', 'C', 'K']);
        assert_eq!(config.plugboard, "AM");
        assert_eq!(config.reflector, REFLECTOR_C);
        assert_eq!(config.rotors[0].start, 'M');
        assert_eq!(config.rotors[2].start, 'K');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_bad_rotor() {
        let mut config = MachineConfig::default();
        config.rotors[1].wiring = "AJDK".into();
        assert_eq!(
            config.validate(),
            Err(RotorCryptError::InvalidKeyLength { len: 4 })
        );
    }

    #[test]
    fn test_validate_reports_bad_reflector() {
        let config = MachineConfig::default().with_reflector(ROTOR_I);
        assert!(matches!(
            config.validate(),
            Err(RotorCryptError::ReflectorNotInvolutive { .. })
        ));
    }

    #[test]
    fn test_validate_reports_bad_plugboard() {
        let config = MachineConfig::default().with_plugboard("AMAN");
        assert_eq!(
            config.validate(),
            Err(RotorCryptError::DuplicatePlug { letter: 'A' })
        );
    }

    #[test]
    fn test_rotor_config_build() {
        let rotor = RotorConfig::new(ROTOR_II, NOTCH_II, 'D').build().unwrap();
        assert_eq!(rotor.position().to_char(), 'D');
        assert_eq!(rotor.notch().to_char(), 'E');
    }
}
