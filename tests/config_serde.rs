//! Configuration loading through serde.
//!
//! Checks the serialized shape of `MachineConfig` and that configs loaded
//! from JSON drive the engine exactly like hand-built components.

use rotorcrypt::wirings::{NOTCH_II, REFLECTOR_B, ROTOR_II};
use rotorcrypt::{Machine, MachineConfig, RotorConfig, RotorCryptError};

const REFERENCE_JSON: &str = r#"{
    "rotors": [
        { "wiring": "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "notch": "Q", "start": "A" },
        { "wiring": "AJDKSIRUXBLHWTMCQGZNPYFVOE", "notch": "E", "start": "A" },
        { "wiring": "BDFHJLCPRTXVZNYEIWGAKMUSQO", "notch": "V", "start": "A" }
    ],
    "reflector": "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    "plugboard": "AM FI NV PS TU WZ"
}"#;

#[test]
fn json_config_drives_reference_vector() {
    let config: MachineConfig = serde_json::from_str(REFERENCE_JSON).unwrap();
    let mut machine = Machine::from_config(&config).unwrap();
    assert_eq!(machine.encrypt("HELLO WORLD"), "AIVCW YBIWA");
}

#[test]
fn optional_fields_take_defaults() {
    let json = r#"{
        "rotors": [
            { "wiring": "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "notch": "Q" },
            { "wiring": "AJDKSIRUXBLHWTMCQGZNPYFVOE", "notch": "E" },
            { "wiring": "BDFHJLCPRTXVZNYEIWGAKMUSQO", "notch": "V" }
        ]
    }"#;
    let config: MachineConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, MachineConfig::default());
    assert_eq!(config.reflector, REFLECTOR_B);
    assert!(config.plugboard.is_empty());
}

#[test]
fn config_survives_json_roundtrip() {
    let config = MachineConfig::default()
        .with_starts(['M', 'C', 'K'])
        .with_plugboard("AM");
    let json = serde_json::to_string(&config).unwrap();
    let loaded: MachineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn wrong_rotor_count_is_rejected_by_serde() {
    let json = r#"{ "rotors": [ { "wiring": "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "notch": "Q" } ] }"#;
    assert!(serde_json::from_str::<MachineConfig>(json).is_err());
}

#[test]
fn invalid_values_fail_at_build_time() {
    let mut config: MachineConfig = serde_json::from_str(REFERENCE_JSON).unwrap();
    config.rotors[2] = RotorConfig::new(ROTOR_II, '#', 'A');
    assert_eq!(
        Machine::from_config(&config),
        Err(RotorCryptError::InvalidNotch { symbol: '#' })
    );

    config.rotors[2] = RotorConfig::new(ROTOR_II, NOTCH_II, 'A');
    config.reflector = "YRUHQSLDPXNGOKMIEBFZCWVJA".into();
    assert_eq!(
        config.validate(),
        Err(RotorCryptError::InvalidKeyLength { len: 25 })
    );
}
