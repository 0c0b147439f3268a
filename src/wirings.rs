//! Historical wiring tables.
//!
//! Plain configuration values. The engine accepts any valid wiring; these
//! are provided so callers and tests do not have to repeat them.

/// Rotor I wiring.
pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
/// Rotor I turnover notch.
pub const NOTCH_I: char = 'Q';

/// Rotor II wiring.
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
/// Rotor II turnover notch.
pub const NOTCH_II: char = 'E';

/// Rotor III wiring.
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
/// Rotor III turnover notch.
pub const NOTCH_III: char = 'V';

/// Rotor IV wiring.
pub const ROTOR_IV: &str = "ESOVPZJAYQUIRHXLNFTGKDCMWB";
/// Rotor IV turnover notch.
pub const NOTCH_IV: char = 'J';

/// Rotor V wiring.
pub const ROTOR_V: &str = "VZBRGITYUPSDNHLXAWMJQOFECK";
/// Rotor V turnover notch.
pub const NOTCH_V: char = 'Z';

/// Reflector B wiring, the default reflector.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Reflector C wiring.
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";
