//! Error taxonomy for the cipher engine
//!
//! Static-table errors (`CatalogError`) can only arise from a corrupted
//! catalog. Everything a caller can provide wrongly surfaces as
//! `ConfigError` or `PlugboardError` and leaves the machine untouched.

use serde::{Deserialize, Serialize};

/// Malformed rotor wiring or reflector table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CatalogError {
    /// Wiring is not a bijection over the 26-letter alphabet
    #[error("Invalid wiring {wiring:?}: {reason}")]
    InvalidWiring {
        /// The offending wiring string
        wiring: String,
        /// Which part of the bijection check failed
        reason: String,
    },

    /// Reflector table is not a fixed-point-free involution
    #[error("Invalid reflector {name}: {reason}")]
    InvalidReflector {
        /// Reflector name
        name: String,
        /// Which part of the involution check failed
        reason: String,
    },

    /// Two catalog entries share a name
    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),
}

/// Plugboard pairing rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PlugboardError {
    /// A letter appears in more than one pair
    #[error("Letter {letter} is already paired")]
    DuplicateLetter {
        /// The reused letter
        letter: char,
    },

    /// A pair joins a letter to itself or uses a non-letter
    #[error("Invalid plugboard pair {first}{second}")]
    InvalidPair {
        /// First character of the pair as supplied
        first: char,
        /// Second character of the pair as supplied
        second: char,
    },

    /// More pairs than the alphabet allows
    #[error("Too many plugboard pairs: {count} (max {max})")]
    TooManyPairs {
        /// Number of pairs supplied
        count: usize,
        /// Maximum number of pairs
        max: usize,
    },

    /// Disconnect requested for a letter without a cable
    #[error("Letter {letter} is not connected")]
    NotConnected {
        /// The unplugged letter
        letter: char,
    },
}

/// Machine configuration rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConfigError {
    /// Wrong number of rotors
    #[error("Exactly {expected} rotors are required, got {actual}")]
    RotorCount {
        /// Required rotor count
        expected: usize,
        /// Supplied rotor count
        actual: usize,
    },

    /// Rotor name is not in the catalog
    #[error("Unknown rotor: {0}")]
    UnknownRotor(String),

    /// Reflector name is not in the catalog
    #[error("Unknown reflector: {0}")]
    UnknownReflector(String),

    /// Start position outside 0..=25
    #[error("Rotor {slot} position {value} is out of range 0..=25")]
    PositionOutOfRange {
        /// Rotor slot, 0 = left
        slot: usize,
        /// Supplied value
        value: u8,
    },

    /// Ring setting outside 0..=25
    #[error("Rotor {slot} ring setting {value} is out of range 0..=25")]
    RingSettingOutOfRange {
        /// Rotor slot, 0 = left
        slot: usize,
        /// Supplied value
        value: u8,
    },

    /// A setting value could not be parsed as a letter or index
    #[error("Invalid setting value {0:?}: expected A-Z or 0-25")]
    InvalidSettingValue(String),

    /// Non-letter policy name not recognised
    #[error("Unknown non-letter policy {0:?}: expected skip, pass-through or reject")]
    UnknownPolicy(String),

    /// Plugboard pair is not written as two characters
    #[error("Malformed plugboard pair {0:?}: expected two letters such as \"AB\"")]
    MalformedPlugPair(String),

    /// Plugboard part of the configuration is malformed
    #[error("Plugboard: {0}")]
    Plugboard(#[from] PlugboardError),

    /// Catalog tables failed validation while building the machine
    #[error("Catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Encoding aborted under the reject policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EncodeError {
    /// Input contained a character outside A-Z/a-z
    #[error("Non-letter {character:?} at offset {offset}")]
    NonLetter {
        /// The rejected character
        character: char,
        /// Character offset in the input
        offset: usize,
    },
}

/// Challenge lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ChallengeError {
    /// No stored solution for this identifier
    #[error("Unknown challenge: {0}")]
    UnknownChallenge(String),
}

/// Unified error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EnigmaError {
    /// Static table error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Plugboard error outside a full configuration
    #[error(transparent)]
    Plugboard(#[from] PlugboardError),

    /// Encoding error
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Challenge error
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}
