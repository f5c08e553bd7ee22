//! Enigma Core - Rotor Cipher Engine
//!
//! This crate implements the three-rotor Enigma cipher used by the challenge
//! front-end: wiring tables, stepping with the double-step anomaly, ring
//! settings, plugboard pairing and the reflector. It performs no I/O.
//!
//! # Signal Path
//!
//! For each letter the rotor assembly steps first, then the signal runs
//! plugboard → rotors (right to left) → reflector → rotors (left to right)
//! → plugboard. Because the reflector is a fixed-point-free involution the
//! whole path is self-inverse: encrypting and decrypting are the same
//! operation from the same start positions, and no letter ever maps to
//! itself.
//!
//! # Example
//!
//! ```
//! use enigma_core::{EnigmaMachine, MachineSettings, PlugPair};
//!
//! let mut settings = MachineSettings::default();
//! settings.plugboard = vec![PlugPair('A', 'B'), PlugPair('C', 'D')];
//!
//! let mut machine = EnigmaMachine::historical(&settings)?;
//! let ciphertext = machine.encode_message("HELLO")?;
//! assert_eq!(ciphertext, "ILACB");
//!
//! machine.reset();
//! assert_eq!(machine.encode_message(&ciphertext)?, "HELLO");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

#![forbid(unsafe_code)]

/// The 26-letter alphabet and setting value parsing
pub mod alphabet;

/// Rotor stack and stepping state machine
pub mod assembly;

/// Historical rotor and reflector tables
pub mod catalog;

/// Solution checking for decryption challenges
pub mod challenge;

/// Error taxonomy
pub mod error;

/// Machine composition and the encode operation
pub mod machine;

/// Bijections over the alphabet
pub mod permutation;

/// Plugboard pairing
pub mod plugboard;

/// Reflector involution
pub mod reflector;

/// Single rotor substitution and stepping
pub mod rotor;

/// Typed configuration and public challenge views
pub mod settings;

pub use alphabet::{parse_setting_value, Letter, ALPHABET_LEN};
pub use assembly::{RotorAssembly, ROTOR_COUNT};
pub use catalog::Catalog;
pub use challenge::{
    normalize_solution, validate_solution, ChallengeId, ChallengeValidator, SolutionSource,
};
pub use error::{
    CatalogError, ChallengeError, ConfigError, EncodeError, EnigmaError, PlugboardError,
};
pub use machine::EnigmaMachine;
pub use permutation::PermutationTable;
pub use plugboard::{Plugboard, MAX_PAIRS};
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorSpec};
pub use settings::{
    validate_plug_pairs, ChallengeRotorSetting, ChallengeSettings, MachineSettings,
    NonLetterPolicy, PlugPair, RotorSetting,
};
