//! Named rotor and reflector tables
//!
//! The historical Wehrmacht tables are validated once, on first use, and
//! shared read-only behind an `Arc`. Machines receive a catalog explicitly
//! instead of reaching for the static.

use crate::alphabet::Letter;
use crate::error::{CatalogError, ConfigError};
use crate::reflector::Reflector;
use crate::rotor::RotorSpec;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Rotor I–V wirings and notch letters
pub const HISTORICAL_ROTORS: [(&str, &str, char); 5] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", 'J'),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", 'Z'),
];

/// Reflector A, B and C wirings
pub const HISTORICAL_REFLECTORS: [(&str, &str); 3] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

static HISTORICAL: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let catalog = Catalog::try_historical()
        .unwrap_or_else(|err| panic!("built-in Enigma catalog is corrupt: {err}"));
    Arc::new(catalog)
});

/// Immutable set of rotor models and reflectors available to machines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rotors: Vec<RotorSpec>,
    reflectors: Vec<Reflector>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(rotors: Vec<RotorSpec>, reflectors: Vec<Reflector>) -> Result<Self, CatalogError> {
        for (i, rotor) in rotors.iter().enumerate() {
            if rotors[..i].iter().any(|r| r.name() == rotor.name()) {
                return Err(CatalogError::DuplicateEntry(rotor.name().to_string()));
            }
        }
        for (i, reflector) in reflectors.iter().enumerate() {
            if reflectors[..i].iter().any(|r| r.name() == reflector.name()) {
                return Err(CatalogError::DuplicateEntry(reflector.name().to_string()));
            }
        }
        Ok(Self { rotors, reflectors })
    }

    /// Shared historical catalog (rotors I–V, reflectors A–C).
    ///
    /// # Panics
    /// Panics on first use if the built-in tables fail validation.
    #[must_use]
    pub fn historical() -> Arc<Catalog> {
        Arc::clone(&HISTORICAL)
    }

    /// Build and validate the historical tables without caching
    pub fn try_historical() -> Result<Self, CatalogError> {
        let mut rotors = Vec::with_capacity(HISTORICAL_ROTORS.len());
        for (name, wiring, notch) in HISTORICAL_ROTORS {
            let notch = Letter::from_char(notch).ok_or_else(|| CatalogError::InvalidWiring {
                wiring: wiring.to_string(),
                reason: format!("notch {notch:?} is not a letter"),
            })?;
            rotors.push(RotorSpec::new(name, wiring, notch)?);
        }

        let mut reflectors = Vec::with_capacity(HISTORICAL_REFLECTORS.len());
        for (name, wiring) in HISTORICAL_REFLECTORS {
            reflectors.push(Reflector::new(name, wiring)?);
        }

        Self::new(rotors, reflectors)
    }

    /// Look up a rotor model by name
    pub fn rotor(&self, name: &str) -> Result<&RotorSpec, ConfigError> {
        self.rotors
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ConfigError::UnknownRotor(name.to_string()))
    }

    /// Look up a reflector by name
    pub fn reflector(&self, name: &str) -> Result<&Reflector, ConfigError> {
        self.reflectors
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ConfigError::UnknownReflector(name.to_string()))
    }

    /// Rotor models in catalog order
    #[must_use]
    pub fn rotors(&self) -> &[RotorSpec] {
        &self.rotors
    }

    /// Reflectors in catalog order
    #[must_use]
    pub fn reflectors(&self) -> &[Reflector] {
        &self.reflectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_historical_tables_are_valid() {
        let catalog = Catalog::try_historical().unwrap();
        assert_eq!(catalog.rotors().len(), 5);
        assert_eq!(catalog.reflectors().len(), 3);
    }

    #[test]
    fn test_historical_is_shared() {
        let a = Catalog::historical();
        let b = Catalog::historical();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::historical();
        assert_eq!(catalog.rotor("III").unwrap().notch().to_char(), 'V');
        assert_eq!(catalog.reflector("B").unwrap().name(), "B");
        assert_eq!(
            catalog.rotor("VI").unwrap_err(),
            ConfigError::UnknownRotor("VI".to_string())
        );
        assert_matches!(catalog.reflector("X"), Err(ConfigError::UnknownReflector(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let rotor = RotorSpec::new("I", HISTORICAL_ROTORS[0].1, Letter::A).unwrap();
        let err = Catalog::new(vec![rotor.clone(), rotor], Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateEntry("I".to_string()));
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
