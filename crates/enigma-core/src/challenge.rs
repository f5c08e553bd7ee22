//! Solution checking for decryption challenges
//!
//! Stored challenge content lives outside the engine; it is reached through
//! `SolutionSource`. Comparison ignores case and everything that is not a
//! letter, so `"Well done!"` matches `"WELLDONE"`.

use crate::error::ChallengeError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Opaque challenge identifier assigned by the content store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChallengeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u32> for ChallengeId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Uppercase A-Z letters of `text`, everything else removed.
///
/// Only the cipher alphabet survives: accented and non-Latin letters are
/// dropped like punctuation.
#[must_use]
pub fn normalize_solution(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Whether `candidate` spells the same letters as `expected`
#[must_use]
pub fn validate_solution(candidate: &str, expected: &str) -> bool {
    normalize_solution(candidate) == normalize_solution(expected)
}

/// Read access to stored challenge solutions
pub trait SolutionSource {
    /// Stored plaintext solution for `id`
    fn solution(&self, id: &ChallengeId) -> Option<String>;
}

impl<S: SolutionSource + ?Sized> SolutionSource for &S {
    fn solution(&self, id: &ChallengeId) -> Option<String> {
        (**self).solution(id)
    }
}

impl SolutionSource for BTreeMap<ChallengeId, String> {
    fn solution(&self, id: &ChallengeId) -> Option<String> {
        self.get(id).cloned()
    }
}

impl SolutionSource for HashMap<ChallengeId, String> {
    fn solution(&self, id: &ChallengeId) -> Option<String> {
        self.get(id).cloned()
    }
}

/// Checks candidate plaintexts against a `SolutionSource`
#[derive(Debug, Clone)]
pub struct ChallengeValidator<S> {
    source: S,
}

impl<S: SolutionSource> ChallengeValidator<S> {
    /// Validator over `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Whether `candidate` solves challenge `id`
    pub fn validate(&self, id: &ChallengeId, candidate: &str) -> Result<bool, ChallengeError> {
        let expected = self
            .source
            .solution(id)
            .ok_or_else(|| ChallengeError::UnknownChallenge(id.to_string()))?;
        let correct = validate_solution(candidate, &expected);
        debug!(challenge = %id, correct, "validated challenge answer");
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_solution("Well done! You solved your first Enigma message."),
            "WELLDONEYOUSOLVEDYOURFIRSTENIGMAMESSAGE"
        );
        assert_eq!(normalize_solution("Über 2 go"), "BERGO");
        assert_eq!(normalize_solution("Straße"), "STRAE");
        assert_eq!(normalize_solution(""), "");
    }

    #[test]
    fn test_validate_solution() {
        assert!(validate_solution("well done", "WELL DONE!"));
        assert!(validate_solution("W-E-L-L DONE", "WELL DONE!"));
        assert!(!validate_solution("WELL DONE TOO", "WELL DONE!"));
        assert!(!validate_solution("", "WELL DONE!"));
        assert!(!validate_solution("ZURICH", "Zürich"));
        assert!(validate_solution("zrich", "Zürich"));
    }

    #[test]
    fn test_validator_with_map() {
        let mut store = BTreeMap::new();
        store.insert(ChallengeId::from(1), "WELL DONE!".to_string());
        let validator = ChallengeValidator::new(store);

        assert_eq!(validator.validate(&ChallengeId::from(1), "Well, done"), Ok(true));
        assert_eq!(validator.validate(&ChallengeId::from(1), "Wrong"), Ok(false));
        assert_eq!(
            validator.validate(&ChallengeId::from("missing"), "x"),
            Err(ChallengeError::UnknownChallenge("missing".to_string()))
        );
    }

    #[test]
    fn test_validator_by_reference() {
        let store: HashMap<ChallengeId, String> =
            [(ChallengeId::new("a"), "ULTRA".to_string())].into_iter().collect();
        let validator = ChallengeValidator::new(&store);
        assert_eq!(validator.validate(&ChallengeId::new("a"), "ultra"), Ok(true));
    }
}
