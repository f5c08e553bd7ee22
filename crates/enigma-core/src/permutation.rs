//! Fixed bijections over the alphabet
//!
//! A `PermutationTable` stores the forward mapping and its precomputed
//! inverse so both directions are a single array lookup.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::CatalogError;

/// Bijection of `0..=25` onto itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl PermutationTable {
    /// Build from a 26-character wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// Position `i` of the string is the image of letter `i`. Fails when a
    /// symbol is missing, repeated, or not a letter.
    pub fn from_wiring(wiring: &str) -> Result<Self, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidWiring {
            wiring: wiring.to_string(),
            reason,
        };

        let count = wiring.chars().count();
        if count != ALPHABET_LEN {
            return Err(invalid(format!("expected {ALPHABET_LEN} symbols, got {count}")));
        }

        let mut images = [Letter::A; ALPHABET_LEN];
        for (slot, c) in images.iter_mut().zip(wiring.chars()) {
            *slot = Letter::from_char(c).ok_or_else(|| invalid(format!("{c:?} is not a letter")))?;
        }
        Self::from_images(images).map_err(invalid)
    }

    /// Build from an ordered list of images
    pub fn from_letters(images: [Letter; ALPHABET_LEN]) -> Result<Self, CatalogError> {
        Self::from_images(images).map_err(|reason| CatalogError::InvalidWiring {
            wiring: images.iter().map(|l| l.to_char()).collect(),
            reason,
        })
    }

    fn from_images(forward: [Letter; ALPHABET_LEN]) -> Result<Self, String> {
        let mut inverse: [Option<Letter>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        for (input, output) in Letter::all().zip(forward) {
            let slot = &mut inverse[output.as_usize()];
            if slot.is_some() {
                return Err(format!("{output} appears more than once"));
            }
            *slot = Some(input);
        }

        let mut resolved = [Letter::A; ALPHABET_LEN];
        for (target, (letter, source)) in resolved.iter_mut().zip(Letter::all().zip(inverse)) {
            // 26 distinct images fill every slot
            *target = source.ok_or_else(|| format!("{letter} is missing"))?;
        }

        Ok(Self {
            forward,
            inverse: resolved,
        })
    }

    /// The identity permutation
    #[must_use]
    pub fn identity() -> Self {
        let mut forward = [Letter::A; ALPHABET_LEN];
        for (slot, letter) in forward.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }
        Self {
            forward,
            inverse: forward,
        }
    }

    /// Image of `symbol`
    #[inline]
    #[must_use]
    pub fn apply(&self, symbol: Letter) -> Letter {
        self.forward[symbol.as_usize()]
    }

    /// Preimage of `symbol`
    #[inline]
    #[must_use]
    pub fn invert(&self, symbol: Letter) -> Letter {
        self.inverse[symbol.as_usize()]
    }

    /// `apply(apply(x)) == x` for every `x`
    #[must_use]
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// First letter mapped to itself, if any
    #[must_use]
    pub fn fixed_point(&self) -> Option<Letter> {
        Letter::all().find(|&l| self.apply(l) == l)
    }

    /// Wiring string in the same form accepted by `from_wiring`
    #[must_use]
    pub fn to_wiring(&self) -> String {
        self.forward.iter().map(|l| l.to_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    #[test]
    fn test_apply_and_invert() {
        let table = PermutationTable::from_wiring(ROTOR_I).unwrap();
        let a = Letter::A;
        let e = Letter::wrapping(4);
        assert_eq!(table.apply(a), e);
        assert_eq!(table.invert(e), a);
        assert_eq!(table.to_wiring(), ROTOR_I);
        assert!(!table.is_involution());
    }

    #[test]
    fn test_lowercase_wiring_accepted() {
        let table = PermutationTable::from_wiring(&ROTOR_I.to_lowercase()).unwrap();
        assert_eq!(table.to_wiring(), ROTOR_I);
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let err = PermutationTable::from_wiring("EEMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap_err();
        assert_matches!(err, CatalogError::InvalidWiring { ref reason, .. } if reason.contains("E appears"));
    }

    #[test]
    fn test_rejects_wrong_length_and_non_letters() {
        assert!(PermutationTable::from_wiring("ABC").is_err());
        assert!(PermutationTable::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRC1").is_err());
    }

    #[test]
    fn test_identity() {
        let id = PermutationTable::identity();
        assert!(id.is_involution());
        assert_eq!(id.fixed_point(), Some(Letter::A));
    }
}
