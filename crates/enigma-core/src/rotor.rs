//! Single rotor: wiring, notch, position and ring setting
//!
//! Substitution uses the offset convention
//!
//! ```text
//! entry  = (input + position - ring_setting) mod 26
//! output = (wiring(entry) - position + ring_setting) mod 26
//! ```
//!
//! on both passes, with the inverse wiring on the way back.

use crate::alphabet::Letter;
use crate::error::CatalogError;
use crate::permutation::PermutationTable;

/// Catalog entry describing one rotor model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    name: String,
    wiring: PermutationTable,
    notch: Letter,
}

impl RotorSpec {
    /// Build from a wiring string and the position at which it carries
    pub fn new(name: impl Into<String>, wiring: &str, notch: Letter) -> Result<Self, CatalogError> {
        Ok(Self {
            name: name.into(),
            wiring: PermutationTable::from_wiring(wiring)?,
            notch,
        })
    }

    /// Catalog name (`"I"`, `"II"`, ...)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notch position
    #[must_use]
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Mount this rotor model with a start position and ring setting
    #[must_use]
    pub fn mount(&self, position: Letter, ring_setting: Letter) -> Rotor {
        Rotor {
            name: self.name.clone(),
            wiring: self.wiring,
            notch: self.notch,
            position,
            ring_setting,
        }
    }
}

/// Mounted rotor with mutable position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: PermutationTable,
    notch: Letter,
    position: Letter,
    ring_setting: Letter,
}

impl Rotor {
    /// Catalog name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current position
    #[must_use]
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Ring setting
    #[must_use]
    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Notch position
    #[must_use]
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Move the rotor to `position` without touching the ring setting
    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Whether the current position is the notch position.
    ///
    /// Drives stepping only; substitution ignores the notch.
    #[inline]
    #[must_use]
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Advance one position, returning whether the rotor was at its notch
    pub fn step(&mut self) -> bool {
        let carried = self.at_notch();
        self.position = self.position.next();
        carried
    }

    /// Right-to-left pass through the wiring
    #[inline]
    #[must_use]
    pub fn signal_forward(&self, input: Letter) -> Letter {
        Self::offset_lookup(input, self.position, self.ring_setting, |l| self.wiring.apply(l))
    }

    /// Left-to-right pass through the inverse wiring
    #[inline]
    #[must_use]
    pub fn signal_backward(&self, input: Letter) -> Letter {
        Self::offset_lookup(input, self.position, self.ring_setting, |l| self.wiring.invert(l))
    }

    #[inline]
    fn offset_lookup(
        input: Letter,
        position: Letter,
        ring_setting: Letter,
        table: impl Fn(Letter) -> Letter,
    ) -> Letter {
        let entry = input.plus(position.index()).minus(ring_setting.index());
        table(entry).minus(position.index()).plus(ring_setting.index())
    }
}
