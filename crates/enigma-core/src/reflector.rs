//! Reflector (Umkehrwalze)

use crate::alphabet::Letter;
use crate::error::CatalogError;
use crate::permutation::PermutationTable;

/// Named fixed-point-free involution that turns the signal around
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    table: PermutationTable,
}

impl Reflector {
    /// Build and validate a reflector from its wiring string
    pub fn new(name: impl Into<String>, wiring: &str) -> Result<Self, CatalogError> {
        let name = name.into();
        let table = PermutationTable::from_wiring(wiring)?;
        Self::from_table(name, table)
    }

    /// Validate an existing table as a reflector
    pub fn from_table(name: impl Into<String>, table: PermutationTable) -> Result<Self, CatalogError> {
        let name = name.into();
        if !table.is_involution() {
            return Err(CatalogError::InvalidReflector {
                name,
                reason: "table is not self-inverse".to_string(),
            });
        }
        if let Some(letter) = table.fixed_point() {
            return Err(CatalogError::InvalidReflector {
                name,
                reason: format!("{letter} maps to itself"),
            });
        }
        Ok(Self { name, table })
    }

    /// Catalog name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reflect one symbol
    #[inline]
    #[must_use]
    pub fn reflect(&self, symbol: Letter) -> Letter {
        self.table.apply(symbol)
    }

    /// Underlying table
    #[must_use]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }
}
