//! `enigma.toml` loading
//!
//! ```toml
//! policy = "pass-through"
//!
//! [machine]
//! reflector = "B"
//! plugboard = ["AB", "CD"]
//! rotors = [
//!     { name = "I", position = "A" },
//!     { name = "II", position = 4, ring_setting = "B" },
//!     { name = "III", position = "Q" },
//! ]
//!
//! [challenges]
//! 1 = "WELL DONE"
//! ```

use anyhow::{Context, Result};
use enigma_core::{ChallengeId, MachineSettings, NonLetterPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Effective CLI configuration; every section is optional in the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Machine the `encode` and `settings` commands start from
    pub machine: MachineSettings,
    /// Handling of characters outside A-Z
    pub policy: NonLetterPolicy,
    /// Stored solutions for `validate --challenge`
    pub challenges: BTreeMap<ChallengeId, String>,
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist
pub fn load_config(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CliConfig::default());
    }

    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: CliConfig = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
