//! `enigma settings`

use crate::config::CliConfig;
use anyhow::{Context, Result};
use enigma_core::Catalog;

/// Effective machine settings as pretty JSON, after validation
pub fn run(config: &CliConfig, catalog: &Catalog) -> Result<String> {
    config
        .machine
        .validate(catalog)
        .context("Invalid machine configuration")?;
    serde_json::to_string_pretty(&config.machine).context("Failed to serialize settings")
}
