//! `enigma encode`

use crate::config::CliConfig;
use anyhow::{Context, Result};
use enigma_core::EnigmaMachine;
use tracing::info;

/// Encode `text` with the configured machine from its start positions
pub fn run(config: &CliConfig, text: &str) -> Result<String> {
    let mut machine = EnigmaMachine::historical(&config.machine)
        .context("Invalid machine configuration")?
        .with_policy(config.policy);
    let output = machine
        .encode_message(text)
        .with_context(|| format!("Cannot encode under the {} policy", machine.policy()))?;
    info!(letters = count_letters(&output), "encoded message");
    Ok(output)
}

fn count_letters(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}
