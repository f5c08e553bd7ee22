//! `enigma validate`

use crate::config::CliConfig;
use anyhow::Result;
use enigma_core::{validate_solution, ChallengeId, ChallengeValidator};

/// What the candidate is checked against
#[derive(Debug, Clone)]
pub enum Expected {
    /// Plaintext given on the command line
    Text(String),
    /// Stored solution from the config file's `[challenges]` table
    Challenge(ChallengeId),
}

/// Returns `"correct"` or `"incorrect"`
pub fn run(config: &CliConfig, expected: &Expected, candidate: &str) -> Result<&'static str> {
    let correct = match expected {
        Expected::Text(text) => validate_solution(candidate, text),
        Expected::Challenge(id) => ChallengeValidator::new(&config.challenges).validate(id, candidate)?,
    };
    Ok(if correct { "correct" } else { "incorrect" })
}
