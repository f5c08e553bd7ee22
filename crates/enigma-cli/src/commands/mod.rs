//! Subcommand handlers

pub mod catalog;
pub mod encode;
pub mod settings;
pub mod validate;

use crate::config::CliConfig;
use anyhow::{ensure, Result};
use clap::Args;
use enigma_core::{parse_setting_value, NonLetterPolicy, PlugPair, RotorSetting};

/// Machine flags shared by `encode` and `settings`; each one overrides the
/// config file
#[derive(Debug, Clone, Default, Args)]
pub struct MachineArgs {
    /// Rotor order, left to right
    #[arg(long, value_delimiter = ',', value_name = "I,II,III")]
    pub rotors: Option<Vec<String>>,

    /// Start positions as letters or 0-25
    #[arg(long, value_delimiter = ',', value_name = "A,A,A")]
    pub positions: Option<Vec<String>>,

    /// Ring settings as letters or 0-25
    #[arg(long, value_delimiter = ',', value_name = "A,A,A")]
    pub rings: Option<Vec<String>>,

    /// Reflector name
    #[arg(long)]
    pub reflector: Option<String>,

    /// Plugboard cable, repeatable; replaces any cables from the config file
    #[arg(long = "plug", value_name = "AB")]
    pub plugs: Vec<PlugPair>,

    /// Non-letter handling: skip, pass-through or reject
    #[arg(long)]
    pub policy: Option<NonLetterPolicy>,
}

impl MachineArgs {
    /// Apply the flags on top of `config`
    pub fn apply(&self, config: &mut CliConfig) -> Result<()> {
        let machine = &mut config.machine;

        if let Some(names) = &self.rotors {
            machine.rotors = names
                .iter()
                .enumerate()
                .map(|(slot, name)| {
                    let previous = machine.rotors.get(slot);
                    RotorSetting::new(
                        name.trim(),
                        previous.map_or(0, |r| r.position),
                        previous.map_or(0, |r| r.ring_setting),
                    )
                })
                .collect();
        }

        if let Some(values) = &self.positions {
            ensure!(
                values.len() == machine.rotors.len(),
                "--positions has {} values for {} rotors",
                values.len(),
                machine.rotors.len()
            );
            for (rotor, value) in machine.rotors.iter_mut().zip(values) {
                rotor.position = parse_setting_value(value)?;
            }
        }

        if let Some(values) = &self.rings {
            ensure!(
                values.len() == machine.rotors.len(),
                "--rings has {} values for {} rotors",
                values.len(),
                machine.rotors.len()
            );
            for (rotor, value) in machine.rotors.iter_mut().zip(values) {
                rotor.ring_setting = parse_setting_value(value)?;
            }
        }

        if let Some(reflector) = &self.reflector {
            machine.reflector = reflector.trim().to_string();
        }
        if !self.plugs.is_empty() {
            machine.plugboard = self.plugs.clone();
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        Ok(())
    }
}
