//! Command-line front-end for the Enigma engine
//!
//! Encodes text, checks challenge answers and inspects the rotor catalog.
//! Machine settings come from `enigma.toml` and can be overridden per call.

use anyhow::Result;
use clap::{Parser, Subcommand};
use enigma_core::{Catalog, ChallengeId};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{validate::Expected, MachineArgs};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Enigma I rotor cipher machine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "enigma.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt text from the configured start positions
    Encode {
        #[command(flatten)]
        machine: MachineArgs,

        /// Text to transform
        text: String,
    },

    /// Check a candidate plaintext
    #[command(group(clap::ArgGroup::new("target").required(true)))]
    Validate {
        /// Expected plaintext
        #[arg(long, group = "target")]
        expected: Option<String>,

        /// Stored challenge from the config file's [challenges] table
        #[arg(long, group = "target")]
        challenge: Option<String>,

        /// Candidate plaintext
        candidate: String,
    },

    /// List available rotors and reflectors
    Catalog,

    /// Print the effective machine settings as JSON
    Settings {
        #[command(flatten)]
        machine: MachineArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config(&cli.config)?;
    let catalog = Catalog::historical();

    match cli.command {
        Commands::Encode { machine, text } => {
            machine.apply(&mut config)?;
            println!("{}", commands::encode::run(&config, &text)?);
        }

        Commands::Validate {
            expected,
            challenge,
            candidate,
        } => {
            let target = match (expected, challenge) {
                (Some(text), _) => Expected::Text(text),
                (None, Some(id)) => Expected::Challenge(ChallengeId::new(id)),
                (None, None) => anyhow::bail!("either --expected or --challenge is required"),
            };
            println!("{}", commands::validate::run(&config, &target, &candidate)?);
        }

        Commands::Catalog => {
            print!("{}", commands::catalog::run(&catalog));
        }

        Commands::Settings { machine } => {
            machine.apply(&mut config)?;
            println!("{}", commands::settings::run(&config, &catalog)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enigma_core::{NonLetterPolicy, PlugPair};

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "enigma",
            "-v",
            "encode",
            "--rotors",
            "II,IV,V",
            "--positions",
            "B,L,C",
            "--plug",
            "AV",
            "--plug",
            "BS",
            "--policy",
            "pass-through",
            "HELLO WORLD",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("enigma.toml"));
        let Commands::Encode { machine, text } = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(text, "HELLO WORLD");
        assert_eq!(
            machine.rotors,
            Some(vec!["II".to_string(), "IV".to_string(), "V".to_string()])
        );
        assert_eq!(machine.plugs, vec![PlugPair('A', 'V'), PlugPair('B', 'S')]);
        assert_eq!(machine.policy, Some(NonLetterPolicy::PassThrough));
    }

    #[test]
    fn test_validate_needs_target() {
        assert!(Cli::try_parse_from(["enigma", "validate", "HELLO"]).is_err());
        assert!(Cli::try_parse_from([
            "enigma",
            "validate",
            "--expected",
            "A",
            "--challenge",
            "1",
            "HELLO"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["enigma", "validate", "--challenge", "1", "HELLO"]).is_ok());
    }

    #[test]
    fn test_bad_plug_rejected() {
        assert!(Cli::try_parse_from(["enigma", "encode", "--plug", "ABC", "X"]).is_err());
    }
}
