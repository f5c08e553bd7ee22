//! Enigma machine: plugboard, rotor assembly and reflector composed into
//! one keystroke operation
//!
//! Signal path per letter, after the assembly steps:
//! plugboard → rotors right-to-left → reflector → rotors left-to-right → plugboard.
//! The path is self-inverse, so the same configuration both encrypts and
//! decrypts.

use crate::alphabet::Letter;
use crate::assembly::{RotorAssembly, ROTOR_COUNT};
use crate::catalog::Catalog;
use crate::error::{ConfigError, EncodeError, PlugboardError};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::settings::{MachineSettings, NonLetterPolicy, PlugPair, RotorSetting};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Components built from a validated configuration
#[derive(Debug)]
pub(crate) struct Resolved {
    assembly: RotorAssembly,
    reflector: Reflector,
    plugboard: Plugboard,
}

/// Validate `settings` against `catalog` and build every component.
///
/// Nothing is mutated, so a failure leaves any existing machine intact.
pub(crate) fn resolve(catalog: &Catalog, settings: &MachineSettings) -> Result<Resolved, ConfigError> {
    if settings.rotors.len() != ROTOR_COUNT {
        return Err(ConfigError::RotorCount {
            expected: ROTOR_COUNT,
            actual: settings.rotors.len(),
        });
    }

    let mut mounted = Vec::with_capacity(ROTOR_COUNT);
    for (slot, setting) in settings.rotors.iter().enumerate() {
        let spec = catalog.rotor(&setting.name)?;
        let position = Letter::new(setting.position).ok_or(ConfigError::PositionOutOfRange {
            slot,
            value: setting.position,
        })?;
        let ring_setting =
            Letter::new(setting.ring_setting).ok_or(ConfigError::RingSettingOutOfRange {
                slot,
                value: setting.ring_setting,
            })?;
        mounted.push(spec.mount(position, ring_setting));
    }
    let rotors: [Rotor; ROTOR_COUNT] =
        mounted
            .try_into()
            .map_err(|rotors: Vec<Rotor>| ConfigError::RotorCount {
                expected: ROTOR_COUNT,
                actual: rotors.len(),
            })?;

    let reflector = catalog.reflector(&settings.reflector)?.clone();
    let plugboard = Plugboard::with_pairs(settings.plugboard.iter().map(|&p| <(char, char)>::from(p)))?;

    Ok(Resolved {
        assembly: RotorAssembly::new(rotors),
        reflector,
        plugboard,
    })
}

/// A configured machine. Rotor positions persist between calls until
/// `reset` or `configure`.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    catalog: Arc<Catalog>,
    assembly: RotorAssembly,
    reflector: Reflector,
    plugboard: Plugboard,
    start_positions: [Letter; ROTOR_COUNT],
    policy: NonLetterPolicy,
}

impl EnigmaMachine {
    /// Build a machine from `settings`, resolving names against `catalog`
    pub fn new(catalog: Arc<Catalog>, settings: &MachineSettings) -> Result<Self, ConfigError> {
        let resolved = resolve(&catalog, settings).map_err(|err| {
            warn!(error = %err, "rejected machine configuration");
            err
        })?;
        let start_positions = resolved.assembly.positions();
        let machine = Self {
            catalog,
            assembly: resolved.assembly,
            reflector: resolved.reflector,
            plugboard: resolved.plugboard,
            start_positions,
            policy: NonLetterPolicy::default(),
        };
        machine.log_configuration();
        Ok(machine)
    }

    /// Build a machine against the shared historical catalog
    pub fn historical(settings: &MachineSettings) -> Result<Self, ConfigError> {
        Self::new(Catalog::historical(), settings)
    }

    /// Same machine with a different non-letter policy
    #[must_use]
    pub fn with_policy(mut self, policy: NonLetterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current non-letter policy
    #[must_use]
    pub fn policy(&self) -> NonLetterPolicy {
        self.policy
    }

    /// Replace the whole configuration.
    ///
    /// Rotors restart at the positions in `settings`. On error the machine
    /// keeps its previous configuration and positions.
    pub fn configure(&mut self, settings: &MachineSettings) -> Result<(), ConfigError> {
        let resolved = resolve(&self.catalog, settings).map_err(|err| {
            warn!(error = %err, "rejected machine configuration");
            err
        })?;
        self.start_positions = resolved.assembly.positions();
        self.assembly = resolved.assembly;
        self.reflector = resolved.reflector;
        self.plugboard = resolved.plugboard;
        self.log_configuration();
        Ok(())
    }

    fn log_configuration(&self) {
        let order: Vec<&str> = self.assembly.rotors().iter().map(Rotor::name).collect();
        debug!(
            rotors = ?order,
            reflector = self.reflector.name(),
            plug_pairs = self.plugboard.pair_count(),
            "configured enigma machine"
        );
    }

    /// Return the rotors to their configured start positions
    pub fn reset(&mut self) {
        self.assembly.set_positions(self.start_positions());
    }

    /// One keystroke: step the assembly, then substitute `input`
    pub fn press(&mut self, input: Letter) -> Letter {
        self.assembly.step();
        self.substitute(input)
    }

    #[inline]
    fn substitute(&self, input: Letter) -> Letter {
        let signal = self.plugboard.swap(input);
        let signal = self.assembly.forward(signal);
        let signal = self.reflector.reflect(signal);
        let signal = self.assembly.backward(signal);
        self.plugboard.swap(signal)
    }

    /// Encode (or decode) `text`, continuing from the current positions.
    ///
    /// Letters are uppercased. Other characters follow the machine's
    /// `NonLetterPolicy`; under `Reject` the rotors do not move when the
    /// message is refused.
    pub fn encode_message(&mut self, text: &str) -> Result<String, EncodeError> {
        if self.policy == NonLetterPolicy::Reject {
            if let Some((offset, character)) = text
                .chars()
                .enumerate()
                .find(|(_, c)| Letter::from_char(*c).is_none())
            {
                debug!(offset, "rejected message containing a non-letter");
                return Err(EncodeError::NonLetter { character, offset });
            }
        }

        let mut output = String::with_capacity(text.len());
        let mut skipped = 0usize;
        for c in text.chars() {
            match Letter::from_char(c) {
                Some(letter) => output.push(self.press(letter).to_char()),
                None if self.policy == NonLetterPolicy::PassThrough => output.push(c),
                None => skipped += 1,
            }
        }

        trace!(
            input_chars = text.chars().count(),
            output_chars = output.chars().count(),
            skipped,
            positions = ?self.positions(),
            "encoded message"
        );
        Ok(output)
    }

    /// Current window letters, left to right
    #[must_use]
    pub fn positions(&self) -> [Letter; ROTOR_COUNT] {
        self.assembly.positions()
    }

    /// Configured start positions, left to right
    #[must_use]
    pub fn start_positions(&self) -> [Letter; ROTOR_COUNT] {
        self.start_positions
    }

    /// Add a plugboard cable without touching the rotors
    pub fn connect_plug(&mut self, first: char, second: char) -> Result<(), PlugboardError> {
        self.plugboard.connect(first, second)
    }

    /// Remove the plugboard cable on `letter`, returning its partner
    pub fn disconnect_plug(&mut self, letter: char) -> Result<char, PlugboardError> {
        self.plugboard.disconnect(letter)
    }

    /// Snapshot with the *current* rotor positions
    #[must_use]
    pub fn settings(&self) -> MachineSettings {
        self.snapshot(self.positions())
    }

    /// Snapshot with the configured start positions
    #[must_use]
    pub fn initial_settings(&self) -> MachineSettings {
        self.snapshot(self.start_positions())
    }

    fn snapshot(&self, positions: [Letter; ROTOR_COUNT]) -> MachineSettings {
        MachineSettings {
            rotors: self
                .assembly
                .rotors()
                .iter()
                .zip(positions)
                .map(|(rotor, position)| {
                    RotorSetting::new(rotor.name(), position.index(), rotor.ring_setting().index())
                })
                .collect(),
            reflector: self.reflector.name().to_string(),
            plugboard: self.plugboard.pairs().into_iter().map(PlugPair::from).collect(),
        }
    }
}
