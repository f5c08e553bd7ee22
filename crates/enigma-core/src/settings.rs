//! Typed machine configuration and its partially revealed public view

use crate::alphabet::{parse_setting_value, Letter};
use crate::catalog::Catalog;
use crate::error::{ConfigError, PlugboardError};
use crate::machine::resolve;
use crate::plugboard::Plugboard;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Setting value as written by a user: index or letter
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSettingValue {
    Index(u8),
    Text(String),
}

impl RawSettingValue {
    fn into_index(self) -> Result<u8, ConfigError> {
        match self {
            RawSettingValue::Index(index) => Ok(index),
            RawSettingValue::Text(text) => parse_setting_value(&text),
        }
    }
}

fn de_setting_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    RawSettingValue::deserialize(deserializer)?
        .into_index()
        .map_err(serde::de::Error::custom)
}

fn de_optional_setting_value<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u8>, D::Error> {
    Option::<RawSettingValue>::deserialize(deserializer)?
        .map(RawSettingValue::into_index)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// One rotor slot: catalog name, start position and ring setting.
///
/// Positions and ring settings deserialize from `0..=25` or `"A"`..`"Z"`.
/// Range checks happen when the machine is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSetting {
    /// Catalog name
    pub name: String,
    /// Start position
    #[serde(deserialize_with = "de_setting_value")]
    pub position: u8,
    /// Ring setting
    #[serde(default, deserialize_with = "de_setting_value")]
    pub ring_setting: u8,
}

impl RotorSetting {
    /// Slot with explicit position and ring setting indices
    pub fn new(name: impl Into<String>, position: u8, ring_setting: u8) -> Self {
        Self {
            name: name.into(),
            position,
            ring_setting,
        }
    }
}

/// Plugboard cable written as two letters, serialized as `"AB"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlugPair(pub char, pub char);

impl PlugPair {
    /// Uppercased pair with the lower letter first
    #[must_use]
    pub fn normalized(self) -> (char, char) {
        let a = self.0.to_ascii_uppercase();
        let b = self.1.to_ascii_uppercase();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl From<(char, char)> for PlugPair {
    fn from((a, b): (char, char)) -> Self {
        Self(a, b)
    }
}

impl From<PlugPair> for (char, char) {
    fn from(pair: PlugPair) -> Self {
        (pair.0, pair.1)
    }
}

impl FromStr for PlugPair {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Ok(Self(a, b)),
            _ => Err(ConfigError::MalformedPlugPair(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlugPair {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlugPair> for String {
    fn from(pair: PlugPair) -> Self {
        pair.to_string()
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// What `encode_message` does with characters outside A–Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonLetterPolicy {
    /// Drop the character; rotors do not step
    #[default]
    Skip,
    /// Copy the character to the output unchanged; rotors do not step
    PassThrough,
    /// Fail the whole message before any rotor moves
    Reject,
}

impl FromStr for NonLetterPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "pass-through" | "passthrough" => Ok(Self::PassThrough),
            "reject" => Ok(Self::Reject),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for NonLetterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Skip => "skip",
            Self::PassThrough => "pass-through",
            Self::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// Complete machine configuration: rotor order with start positions and
/// ring settings, reflector, plugboard cables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Rotor slots, left to right
    pub rotors: Vec<RotorSetting>,
    /// Reflector name
    pub reflector: String,
    /// Plugboard cables
    #[serde(default)]
    pub plugboard: Vec<PlugPair>,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            rotors: vec![
                RotorSetting::new("I", 0, 0),
                RotorSetting::new("II", 0, 0),
                RotorSetting::new("III", 0, 0),
            ],
            reflector: "B".to_string(),
            plugboard: Vec::new(),
        }
    }
}

impl MachineSettings {
    /// Run every configuration check without building a machine
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        resolve(catalog, self).map(|_| ())
    }

    /// Start positions as letters, if all are in range
    #[must_use]
    pub fn positions(&self) -> Option<Vec<Letter>> {
        self.rotors.iter().map(|r| Letter::new(r.position)).collect()
    }

    /// Plugboard cables uppercased, lower letter first, sorted
    #[must_use]
    pub fn normalized_plugboard(&self) -> Vec<(char, char)> {
        normalize_pairs(&self.plugboard)
    }
}

fn normalize_pairs(pairs: &[PlugPair]) -> Vec<(char, char)> {
    let mut out: Vec<(char, char)> = pairs.iter().map(|p| p.normalized()).collect();
    out.sort_unstable();
    out
}

/// Rotor slot in a public challenge view; `None` marks an unrevealed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRotorSetting {
    /// Catalog name
    pub name: String,
    /// Start position, if revealed
    #[serde(default, deserialize_with = "de_optional_setting_value")]
    pub position: Option<u8>,
    /// Ring setting, if revealed
    #[serde(default, deserialize_with = "de_optional_setting_value")]
    pub ring_setting: Option<u8>,
}

/// Partially revealed machine configuration handed to a player.
///
/// Hidden fields are a presentation concern: the engine itself only ever
/// runs complete `MachineSettings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSettings {
    /// Rotor slots, left to right
    pub rotors: Vec<ChallengeRotorSetting>,
    /// Reflector name
    pub reflector: String,
    /// Plugboard cables, `None` when withheld
    #[serde(default)]
    pub plugboard: Option<Vec<PlugPair>>,
}

impl ChallengeSettings {
    /// Public view that reveals every field of `settings`
    #[must_use]
    pub fn revealing_all(settings: &MachineSettings) -> Self {
        Self {
            rotors: settings
                .rotors
                .iter()
                .map(|r| ChallengeRotorSetting {
                    name: r.name.clone(),
                    position: Some(r.position),
                    ring_setting: Some(r.ring_setting),
                })
                .collect(),
            reflector: settings.reflector.clone(),
            plugboard: Some(settings.plugboard.clone()),
        }
    }

    /// Withhold the start position of rotor `slot` (0 = left)
    #[must_use]
    pub fn hide_position(mut self, slot: usize) -> Self {
        if let Some(rotor) = self.rotors.get_mut(slot) {
            rotor.position = None;
        }
        self
    }

    /// Withhold the ring setting of rotor `slot` (0 = left)
    #[must_use]
    pub fn hide_ring_setting(mut self, slot: usize) -> Self {
        if let Some(rotor) = self.rotors.get_mut(slot) {
            rotor.ring_setting = None;
        }
        self
    }

    /// Withhold the plugboard cabling
    #[must_use]
    pub fn hide_plugboard(mut self) -> Self {
        self.plugboard = None;
        self
    }

    /// Number of withheld fields
    #[must_use]
    pub fn hidden_fields(&self) -> usize {
        let rotor_fields: usize = self
            .rotors
            .iter()
            .map(|r| usize::from(r.position.is_none()) + usize::from(r.ring_setting.is_none()))
            .sum();
        rotor_fields + usize::from(self.plugboard.is_none())
    }

    /// Whether nothing is withheld
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.hidden_fields() == 0
    }

    /// Whether a complete guess agrees with every revealed field
    #[must_use]
    pub fn admits(&self, guess: &MachineSettings) -> bool {
        if self.rotors.len() != guess.rotors.len() || self.reflector != guess.reflector {
            return false;
        }
        let rotors_match = self.rotors.iter().zip(&guess.rotors).all(|(public, full)| {
            public.name == full.name
                && public.position.map_or(true, |p| p == full.position)
                && public.ring_setting.map_or(true, |r| r == full.ring_setting)
        });
        let plugboard_matches = self
            .plugboard
            .as_ref()
            .map_or(true, |pairs| normalize_pairs(pairs) == guess.normalized_plugboard());
        rotors_match && plugboard_matches
    }

    /// Complete settings when nothing is withheld
    #[must_use]
    pub fn to_machine_settings(&self) -> Option<MachineSettings> {
        let rotors = self
            .rotors
            .iter()
            .map(|r| Some(RotorSetting::new(r.name.clone(), r.position?, r.ring_setting?)))
            .collect::<Option<Vec<_>>>()?;
        Some(MachineSettings {
            rotors,
            reflector: self.reflector.clone(),
            plugboard: self.plugboard.clone()?,
        })
    }
}

/// Check that `pairs` could be wired on a plugboard
pub fn validate_plug_pairs(pairs: &[PlugPair]) -> Result<(), PlugboardError> {
    Plugboard::with_pairs(pairs.iter().map(|&p| <(char, char)>::from(p))).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_json_with_letters_and_indices() {
        let json = r#"{
            "rotors": [
                {"name": "I", "position": "A", "ring_setting": 0},
                {"name": "II", "position": 1, "ring_setting": "c"},
                {"name": "III", "position": "2"}
            ],
            "reflector": "B",
            "plugboard": ["AB", "cd"]
        }"#;
        let settings: MachineSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.rotors[0], RotorSetting::new("I", 0, 0));
        assert_eq!(settings.rotors[1], RotorSetting::new("II", 1, 2));
        assert_eq!(settings.rotors[2], RotorSetting::new("III", 2, 0));
        assert_eq!(settings.plugboard, vec![PlugPair('A', 'B'), PlugPair('c', 'd')]);
        assert_eq!(settings.normalized_plugboard(), vec![('A', 'B'), ('C', 'D')]);
    }

    #[test]
    fn test_settings_serialize_as_indices() {
        let mut settings = MachineSettings::default();
        settings.plugboard.push(PlugPair('A', 'B'));
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["rotors"][1]["position"], 0);
        assert_eq!(value["plugboard"][0], "AB");
        let back: MachineSettings = serde_json::from_value(value).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_malformed_values_rejected() {
        let bad_value = r#"{"rotors": [{"name": "I", "position": "AA"}], "reflector": "B"}"#;
        assert!(serde_json::from_str::<MachineSettings>(bad_value).is_err());

        let bad_pair = r#"{"rotors": [], "reflector": "B", "plugboard": ["ABC"]}"#;
        assert!(serde_json::from_str::<MachineSettings>(bad_pair).is_err());
    }

    #[test]
    fn test_validate() {
        let catalog = Catalog::historical();
        assert!(MachineSettings::default().validate(&catalog).is_ok());

        let mut settings = MachineSettings::default();
        settings.rotors.pop();
        assert_eq!(
            settings.validate(&catalog),
            Err(ConfigError::RotorCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("skip".parse(), Ok(NonLetterPolicy::Skip));
        assert_eq!("Pass-Through".parse(), Ok(NonLetterPolicy::PassThrough));
        assert_eq!("reject".parse(), Ok(NonLetterPolicy::Reject));
        let err = "drop".parse::<NonLetterPolicy>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownPolicy("drop".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown non-letter policy \"drop\": expected skip, pass-through or reject"
        );
        assert_eq!(NonLetterPolicy::PassThrough.to_string(), "pass-through");
        assert_eq!(
            serde_json::to_string(&NonLetterPolicy::PassThrough).unwrap(),
            "\"pass-through\""
        );
    }

    #[test]
    fn test_challenge_view() {
        let mut full = MachineSettings::default();
        full.rotors[1].position = 10;
        full.plugboard.push(PlugPair('A', 'B'));

        let public = ChallengeSettings::revealing_all(&full);
        assert!(public.is_fully_revealed());
        assert_eq!(public.to_machine_settings(), Some(full.clone()));

        let public = public.hide_position(1).hide_ring_setting(2).hide_plugboard();
        assert_eq!(public.hidden_fields(), 3);
        assert_eq!(public.to_machine_settings(), None);
        assert!(public.admits(&full));

        let mut guess = full.clone();
        guess.rotors[1].position = 3;
        guess.rotors[2].ring_setting = 7;
        guess.plugboard.clear();
        assert!(public.admits(&guess));

        guess.rotors[0].position = 5;
        assert!(!public.admits(&guess));
    }

    #[test]
    fn test_challenge_view_from_json_with_nulls() {
        let json = r#"{
            "rotors": [
                {"name": "I", "position": 23, "ring_setting": 3},
                {"name": "II", "position": null, "ring_setting": "F"},
                {"name": "III", "position": 12, "ring_setting": 1}
            ],
            "reflector": "B",
            "plugboard": []
        }"#;
        let public: ChallengeSettings = serde_json::from_str(json).unwrap();
        assert_eq!(public.rotors[1].position, None);
        assert_eq!(public.rotors[1].ring_setting, Some(5));
        assert_eq!(public.hidden_fields(), 1);
    }

    #[test]
    fn test_validate_plug_pairs() {
        assert!(validate_plug_pairs(&[PlugPair('A', 'B')]).is_ok());
        assert_eq!(
            validate_plug_pairs(&[PlugPair('A', 'B'), PlugPair('B', 'C')]),
            Err(PlugboardError::DuplicateLetter { letter: 'B' })
        );
    }
}
