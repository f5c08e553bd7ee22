//! The 26-symbol alphabet shared by every substitution stage

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of symbols on every wheel, reflector and plugboard
pub const ALPHABET_LEN: usize = 26;

/// One alphabet symbol, stored as its index `0..=25` (`A` = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`
    pub const A: Letter = Letter(0);

    /// Letter at `index`, or `None` when `index > 25`
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < ALPHABET_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Letter at `index` reduced modulo 26
    #[must_use]
    pub const fn wrapping(index: u8) -> Self {
        Self(index % ALPHABET_LEN as u8)
    }

    /// Case-insensitive conversion from an ASCII letter
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Index in `0..=25`
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Index as `usize`, for table lookups
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// `self + offset` modulo 26
    #[must_use]
    pub const fn plus(self, offset: u8) -> Self {
        Self((self.0 + offset % ALPHABET_LEN as u8) % ALPHABET_LEN as u8)
    }

    /// `self - offset` modulo 26
    #[must_use]
    pub const fn minus(self, offset: u8) -> Self {
        let offset = offset % ALPHABET_LEN as u8;
        Self((self.0 + ALPHABET_LEN as u8 - offset) % ALPHABET_LEN as u8)
    }

    /// Next letter, wrapping `Z` to `A`
    #[must_use]
    pub const fn next(self) -> Self {
        self.plus(1)
    }

    /// All 26 letters in order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<u8> for Letter {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| ConfigError::InvalidSettingValue(index.to_string()))
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl FromStr for Letter {
    type Err = ConfigError;

    /// Accepts a single letter (`"C"`, `"c"`) or an index (`"2"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_setting_value(s).and_then(Letter::try_from)
    }
}

/// Parse a position or ring setting given as a letter or a decimal index.
///
/// Returns the raw index without range checking when it is numeric, so
/// callers can report out-of-range values against the slot they belong to.
pub fn parse_setting_value(s: &str) -> Result<u8, ConfigError> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(letter) = Letter::from_char(c) {
            return Ok(letter.index());
        }
    }
    trimmed
        .parse::<u8>()
        .map_err(|_| ConfigError::InvalidSettingValue(s.to_string()))
}
