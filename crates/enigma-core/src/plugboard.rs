//! Plugboard (Steckerbrett)
//!
//! A partial matching on the alphabet. Unplugged letters map to themselves,
//! so `swap` is an involution whatever the cabling.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::PlugboardError;

/// Maximum number of cables: every letter paired
pub const MAX_PAIRS: usize = ALPHABET_LEN / 2;

/// Symmetric letter pairing applied on entry and exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [Letter; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Plugboard with no cables
    #[must_use]
    pub fn new() -> Self {
        let mut wiring = [Letter::A; ALPHABET_LEN];
        for (slot, letter) in wiring.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }
        Self { wiring }
    }

    /// Plugboard wired with `pairs`, validated as a whole
    pub fn with_pairs<I>(pairs: I) -> Result<Self, PlugboardError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut board = Self::new();
        board.configure(pairs)?;
        Ok(board)
    }

    /// Replace all cables with `pairs`.
    ///
    /// Either every pair is applied or none is: on error the previous
    /// cabling is kept.
    pub fn configure<I>(&mut self, pairs: I) -> Result<(), PlugboardError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let pairs: Vec<(char, char)> = pairs.into_iter().collect();
        if pairs.len() > MAX_PAIRS {
            return Err(PlugboardError::TooManyPairs {
                count: pairs.len(),
                max: MAX_PAIRS,
            });
        }
        let mut staged = Self::new();
        for (first, second) in pairs {
            staged.connect(first, second)?;
        }
        *self = staged;
        Ok(())
    }

    /// Add one cable between `first` and `second`
    pub fn connect(&mut self, first: char, second: char) -> Result<(), PlugboardError> {
        let invalid = PlugboardError::InvalidPair { first, second };
        let (a, b) = match (Letter::from_char(first), Letter::from_char(second)) {
            (Some(a), Some(b)) if a != b => (a, b),
            _ => return Err(invalid),
        };
        for letter in [a, b] {
            if self.is_connected(letter) {
                return Err(PlugboardError::DuplicateLetter {
                    letter: letter.to_char(),
                });
            }
        }
        self.wiring[a.as_usize()] = b;
        self.wiring[b.as_usize()] = a;
        Ok(())
    }

    /// Remove the cable plugged into `letter`, returning its partner
    pub fn disconnect(&mut self, letter: char) -> Result<char, PlugboardError> {
        let a = Letter::from_char(letter).ok_or(PlugboardError::InvalidPair {
            first: letter,
            second: letter,
        })?;
        if !self.is_connected(a) {
            return Err(PlugboardError::NotConnected {
                letter: a.to_char(),
            });
        }
        let b = self.wiring[a.as_usize()];
        self.wiring[a.as_usize()] = a;
        self.wiring[b.as_usize()] = b;
        Ok(b.to_char())
    }

    /// Remove every cable
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Pass one symbol through the board
    #[inline]
    #[must_use]
    pub fn swap(&self, symbol: Letter) -> Letter {
        self.wiring[symbol.as_usize()]
    }

    /// Whether `letter` has a cable
    #[must_use]
    pub fn is_connected(&self, letter: Letter) -> bool {
        self.wiring[letter.as_usize()] != letter
    }

    /// Number of cables
    #[must_use]
    pub fn pair_count(&self) -> usize {
        Letter::all().filter(|&l| self.is_connected(l)).count() / 2
    }

    /// Cables as `(lower, higher)` letter pairs in alphabetical order
    #[must_use]
    pub fn pairs(&self) -> Vec<(char, char)> {
        Letter::all()
            .filter_map(|l| {
                let partner = self.wiring[l.as_usize()];
                (partner > l).then_some((l.to_char(), partner.to_char()))
            })
            .collect()
    }
}
