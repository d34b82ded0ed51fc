//! Sequence and round result types.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single sequence symbol.
pub type Symbol = u8;

/// Symbols a generated sequence may contain.
pub const ALPHABET: [Symbol; 4] = [0, 1, 2, 3];

/// An ordered list of symbols, the unit being evolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    /// The symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
}

impl Deref for Sequence {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.0
    }
}

impl AsRef<[Symbol]> for Sequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl From<&[Symbol]> for Sequence {
    fn from(symbols: &[Symbol]) -> Self {
        Self(symbols.to_vec())
    }
}

impl fmt::Display for Sequence {
    /// Compact form, one digit per symbol (e.g. `0123`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Outcome of a single round: the best winner and the archive size after
/// the round's winners were appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Combined fitness of the best candidate.
    pub score: f32,
    /// The best candidate.
    pub seq: Sequence,
    /// Round number passed by the caller.
    pub round_num: u64,
    /// Archive length after appending this round's winners.
    pub archive_size: usize,
}
