//! Append-only archive of round winners.

use crate::schema::{Sequence, Symbol};

use super::engine::LandscapeError;
use super::novelty::mean_pairwise_distance;

/// Ordered history of winning sequences.
///
/// Entries are only ever appended (a whole round at a time) or cleared
/// together, and every entry has the archive's fixed sequence length.
#[derive(Debug, Clone)]
pub struct SequenceArchive {
    sequences: Vec<Sequence>,
    seq_length: usize,
}

impl SequenceArchive {
    /// Create an empty archive for sequences of `seq_length` symbols.
    pub fn new(seq_length: usize) -> Self {
        Self {
            sequences: Vec::new(),
            seq_length,
        }
    }

    /// Length every archived sequence has.
    pub fn seq_length(&self) -> usize {
        self.seq_length
    }

    /// Append sequences in order.
    ///
    /// Nothing is appended unless every sequence has the archive's length.
    pub fn extend<I>(&mut self, sequences: I) -> Result<(), LandscapeError>
    where
        I: IntoIterator<Item = Sequence>,
    {
        let incoming: Vec<Sequence> = sequences.into_iter().collect();
        if let Some(bad) = incoming.iter().find(|s| s.len() != self.seq_length) {
            return Err(LandscapeError::LengthMismatch {
                expected: self.seq_length,
                found: bad.len(),
            });
        }
        self.sequences.extend(incoming);
        Ok(())
    }

    /// Number of archived sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Check if archive is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Remove every archived sequence.
    pub fn clear(&mut self) {
        self.sequences.clear();
    }

    /// Get a sequence by insertion index.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    /// Iterate over raw symbol slices in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &[Symbol]> {
        self.sequences.iter().map(|s| s.symbols())
    }

    /// All archived sequences in insertion order.
    pub fn as_slice(&self) -> &[Sequence] {
        &self.sequences
    }

    /// The `n` most recently archived sequences, oldest first.
    pub fn last_n(&self, n: usize) -> &[Sequence] {
        let start = self.sequences.len().saturating_sub(n);
        &self.sequences[start..]
    }

    /// Mean pairwise Hamming distance between archived sequences.
    pub fn diversity(&self) -> f32 {
        let slices: Vec<&[Symbol]> = self.symbols().collect();
        mean_pairwise_distance(&slices)
    }
}

impl<'a> IntoIterator for &'a SequenceArchive {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
