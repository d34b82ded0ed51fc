//! Structural fitness for symbol sequences.

use crate::schema::Symbol;

/// Bonus awarded per differing adjacent pair and per mirrored match.
pub const PATTERN_BONUS: f32 = 2.0;

/// Structural score of a sequence.
///
/// Adds [`PATTERN_BONUS`] for every adjacent pair whose symbols differ, and
/// again for every position in the first half that equals its mirror
/// position (`seq[i] == seq[len - 1 - i]`). Sequences of length 0 or 1 score 0.
pub fn base_fitness(seq: &[Symbol]) -> f32 {
    let alternations = seq.windows(2).filter(|pair| pair[0] != pair[1]).count();

    let half = seq.len() / 2;
    let mirrored = seq
        .iter()
        .take(half)
        .zip(seq.iter().rev())
        .filter(|(front, back)| front == back)
        .count();

    (alternations + mirrored) as f32 * PATTERN_BONUS
}
