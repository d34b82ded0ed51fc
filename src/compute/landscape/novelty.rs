//! Novelty of a sequence relative to previously archived sequences.

use crate::schema::Symbol;

/// Number of nearest archived neighbors averaged into the novelty score.
pub const NOVELTY_NEIGHBORS: usize = 5;

/// Number of positions at which two sequences differ.
///
/// Positions present in only one of the two sequences count as mismatches,
/// so the distance between sequences of different lengths is the number of
/// differing positions in the shared prefix plus the length difference.
pub fn hamming_distance(a: &[Symbol], b: &[Symbol]) -> usize {
    let shared = a.iter().zip(b).filter(|(x, y)| x != y).count();
    shared + a.len().abs_diff(b.len())
}

/// Mean of the [`NOVELTY_NEIGHBORS`] smallest Hamming distances from `seq`
/// to the sequences in `archive`.
///
/// Returns 0 for an empty archive. With fewer archived sequences than
/// [`NOVELTY_NEIGHBORS`], all distances are averaged.
pub fn novelty_score<'a, I>(seq: &[Symbol], archive: I) -> f32
where
    I: IntoIterator<Item = &'a [Symbol]>,
{
    let mut distances: Vec<usize> = archive
        .into_iter()
        .map(|past| hamming_distance(seq, past))
        .collect();

    if distances.is_empty() {
        return 0.0;
    }

    let k = NOVELTY_NEIGHBORS.min(distances.len());
    // Only the k smallest are needed; their internal order is irrelevant.
    if k < distances.len() {
        distances.select_nth_unstable(k - 1);
    }
    let nearest: usize = distances[..k].iter().sum();

    nearest as f32 / k as f32
}

/// Mean pairwise Hamming distance across a set of sequences.
pub fn mean_pairwise_distance(sequences: &[&[Symbol]]) -> f32 {
    if sequences.len() < 2 {
        return 0.0;
    }

    let mut total_distance = 0usize;
    let mut count = 0usize;

    for i in 0..sequences.len() {
        for j in (i + 1)..sequences.len() {
            total_distance += hamming_distance(sequences[i], sequences[j]);
            count += 1;
        }
    }

    total_distance as f32 / count as f32
}
