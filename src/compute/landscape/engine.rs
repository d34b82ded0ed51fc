//! The landscape engine: round execution over a growing archive.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::schema::{ConfigError, LandscapeConfig, RoundResult, Sequence, Symbol};

use super::archive::SequenceArchive;
use super::fitness::base_fitness;
use super::novelty::novelty_score;
use super::sequence::SequenceRng;

/// Novelty weight used when a caller has no preference.
pub const DEFAULT_NOVELTY_WEIGHT: f32 = 1.0;

/// Errors raised by engine construction and round execution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LandscapeError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Cannot select winners: pool size {pool_size}, top-k {top_k}")]
    EmptyPool { pool_size: usize, top_k: usize },
    #[error("Sequence length {found} does not match archive length {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

/// A scored pool member.
#[derive(Debug, Clone)]
struct ScoredCandidate {
    score: f32,
    seq: Sequence,
}

fn combined_fitness(seq: &[Symbol], archive: &SequenceArchive, novelty_weight: f32) -> f32 {
    base_fitness(seq) + novelty_weight * novelty_score(seq, archive.symbols())
}

/// Evolutionary search engine over fixed-length symbol sequences.
///
/// Each round draws a random pool, scores every candidate by structural
/// fitness plus weighted novelty against the archive, and appends the
/// `top_k` best to the archive. Later rounds therefore score novelty against
/// everything earlier rounds selected.
#[derive(Debug)]
pub struct LandscapeEngine {
    config: LandscapeConfig,
    rng: SequenceRng,
    archive: SequenceArchive,
    cancelled: Arc<AtomicBool>,
}

impl LandscapeEngine {
    /// Create a new engine with an empty archive.
    ///
    /// The random source is seeded from `config.random_seed` when set.
    pub fn new(config: LandscapeConfig) -> Result<Self, LandscapeError> {
        let rng = match config.random_seed {
            Some(seed) => SequenceRng::new(seed),
            None => SequenceRng::random(),
        };
        Self::build(config, rng)
    }

    /// Create a new engine with an explicit random seed.
    pub fn with_seed(config: LandscapeConfig, seed: u64) -> Result<Self, LandscapeError> {
        Self::build(config, SequenceRng::new(seed))
    }

    fn build(config: LandscapeConfig, rng: SequenceRng) -> Result<Self, LandscapeError> {
        if let Err(err) = config.validate() {
            log::trace!("rejected landscape config {config:?}: {err}");
            return Err(err.into());
        }

        let archive = SequenceArchive::new(config.seq_length);
        Ok(Self {
            config,
            rng,
            archive,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get cancellation handle for [`run_rounds`](Self::run_rounds).
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Engine configuration.
    pub fn config(&self) -> &LandscapeConfig {
        &self.config
    }

    /// Archived winners in insertion order.
    pub fn archive(&self) -> &SequenceArchive {
        &self.archive
    }

    /// Structural score of `seq`; independent of the archive.
    pub fn base_fitness(&self, seq: &[Symbol]) -> f32 {
        base_fitness(seq)
    }

    /// Mean distance from `seq` to its nearest archived neighbors.
    pub fn novelty_score(&self, seq: &[Symbol]) -> f32 {
        novelty_score(seq, self.archive.symbols())
    }

    /// Base fitness plus weighted novelty.
    ///
    /// `round_num` does not currently affect the score.
    pub fn combined_fitness(&self, seq: &[Symbol], _round_num: u64, novelty_weight: f32) -> f32 {
        combined_fitness(seq, &self.archive, novelty_weight)
    }

    /// Run one round: generate a pool, score it, archive the `top_k` best.
    ///
    /// The archive grows by exactly the configured `top_k`.
    pub fn run_round(
        &mut self,
        round_num: u64,
        novelty_weight: f32,
    ) -> Result<RoundResult, LandscapeError> {
        let (pool_size, top_k) = (self.config.pool_size, self.config.top_k);
        self.run_sized_round(round_num, novelty_weight, pool_size, top_k)
    }

    /// Round body for an explicit pool size and winner count.
    ///
    /// Fails before generating anything if either count is zero, or if
    /// `top_k` exceeds `pool_size`; the archive is unchanged on error.
    fn run_sized_round(
        &mut self,
        round_num: u64,
        novelty_weight: f32,
        pool_size: usize,
        top_k: usize,
    ) -> Result<RoundResult, LandscapeError> {
        if pool_size == 0 || top_k == 0 {
            return Err(LandscapeError::EmptyPool { pool_size, top_k });
        }
        if top_k > pool_size {
            return Err(ConfigError::TopKExceedsPool { top_k, pool_size }.into());
        }

        let pool = self.rng.random_pool(pool_size, self.config.seq_length);

        // Scoring reads the archive as it stood before this round.
        let archive = &self.archive;
        let mut scored: Vec<ScoredCandidate> = pool
            .into_par_iter()
            .map(|seq| ScoredCandidate {
                score: combined_fitness(&seq, archive, novelty_weight),
                seq,
            })
            .collect();

        // Stable: equal scores keep generation order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        let best = scored
            .first()
            .cloned()
            .ok_or(LandscapeError::EmptyPool { pool_size, top_k })?;

        self.archive
            .extend(scored.into_iter().map(|candidate| candidate.seq))?;

        let archive_size = self.archive.len();
        log::debug!(
            "round {}: pool={} best={:.2} ({}) archive={}",
            round_num,
            pool_size,
            best.score,
            best.seq,
            archive_size
        );
        // Pairwise diversity is quadratic in the archive size.
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "round {}: archive diversity={:.3}",
                round_num,
                self.archive.diversity()
            );
        }

        Ok(RoundResult {
            score: best.score,
            seq: best.seq,
            round_num,
            archive_size,
        })
    }

    /// Run rounds `0..rounds` in order, reporting each result to `callback`.
    ///
    /// Stops at the first failing round, or early once the
    /// [`cancel_handle`](Self::cancel_handle) is set. The flag is cleared on
    /// return so the engine can run again.
    pub fn run_rounds<F>(
        &mut self,
        rounds: u64,
        novelty_weight: f32,
        mut callback: F,
    ) -> Result<Vec<RoundResult>, LandscapeError>
    where
        F: FnMut(&RoundResult),
    {
        let mut results = Vec::new();
        for round_num in 0..rounds {
            if self.cancelled.swap(false, Ordering::Relaxed) {
                log::debug!("cancelled after {} rounds", results.len());
                break;
            }
            match self.run_round(round_num, novelty_weight) {
                Ok(result) => {
                    callback(&result);
                    results.push(result);
                }
                Err(err) => {
                    self.cancelled.store(false, Ordering::Relaxed);
                    return Err(err);
                }
            }
        }
        self.cancelled.store(false, Ordering::Relaxed);
        Ok(results)
    }

    /// Seed the archive with existing sequences.
    ///
    /// Every sequence must have the configured length; nothing is appended
    /// otherwise.
    pub fn extend_archive<I>(&mut self, sequences: I) -> Result<(), LandscapeError>
    where
        I: IntoIterator<Item = Sequence>,
    {
        self.archive.extend(sequences)
    }

    /// Mean pairwise Hamming distance across the archive.
    pub fn archive_diversity(&self) -> f32 {
        self.archive.diversity()
    }

    /// Clear the archive. Configuration and random state are kept.
    pub fn reset(&mut self) {
        log::info!("resetting archive ({} sequences)", self.archive.len());
        self.archive.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> LandscapeConfig {
        LandscapeConfig {
            seq_length: 8,
            pool_size: 20,
            top_k: 5,
            random_seed: Some(42),
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = LandscapeEngine::new(LandscapeConfig::default()).unwrap();
        assert_eq!(engine.config().seq_length, 16);
        assert!(engine.archive().is_empty());
    }

    #[test]
    fn test_creation_rejects_top_k_above_pool() {
        let config = LandscapeConfig {
            pool_size: 10,
            top_k: 11,
            ..Default::default()
        };
        let err = LandscapeEngine::new(config).unwrap_err();
        assert_eq!(
            err,
            LandscapeError::Configuration(ConfigError::TopKExceedsPool {
                top_k: 11,
                pool_size: 10
            })
        );
    }

    #[test]
    fn test_creation_rejects_zero_sizes() {
        let config = LandscapeConfig {
            seq_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            LandscapeEngine::new(config),
            Err(LandscapeError::Configuration(ConfigError::ZeroSequenceLength))
        ));
    }

    #[test]
    fn test_run_round() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        let result = engine.run_round(0, DEFAULT_NOVELTY_WEIGHT).unwrap();

        assert_eq!(result.seq.len(), 8);
        assert_eq!(result.round_num, 0);
        assert_eq!(result.archive_size, 5);
        assert_eq!(engine.archive().len(), 5);
        assert!(engine.archive().iter().all(|s| s.len() == 8));
    }

    #[test]
    fn test_archive_grows_across_rounds() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        engine.run_round(0, 1.0).unwrap();
        let second = engine.run_round(1, 1.0).unwrap();

        assert_eq!(second.archive_size, 10);
        assert_eq!(engine.archive().len(), 10);
    }

    #[test]
    fn test_first_round_best_is_structural_maximum() {
        // With an empty archive novelty is 0, so the winner's score is its
        // base fitness, and it is the first sequence appended.
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        let result = engine.run_round(0, 1.0).unwrap();

        assert_eq!(result.score, base_fitness(&result.seq));
        assert_eq!(engine.archive().get(0), Some(&result.seq));
    }

    #[test]
    fn test_winners_appended_in_score_order() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        engine.run_round(0, 0.0).unwrap();

        let scores: Vec<f32> = engine
            .archive()
            .iter()
            .map(|s| base_fitness(s))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_seeded_engines_are_reproducible() {
        let mut a = LandscapeEngine::with_seed(small_config(), 9).unwrap();
        let mut b = LandscapeEngine::with_seed(small_config(), 9).unwrap();

        let ra = a.run_rounds(3, 1.0, |_| {}).unwrap();
        let rb = b.run_rounds(3, 1.0, |_| {}).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(a.archive().as_slice(), b.archive().as_slice());
    }

    #[test]
    fn test_empty_pool_leaves_archive_unchanged() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        engine.run_round(0, 1.0).unwrap();
        let before = engine.archive().as_slice().to_vec();

        assert_eq!(
            engine.run_sized_round(1, 1.0, 0, 5),
            Err(LandscapeError::EmptyPool {
                pool_size: 0,
                top_k: 5
            })
        );
        assert!(matches!(
            engine.run_sized_round(1, 1.0, 20, 0),
            Err(LandscapeError::EmptyPool { top_k: 0, .. })
        ));
        assert!(matches!(
            engine.run_sized_round(1, 1.0, 3, 4),
            Err(LandscapeError::Configuration(
                ConfigError::TopKExceedsPool { .. }
            ))
        ));

        assert_eq!(engine.archive().as_slice(), before.as_slice());
    }

    #[test]
    fn test_archive_grows_by_configured_top_k_only() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        for (round, weight) in [(0, 1.0), (1, 0.0), (2, 5.0)] {
            let result = engine.run_round(round, weight).unwrap();
            assert_eq!(result.archive_size, (round as usize + 1) * 5);
        }
        assert_eq!(engine.config(), &small_config());
    }

    #[test]
    fn test_novelty_against_seeded_archive() {
        let config = LandscapeConfig {
            seq_length: 4,
            pool_size: 4,
            top_k: 1,
            random_seed: Some(1),
        };
        let mut engine = LandscapeEngine::new(config).unwrap();
        assert_eq!(engine.novelty_score(&[0, 1, 2, 3]), 0.0);

        engine
            .extend_archive(vec![Sequence::from(vec![0, 0, 0, 0])])
            .unwrap();

        let close = engine.novelty_score(&[0, 0, 0, 1]);
        let far = engine.novelty_score(&[1, 1, 1, 1]);
        assert!(far > close);

        let combined = engine.combined_fitness(&[1, 1, 1, 1], 0, 2.0);
        assert_eq!(combined, base_fitness(&[1, 1, 1, 1]) + 2.0 * far);
    }

    #[test]
    fn test_extend_archive_rejects_wrong_length() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        let err = engine
            .extend_archive(vec![Sequence::from(vec![0, 1, 2])])
            .unwrap_err();
        assert_eq!(
            err,
            LandscapeError::LengthMismatch {
                expected: 8,
                found: 3
            }
        );
        assert!(engine.archive().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        for round in 0..3 {
            engine.run_round(round, 1.0).unwrap();
        }
        assert_eq!(engine.archive().len(), 15);

        engine.reset();
        assert!(engine.archive().is_empty());
        assert_eq!(engine.config(), &small_config());

        let result = engine.run_round(3, 1.0).unwrap();
        assert_eq!(result.archive_size, 5);
    }

    #[test]
    fn test_run_rounds_callback() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        let mut seen = Vec::new();
        let results = engine
            .run_rounds(4, 1.0, |r| seen.push(r.round_num))
            .unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(results.last().map(|r| r.archive_size), Some(20));
    }

    #[test]
    fn test_run_rounds_unbounded_count_stops_on_cancel() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        let cancel = engine.cancel_handle();
        let results = engine
            .run_rounds(u64::MAX, 1.0, |r| {
                if r.round_num == 2 {
                    cancel.store(true, Ordering::Relaxed);
                }
            })
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(engine.archive().len(), 15);

        // The flag is cleared, so a later run proceeds.
        let again = engine.run_rounds(2, 1.0, |_| {}).unwrap();
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn test_run_rounds_cancelled_before_start() {
        let mut engine = LandscapeEngine::new(small_config()).unwrap();
        engine.cancel_handle().store(true, Ordering::Relaxed);

        let results = engine.run_rounds(10, 1.0, |_| {}).unwrap();
        assert!(results.is_empty());
        assert!(engine.archive().is_empty());
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<LandscapeEngine>();
    }
}
