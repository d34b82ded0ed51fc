//! Evolving Landscape - Novelty-driven evolutionary search over symbol sequences.
//!
//! Each round generates a random pool of fixed-length sequences over a
//! four-symbol alphabet, scores them by structural fitness plus novelty
//! against every sequence selected in earlier rounds, and archives the best.
//! The archive feeds back into later rounds' novelty scores.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, sequence and round result types
//! - `compute`: Fitness, novelty, archive and the round engine
//!
//! # Example
//!
//! ```rust,no_run
//! use evolving_landscape::{LandscapeConfig, LandscapeEngine};
//!
//! let mut engine = LandscapeEngine::new(LandscapeConfig::default()).unwrap();
//!
//! let results = engine.run_rounds(10, 1.0, |result| {
//!     println!("Round {}: score = {:.2}, seq = {}",
//!         result.round_num, result.score, result.seq);
//! }).unwrap();
//!
//! println!("Archive size after {} rounds: {}", results.len(), engine.archive().len());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{LandscapeEngine, LandscapeError, SequenceArchive};
pub use schema::{ALPHABET, ConfigError, LandscapeConfig, RoundResult, RunConfig, Sequence, Symbol};
