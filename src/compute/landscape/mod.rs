//! Novelty-driven evolutionary search over symbol sequences.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Fitness** (`fitness`): Structural score rewarding alternation and mirror symmetry
//! - **Novelty** (`novelty`): Mean Hamming distance to the nearest archived sequences
//! - **Sequence Generation** (`sequence`): Seedable random candidate pools
//! - **Archive** (`archive`): Append-only history of round winners
//! - **Engine** (`engine`): Round execution tying the above together
//!
//! # Example
//!
//! ```rust
//! use evolving_landscape::schema::LandscapeConfig;
//! use evolving_landscape::compute::landscape::LandscapeEngine;
//!
//! let config = LandscapeConfig {
//!     seq_length: 8,
//!     pool_size: 20,
//!     top_k: 5,
//!     random_seed: Some(42),
//! };
//!
//! let mut engine = LandscapeEngine::new(config).unwrap();
//! for round in 0..3 {
//!     let result = engine.run_round(round, 1.0).unwrap();
//!     println!("Round {}: best score = {:.2}, archive = {}",
//!         result.round_num, result.score, result.archive_size);
//! }
//! assert_eq!(engine.archive().len(), 15);
//! ```
//!
//! # Novelty
//!
//! Novelty is the average of the five *smallest* distances to archived
//! sequences, added to the base fitness scaled by the caller's novelty
//! weight. A candidate identical to an archived sequence pulls its average
//! down, so candidates unlike everything archived so far score higher.

mod archive;
mod engine;
mod fitness;
mod novelty;
mod sequence;

pub use archive::SequenceArchive;
pub use engine::{DEFAULT_NOVELTY_WEIGHT, LandscapeEngine, LandscapeError};
pub use fitness::{PATTERN_BONUS, base_fitness};
pub use novelty::{NOVELTY_NEIGHBORS, hamming_distance, mean_pairwise_distance, novelty_score};
pub use sequence::SequenceRng;
