//! Compute module - Fitness, novelty and round execution.

pub mod landscape;

pub use landscape::{LandscapeEngine, LandscapeError, SequenceArchive};
