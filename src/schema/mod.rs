//! Schema module - Configuration and result types for landscape search.

mod config;
mod round;

pub use config::*;
pub use round::*;
