//! # Usage Analysis
//!
//! Pure, deterministic calculations over already-generated series: summary
//! statistics, cost projections, time-of-use comparisons, carbon footprint,
//! and efficiency ratings. No I/O, no randomness, inputs are never mutated.

pub mod comparison;
pub mod costs;
pub mod efficiency;
pub mod summary;

pub use comparison::*;
pub use costs::*;
pub use efficiency::*;
pub use summary::*;

/// Errors from the analysis functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("cannot analyze an empty series")]
    EmptySeries,
}
