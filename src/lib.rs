//! Facade crate for the carer ranking engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! compounding scorer behind the `scorer` feature.

#![forbid(unsafe_code)]

pub use carer_core::{
    CarerRecord, CarerType, Field, FieldError, FieldErrorCause, Ranking, SCORE_COLUMN,
    ScoreOutcome, ScoredCarer, Scorer, UnknownCarerType, rank,
};

#[cfg(feature = "scorer")]
pub use carer_scorer::{CarerScorer, ScoreBreakdown, ScoreWeights, truncate_score};
