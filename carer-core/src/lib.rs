//! Core domain types for ranking carers.
//!
//! A [`CarerRecord`] is the raw field-name-to-string mapping produced by
//! ingestion. A [`Scorer`] turns one record into a [`ScoreOutcome`], and
//! [`rank`] applies a scorer to a whole batch before ordering it by score.
//!
//! Malformed fields never abort a batch: the scorer reports a [`FieldError`]
//! and the affected carer degrades to a score of `0`.
//!
//! # Examples
//!
//! ```
//! use carer_core::{CarerRecord, Field, ScoreOutcome, Scorer, rank};
//!
//! struct ReviewScorer;
//!
//! impl Scorer for ReviewScorer {
//!     fn score(&self, carer: &CarerRecord) -> ScoreOutcome {
//!         carer.parse_number(Field::AvgReview).into()
//!     }
//! }
//!
//! let carers = vec![
//!     CarerRecord::new().with_field("id", "1").with_field("avg_review", "2.5"),
//!     CarerRecord::new().with_field("id", "2").with_field("avg_review", "4.0"),
//! ];
//! let ranking = rank(carers, &ReviewScorer);
//! assert_eq!(ranking.carers[0].record.id(), Some("2"));
//! ```

#![forbid(unsafe_code)]

mod carer_type;
mod field;
mod ranking;
mod record;
mod scorer;

pub use carer_type::{CarerType, UnknownCarerType};
pub use field::{Field, SCORE_COLUMN};
pub use ranking::{Ranking, ScoredCarer, rank};
pub use record::CarerRecord;
pub use scorer::{FieldError, FieldErrorCause, ScoreOutcome, Scorer};
