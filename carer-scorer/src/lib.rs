//! Desirability scoring for carers.
//!
//! [`CarerScorer`] starts from a carer's average review and adjusts it in a
//! fixed sequence, each step compounding on the running value left by the
//! previous one:
//!
//! 1. baseline: `avg_review`;
//! 2. image penalty: `v - v * ((img_problems + 1) * image_penalty)`;
//! 3. recency penalty: `v - v * ((days_since_login + 1) * recency_penalty)`;
//! 4. experience bonus: `v + v * ((years_experience + 1) * experience_bonus)`;
//! 5. truncation toward zero to three decimal places.
//!
//! The steps do not commute, so the order is part of the contract. The first
//! column that is missing or not numeric stops scoring and the carer degrades
//! to `0` (see [`ScoreOutcome::Failed`](carer_core::ScoreOutcome::Failed)).
//! Values outside their documented domain are applied as they are.
//!
//! # Examples
//!
//! ```
//! use carer_core::{CarerRecord, Scorer};
//! use carer_scorer::CarerScorer;
//!
//! let carer = CarerRecord::new()
//!     .with_field("id", "1")
//!     .with_field("avg_review", "5")
//!     .with_field("img_problems", "0")
//!     .with_field("days_since_login", "0")
//!     .with_field("years_experience", "0");
//!
//! assert_eq!(CarerScorer::default().score(&carer).value(), 4.796);
//! ```

#![forbid(unsafe_code)]

use carer_core::{CarerRecord, Field, FieldError, ScoreOutcome, Scorer};

mod types;

pub use types::{ScoreBreakdown, ScoreWeights};

/// Scores are truncated to multiples of `1 / TRUNCATION_SCALE`.
pub const TRUNCATION_SCALE: f64 = 1000.0;

/// Compounding review, image, recency and experience scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarerScorer {
    weights: ScoreWeights,
}

impl CarerScorer {
    /// Build a scorer using custom weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Return the weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score `carer` and keep the running value after every step.
    ///
    /// Columns are read lazily, in step order, so a failure in one step
    /// leaves later columns unread.
    ///
    /// # Errors
    /// Returns the [`FieldError`] for the first consumed column that is
    /// missing, blank, or not a finite number.
    pub fn breakdown(&self, carer: &CarerRecord) -> Result<ScoreBreakdown, FieldError> {
        let baseline = carer.parse_number(Field::AvgReview)?;
        let after_images = penalise(
            baseline,
            carer.parse_number(Field::ImgProblems)?,
            self.weights.image_penalty,
        );
        let after_recency = penalise(
            after_images,
            carer.parse_number(Field::DaysSinceLogin)?,
            self.weights.recency_penalty,
        );
        let after_experience = reward(
            after_recency,
            carer.parse_number(Field::YearsExperience)?,
            self.weights.experience_bonus,
        );
        Ok(ScoreBreakdown {
            baseline,
            after_images,
            after_recency,
            after_experience,
            score: truncate_score(after_experience),
        })
    }
}

impl Scorer for CarerScorer {
    fn score(&self, carer: &CarerRecord) -> ScoreOutcome {
        self.breakdown(carer).map(|steps| steps.score).into()
    }
}

/// Truncate a running value toward zero to three decimal places.
///
/// # Examples
/// ```
/// use carer_scorer::truncate_score;
///
/// assert_eq!(truncate_score(4.79655), 4.796);
/// assert_eq!(truncate_score(-0.5586), -0.558);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "truncation scales, drops the fraction and scales back"
)]
pub fn truncate_score(value: f64) -> f64 {
    (value * TRUNCATION_SCALE).trunc() / TRUNCATION_SCALE
}

#[expect(
    clippy::float_arithmetic,
    reason = "penalties scale the running value by a per-unit rate"
)]
fn penalise(value: f64, count: f64, rate: f64) -> f64 {
    value - value * ((count + 1.0) * rate)
}

#[expect(
    clippy::float_arithmetic,
    reason = "bonuses scale the running value by a per-unit rate"
)]
fn reward(value: f64, count: f64, rate: f64) -> f64 {
    value + value * ((count + 1.0) * rate)
}
