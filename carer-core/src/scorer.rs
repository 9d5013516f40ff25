//! Score carers.
//!
//! The `Scorer` trait assigns a desirability score to a
//! [`CarerRecord`](crate::CarerRecord). Scoring is total: a record with a
//! malformed field still produces an outcome, [`ScoreOutcome::Failed`], whose
//! value is `0`.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::{CarerRecord, Field};

/// Calculate a desirability score for a carer.
///
/// Higher scores rank first. Implementations must be deterministic and free
/// of side effects, and must be thread-safe (`Send` + `Sync`) so a single
/// scorer can be shared.
///
/// # Examples
///
/// ```rust
/// use carer_core::{CarerRecord, ScoreOutcome, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _carer: &CarerRecord) -> ScoreOutcome {
///         ScoreOutcome::Scored(1.0)
///     }
/// }
///
/// let carer = CarerRecord::new().with_field("id", "1");
/// assert_eq!(UnitScorer.score(&carer).value(), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the outcome of scoring `carer`.
    fn score(&self, carer: &CarerRecord) -> ScoreOutcome;
}

/// Result of scoring a single carer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    /// Every consumed field parsed and the score was computed.
    Scored(f64),
    /// A consumed field was unusable; the carer degrades to a zero score.
    Failed(FieldError),
}

impl ScoreOutcome {
    /// Numeric score used for ranking. Failures score exactly `0`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Scored(value) => *value,
            Self::Failed(_) => 0.0,
        }
    }

    /// Return the field failure, if scoring degraded.
    #[must_use]
    pub const fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Scored(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Split the outcome into its score and optional failure.
    #[must_use]
    pub fn into_parts(self) -> (f64, Option<FieldError>) {
        let value = self.value();
        match self {
            Self::Scored(_) => (value, None),
            Self::Failed(err) => (value, Some(err)),
        }
    }
}

impl From<Result<f64, FieldError>> for ScoreOutcome {
    fn from(result: Result<f64, FieldError>) -> Self {
        match result {
            Ok(value) => Self::Scored(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// A consumed column could not be read as a number.
///
/// The display form is the diagnostic line reported for the carer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error in {field} data for id {id}: {cause}")]
pub struct FieldError {
    /// Column that failed to parse.
    pub field: Field,
    /// Identifier of the affected carer (empty when the record has none).
    pub id: String,
    /// Why the column was rejected.
    #[source]
    pub cause: FieldErrorCause,
}

impl FieldError {
    /// Build a field error for the carer identified by `id`.
    #[must_use]
    pub fn new(field: Field, id: impl Into<String>, cause: FieldErrorCause) -> Self {
        Self {
            field,
            id: id.into(),
            cause,
        }
    }
}

/// Reasons a column value is unusable for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorCause {
    /// The column is absent from the record.
    #[error("value is missing")]
    Missing,
    /// The column is present but blank.
    #[error("value is empty")]
    Empty,
    /// The column could not be parsed as a number.
    #[error("could not convert {value:?} to a number")]
    Invalid {
        /// Raw value found in the record.
        value: String,
        /// Source error from the float parser.
        #[source]
        source: ParseFloatError,
    },
    /// The column parsed to infinity or NaN.
    #[error("{value:?} is not a finite number")]
    NonFinite {
        /// Raw value found in the record.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn failed_outcome_scores_zero() {
        let outcome = ScoreOutcome::Failed(FieldError::new(
            Field::ImgProblems,
            "9",
            FieldErrorCause::Empty,
        ));
        assert_eq!(outcome.value().to_bits(), 0.0_f64.to_bits());
        assert!(outcome.error().is_some());
    }

    #[rstest]
    fn diagnostic_names_field_and_id() {
        let err = FieldError::new(Field::AvgReview, "abc-1", FieldErrorCause::Empty);
        assert_eq!(
            err.to_string(),
            "error in avg_review data for id abc-1: value is empty"
        );
    }

    #[rstest]
    fn invalid_cause_quotes_raw_value() {
        let source = "x1".parse::<f64>().expect_err("not a number");
        let cause = FieldErrorCause::Invalid {
            value: "x1".into(),
            source,
        };
        assert_eq!(cause.to_string(), "could not convert \"x1\" to a number");
    }

    #[rstest]
    fn scored_outcome_splits_into_value() {
        let (value, err) = ScoreOutcome::Scored(2.5).into_parts();
        assert!((value - 2.5).abs() < f64::EPSILON);
        assert!(err.is_none());
    }
}
