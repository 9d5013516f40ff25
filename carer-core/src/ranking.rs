//! Order a batch of carers by score.

use log::warn;

use crate::{CarerRecord, FieldError, Scorer};

/// A carer paired with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCarer {
    /// The record exactly as ingested.
    pub record: CarerRecord,
    /// Score attached by ranking.
    pub score: f64,
}

/// Outcome of ranking a batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    /// Carers ordered by descending score; ties keep ingestion order.
    pub carers: Vec<ScoredCarer>,
    /// One entry per carer whose score degraded to zero, in ingestion order.
    pub diagnostics: Vec<FieldError>,
}

impl Ranking {
    /// Number of ranked carers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carers.len()
    }

    /// Report whether the ranking holds no carers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carers.is_empty()
    }
}

/// Score every carer and sort the batch by descending score.
///
/// Carers are scored in ingestion order. Each degraded carer is logged at
/// `warn` level and recorded in [`Ranking::diagnostics`]. The sort is stable,
/// so carers with equal scores (including every zero-scored failure) keep
/// their relative input order.
///
/// # Examples
/// ```
/// use carer_core::{CarerRecord, ScoreOutcome, Scorer, rank};
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _carer: &CarerRecord) -> ScoreOutcome {
///         ScoreOutcome::Scored(1.0)
///     }
/// }
///
/// let carers = vec![
///     CarerRecord::new().with_field("id", "a"),
///     CarerRecord::new().with_field("id", "b"),
/// ];
/// let ranking = rank(carers, &Flat);
/// let ids: Vec<_> = ranking.carers.iter().map(|c| c.record.id()).collect();
/// assert_eq!(ids, [Some("a"), Some("b")]);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "negative zero is folded into positive zero before sorting"
)]
pub fn rank<S>(records: Vec<CarerRecord>, scorer: &S) -> Ranking
where
    S: Scorer + ?Sized,
{
    let mut carers = Vec::with_capacity(records.len());
    let mut diagnostics = Vec::new();
    for record in records {
        let (score, failure) = scorer.score(&record).into_parts();
        if let Some(err) = failure {
            warn!("{err}");
            diagnostics.push(err);
        }
        // Adding positive zero folds `-0.0` into `0.0` so both tie.
        carers.push(ScoredCarer {
            record,
            score: score + 0.0,
        });
    }
    // `sort_by` is stable; reversing the comparison keeps ties in input order.
    carers.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ranking {
        carers,
        diagnostics,
    }
}
