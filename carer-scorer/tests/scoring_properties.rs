//! Property-based tests for the carer scorer.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical records always score identically.
//! - **Idempotence:** re-scoring a record carrying its own score column
//!   yields the same score.
//! - **Image monotonicity:** more image problems never raise the score.
//! - **Recency monotonicity:** more days since login never raise the score.
//! - **Experience monotonicity:** more experience never lowers a
//!   non-negative score.
//! - **Degrade-to-zero:** a garbage value in any consumed column scores `0`.

use carer_core::{CarerRecord, Field, SCORE_COLUMN, ScoreOutcome, Scorer};
use carer_scorer::CarerScorer;
use proptest::prelude::*;

fn carer(avg: f64, images: u8, days: u16, years: u8) -> CarerRecord {
    CarerRecord::new()
        .with_field("id", "prop")
        .with_field("avg_review", avg.to_string())
        .with_field("img_problems", images.to_string())
        .with_field("days_since_login", days.to_string())
        .with_field("years_experience", years.to_string())
}

fn score(record: &CarerRecord) -> f64 {
    CarerScorer::default().score(record).value()
}

/// Review means within the documented `0.01..=4.99` range.
fn avg_review() -> impl Strategy<Value = f64> {
    (1_u16..=499_u16).prop_map(|hundredths| f64::from(hundredths) / 100.0)
}

fn consumed_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::AvgReview),
        Just(Field::ImgProblems),
        Just(Field::DaysSinceLogin),
        Just(Field::YearsExperience),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scoring_is_deterministic(
        avg in avg_review(),
        images in 0_u8..=8,
        days in 0_u16..400,
        years in 0_u8..50,
    ) {
        let record = carer(avg, images, days, years);
        prop_assert_eq!(score(&record).to_bits(), score(&record.clone()).to_bits());
    }

    #[test]
    fn rescoring_ignores_attached_score(
        avg in avg_review(),
        images in 0_u8..=8,
        days in 0_u16..400,
        years in 0_u8..50,
    ) {
        let record = carer(avg, images, days, years);
        let first = score(&record);
        let annotated = record.with_field(SCORE_COLUMN, first.to_string());
        prop_assert_eq!(score(&annotated).to_bits(), first.to_bits());
    }

    #[test]
    fn more_image_problems_never_help(
        avg in avg_review(),
        images in 0_u8..8,
        days in 0_u16..98,
        years in 0_u8..50,
    ) {
        let fewer = score(&carer(avg, images, days, years));
        let more = score(&carer(avg, images + 1, days, years));
        prop_assert!(more <= fewer, "{more} > {fewer}");
    }

    #[test]
    fn longer_absence_never_helps(
        avg in avg_review(),
        images in 0_u8..=8,
        days in 0_u16..400,
        years in 0_u8..50,
    ) {
        let recent = score(&carer(avg, images, days, years));
        let absent = score(&carer(avg, images, days + 1, years));
        prop_assert!(absent <= recent, "{absent} > {recent}");
    }

    #[test]
    fn more_experience_never_hurts(
        avg in avg_review(),
        images in 0_u8..=8,
        days in 0_u16..98,
        years in 0_u8..50,
    ) {
        let junior = score(&carer(avg, images, days, years));
        let senior = score(&carer(avg, images, days, years + 1));
        prop_assert!(senior >= junior, "{senior} < {junior}");
    }

    #[test]
    fn garbage_in_any_consumed_column_scores_zero(
        avg in avg_review(),
        images in 0_u8..=8,
        days in 0_u16..400,
        years in 0_u8..50,
        field in consumed_field(),
        garbage in prop_oneof![Just(""), Just("   "), Just("n/a"), Just("4,5")],
    ) {
        let record = carer(avg, images, days, years).with_field(field.as_str(), garbage);
        match CarerScorer::default().score(&record) {
            ScoreOutcome::Failed(err) => {
                prop_assert_eq!(err.field, field);
            }
            ScoreOutcome::Scored(value) => {
                prop_assert!(false, "scored {value}");
            }
        }
        prop_assert_eq!(score(&record).to_bits(), 0.0_f64.to_bits());
    }
}
