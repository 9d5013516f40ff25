//! Public configuration and output types for carer scoring.
#![forbid(unsafe_code)]

/// Per-unit rates applied by each adjustment step.
///
/// Every rate is charged once for the base unit plus once per counted unit,
/// so a carer with zero image problems still pays one `image_penalty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Fraction removed per image problem (and once as a baseline).
    pub image_penalty: f64,
    /// Fraction removed per day since the last login (and once as a baseline).
    pub recency_penalty: f64,
    /// Fraction added per year of experience (and once as a baseline).
    pub experience_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            image_penalty: 0.05_f64,
            recency_penalty: 0.01_f64,
            experience_bonus: 0.02_f64,
        }
    }
}

/// Running value after each scoring step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Parsed `avg_review`.
    pub baseline: f64,
    /// Value after the image-quality penalty.
    pub after_images: f64,
    /// Value after the login recency penalty.
    pub after_recency: f64,
    /// Value after the experience bonus.
    pub after_experience: f64,
    /// Final truncated score.
    pub score: f64,
}
