//! Column names understood by the carer model.
//!
//! The enum offers compile-time safety for record lookups and fixes the
//! column order used when exporting a ranking.
//!
//! # Examples
//! ```
//! use carer_core::Field;
//!
//! assert_eq!(Field::AvgReview.as_str(), "avg_review");
//! assert_eq!(Field::YearsExperience.to_string(), "years_experience");
//! ```

/// Name of the derived column appended by ranking.
pub const SCORE_COLUMN: &str = "score";

/// A known carer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Unique carer identifier.
    Id,
    /// Display first name.
    FirstName,
    /// Display last name.
    LastName,
    /// Number of reviews received.
    NumReviews,
    /// Mean review rating out of five.
    AvgReview,
    /// Number of detected profile image defects (0-8).
    ImgProblems,
    /// Skill tier, see [`CarerType`](crate::CarerType).
    Type,
    /// Number of clients served through the platform.
    NumPreviousClients,
    /// Days since the carer last logged in.
    DaysSinceLogin,
    /// Age in years.
    Age,
    /// Years of experience in the field.
    YearsExperience,
}

impl Field {
    /// Every known column in export order, excluding [`SCORE_COLUMN`].
    pub const EXPORT_ORDER: [Self; 11] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::NumReviews,
        Self::AvgReview,
        Self::ImgProblems,
        Self::Type,
        Self::NumPreviousClients,
        Self::DaysSinceLogin,
        Self::Age,
        Self::YearsExperience,
    ];

    /// Return the column name as it appears in delimited files.
    ///
    /// # Examples
    /// ```
    /// use carer_core::Field;
    ///
    /// assert_eq!(Field::DaysSinceLogin.as_str(), "days_since_login");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::NumReviews => "num_reviews",
            Self::AvgReview => "avg_review",
            Self::ImgProblems => "img_problems",
            Self::Type => "type",
            Self::NumPreviousClients => "num_previous_clients",
            Self::DaysSinceLogin => "days_since_login",
            Self::Age => "age",
            Self::YearsExperience => "years_experience",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
