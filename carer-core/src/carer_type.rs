//! Carer skill tiers.
//!
//! Tiers are ordered by skill breadth: `basic < advanced < expert`.
//!
//! # Examples
//! ```
//! use carer_core::CarerType;
//!
//! assert!(CarerType::Basic < CarerType::Expert);
//! assert_eq!("advanced".parse::<CarerType>(), Ok(CarerType::Advanced));
//! ```

use thiserror::Error;

/// Skill tier of a carer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarerType {
    /// Entry-level carer.
    Basic,
    /// Carer with more skills than a basic carer.
    Advanced,
    /// Carer with the broadest skill set.
    Expert,
}

/// Returned when a `type` column holds an unrecognised tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown carer type '{0}'")]
pub struct UnknownCarerType(pub String);

impl CarerType {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for CarerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CarerType {
    type Err = UnknownCarerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(UnknownCarerType(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("basic", CarerType::Basic)]
    #[case("Advanced", CarerType::Advanced)]
    #[case(" expert ", CarerType::Expert)]
    fn parses_known_tiers(#[case] raw: &str, #[case] expected: CarerType) {
        assert_eq!(raw.parse::<CarerType>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_tier() {
        let err = "guru".parse::<CarerType>().expect_err("unknown tier");
        assert_eq!(err.to_string(), "unknown carer type 'guru'");
    }

    #[rstest]
    fn tiers_are_ordered_by_skill() {
        let mut tiers = vec![CarerType::Expert, CarerType::Basic, CarerType::Advanced];
        tiers.sort();
        assert_eq!(
            tiers,
            [CarerType::Basic, CarerType::Advanced, CarerType::Expert]
        );
    }
}
