use std::collections::BTreeMap;

use crate::{CarerType, Field, FieldError, FieldErrorCause};

/// A carer as read from an input file.
///
/// Values are kept as raw strings exactly as ingested. Columns outside
/// [`Field`] are retained but ignored by scoring and export.
///
/// # Examples
/// ```
/// use carer_core::{CarerRecord, Field};
///
/// let carer = CarerRecord::new()
///     .with_field("id", "42")
///     .with_field("avg_review", "4.5");
///
/// assert_eq!(carer.id(), Some("42"));
/// assert_eq!(carer.field(Field::AvgReview), Some("4.5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarerRecord {
    fields: BTreeMap<String, String>,
}

impl CarerRecord {
    /// Construct a record without any fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a column while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Return the raw value of any column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Return the raw value of a known column.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Return the carer identifier, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.field(Field::Id)
    }

    /// Parse the `type` column, if present.
    ///
    /// Returns `None` when the column is absent.
    ///
    /// # Examples
    /// ```
    /// use carer_core::{CarerRecord, CarerType};
    ///
    /// let carer = CarerRecord::new().with_field("type", "expert");
    /// assert_eq!(carer.carer_type(), Some(Ok(CarerType::Expert)));
    /// ```
    #[must_use]
    pub fn carer_type(&self) -> Option<Result<CarerType, crate::UnknownCarerType>> {
        self.field(Field::Type).map(str::parse)
    }

    /// Iterate over every column in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Parse a column as a finite number.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`FieldError`] naming the column and this record's id when the
    /// column is missing, empty, unparseable, or not finite.
    ///
    /// # Examples
    /// ```
    /// use carer_core::{CarerRecord, Field, FieldErrorCause};
    ///
    /// let carer = CarerRecord::new()
    ///     .with_field("id", "7")
    ///     .with_field("img_problems", " 3 ");
    /// assert_eq!(carer.parse_number(Field::ImgProblems), Ok(3.0));
    ///
    /// let err = carer.parse_number(Field::AvgReview).unwrap_err();
    /// assert_eq!(err.cause, FieldErrorCause::Missing);
    /// ```
    pub fn parse_number(&self, field: Field) -> Result<f64, FieldError> {
        self.read_number(field)
            .map_err(|cause| FieldError::new(field, self.id().unwrap_or_default(), cause))
    }

    fn read_number(&self, field: Field) -> Result<f64, FieldErrorCause> {
        let raw = self.field(field).ok_or(FieldErrorCause::Missing)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldErrorCause::Empty);
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|source| FieldErrorCause::Invalid {
                value: raw.to_owned(),
                source,
            })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FieldErrorCause::NonFinite {
                value: raw.to_owned(),
            })
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CarerRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for CarerRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn carer_with(value: &str) -> CarerRecord {
        CarerRecord::new()
            .with_field("id", "c-1")
            .with_field("avg_review", value)
    }

    #[rstest]
    #[case("4.5", 4.5)]
    #[case(" 2 ", 2.0)]
    #[case("-1", -1.0)]
    #[case("1e1", 10.0)]
    fn parses_numeric_values(#[case] raw: &str, #[case] expected: f64) {
        let value = carer_with(raw)
            .parse_number(Field::AvgReview)
            .expect("numeric value");
        assert!((value - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("", FieldErrorCause::Empty)]
    #[case("   ", FieldErrorCause::Empty)]
    #[case("inf", FieldErrorCause::NonFinite { value: "inf".into() })]
    #[case("NaN", FieldErrorCause::NonFinite { value: "NaN".into() })]
    fn rejects_blank_and_non_finite(#[case] raw: &str, #[case] expected: FieldErrorCause) {
        let err = carer_with(raw)
            .parse_number(Field::AvgReview)
            .expect_err("value should be rejected");
        assert_eq!(err.field, Field::AvgReview);
        assert_eq!(err.id, "c-1");
        assert_eq!(err.cause, expected);
    }

    #[rstest]
    fn rejects_text() {
        let err = carer_with("great")
            .parse_number(Field::AvgReview)
            .expect_err("text should be rejected");
        assert!(matches!(err.cause, FieldErrorCause::Invalid { ref value, .. } if value == "great"));
    }

    #[rstest]
    fn missing_id_reports_empty_identifier() {
        let carer = CarerRecord::new().with_field("avg_review", "x");
        let err = carer
            .parse_number(Field::AvgReview)
            .expect_err("text should be rejected");
        assert_eq!(err.id, "");
    }

    #[rstest]
    fn keeps_unknown_columns() {
        let carer: CarerRecord = [("id", "1"), ("favourite_colour", "teal")]
            .into_iter()
            .collect();
        assert_eq!(carer.get("favourite_colour"), Some("teal"));
        assert_eq!(carer.iter().count(), 2);
    }

    #[rstest]
    fn missing_type_is_none() {
        assert!(CarerRecord::new().carer_type().is_none());
    }
}
