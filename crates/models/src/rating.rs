use crate::ids::{CourseId, StudentId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A star rating between 1 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingOutOfRange(pub i64);

impl Display for RatingOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "rating must be between {} and {}, got {}",
            RatingValue::MIN,
            RatingValue::MAX,
            self.0
        )
    }
}

impl std::error::Error for RatingOutOfRange {}

impl TryFrom<i64> for RatingValue {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

impl Display for RatingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A student's rating of a course, at most one per student and course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRating {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub rating: RatingValue,
    pub feedback: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Result of writing a rating for a (student, course) pair
#[derive(Debug, Clone, PartialEq)]
pub enum RatingUpsert {
    Created(CourseRating),
    Updated(CourseRating),
}

impl RatingUpsert {
    pub fn into_rating(self) -> CourseRating {
        match self {
            Self::Created(rating) | Self::Updated(rating) => rating,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(RatingValue::try_from(0_i64).is_err());
        assert_eq!(RatingValue::try_from(1_i64).unwrap().get(), 1);
        assert_eq!(RatingValue::try_from(5_i64).unwrap().get(), 5);
        assert!(RatingValue::try_from(6_i64).is_err());
        assert!(RatingValue::try_from(-3_i64).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = RatingValue::try_from(9_i64).unwrap_err();
        assert_eq!(err.to_string(), "rating must be between 1 and 5, got 9");
    }
}
