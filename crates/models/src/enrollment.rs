use crate::ids::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Where an enrollment stands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
pub enum EnrollmentStatus {
    Current,
    Completed,
    /// Neither finished nor in progress, e.g. dropped or waiting for a retake
    Leftover,
}

/// Letter grade recorded on an enrollment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
pub enum Grade {
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    A,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[strum(serialize = "D+")]
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
    /// Withdrawn
    W,
    /// Deferred
    #[strum(serialize = "DN")]
    #[serde(rename = "DN")]
    Dn,
}

/// One row per student, course and semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub semester: String,
    pub status: EnrollmentStatus,
    pub grade: Option<Grade>,
}

/// Absence count for one course offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub semester: String,
    pub count: u32,
}

/// Implements the sea-orm value conversions for an enum stored as its
/// strum string form
#[cfg(feature = "database")]
macro_rules! string_column {
    ($ty:ty) => {
        impl sea_orm::sea_query::ValueType for $ty {
            fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                match v {
                    Value::String(Some(s)) => {
                        s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr)
                    }
                    _ => Err(sea_orm::sea_query::ValueTypeErr),
                }
            }

            fn type_name() -> String {
                stringify!($ty).to_string()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::Text
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::String(Some(Box::new(value.as_ref().to_owned())))
            }
        }

        impl sea_orm::TryGetable for $ty {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                index: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let val: String = res.try_get_by(index)?;

                val.parse().map_err(|e| {
                    sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                        "Failed to parse {}: {e}",
                        stringify!($ty)
                    )))
                })
            }
        }

        impl sea_orm::sea_query::Nullable for $ty {
            fn null() -> Value {
                Value::String(None)
            }
        }
    };
}

#[cfg(feature = "database")]
string_column!(EnrollmentStatus);
#[cfg(feature = "database")]
string_column!(Grade);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            EnrollmentStatus::from_str("Completed").unwrap(),
            EnrollmentStatus::Completed
        );
        assert_eq!(
            EnrollmentStatus::from_str("Leftover").unwrap(),
            EnrollmentStatus::Leftover
        );
        assert!(EnrollmentStatus::from_str("Dropped").is_err());
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::Dn.to_string(), "DN");
        assert_eq!(Grade::W.to_string(), "W");
    }

    #[test]
    fn test_grade_from_str() {
        assert_eq!(Grade::from_str("C+").unwrap(), Grade::CPlus);
        assert_eq!(Grade::from_str("F").unwrap(), Grade::F);
        assert!(Grade::from_str("E").is_err());
    }

    #[test]
    fn test_grade_count() {
        assert_eq!(Grade::iter().count(), 11);
    }

    #[test]
    fn test_grade_round_trip() {
        for grade in Grade::iter() {
            assert_eq!(Grade::from_str(grade.as_ref()).unwrap(), grade);
        }
    }
}
