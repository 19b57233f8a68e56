use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Failure reported by a [`crate::RecordStore`]
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("{0} is unavailable")]
    Unavailable(String),
}

impl StoreError {
    pub fn backend(message: impl Display) -> Self {
        Self::Backend(message.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A part of the profile that is fetched independently and may degrade to
/// an empty default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Enrollments,
    Courses,
    Absences,
    GpaHistory,
    Ratings,
    Advisees,
    HighRisk,
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Enrollments => "enrollments",
            Self::Courses => "courses",
            Self::Absences => "absences",
            Self::GpaHistory => "gpa history",
            Self::Ratings => "ratings",
            Self::Advisees => "advisees",
            Self::HighRisk => "high-risk students",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{0}")]
    Forbidden(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("failed to fetch {section}: {source}")]
    PartialFetch {
        section: Section,
        #[source]
        source: StoreError,
    },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ProfileError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Unwraps a subordinate fetch, logging a failure and substituting the
/// default for that section. The section is pushed onto `degraded` on
/// failure.
pub(crate) fn or_degraded<T: Default>(
    result: StoreResult<T>,
    section: Section,
    degraded: &mut Vec<Section>,
) -> T {
    match result {
        Ok(value) => value,
        Err(source) => {
            let err = ProfileError::PartialFetch { section, source };
            log::warn!("{err}; continuing with an empty {section} section");
            if !degraded.contains(&section) {
                degraded.push(section);
            }
            T::default()
        }
    }
}
