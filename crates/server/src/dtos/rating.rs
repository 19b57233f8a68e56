use advising::ratings::{RatingSubmission, RatingSummary};
use chrono::NaiveDateTime;
use models::rating::CourseRating;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RatingRequest {
    /// Whole stars, 1 to 5
    pub rating: Option<i64>,
    /// Optional comment; omitting it keeps any earlier comment
    pub feedback: Option<String>,
}

impl From<RatingRequest> for RatingSubmission {
    fn from(request: RatingRequest) -> Self {
        Self {
            rating: request.rating,
            feedback: request.feedback,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub student_id: String,
    pub course_id: String,
    pub rating: u8,
    pub feedback: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CourseRating> for RatingResponse {
    fn from(rating: CourseRating) -> Self {
        Self {
            student_id: rating.student_id.into(),
            course_id: rating.course_id.into(),
            rating: rating.rating.get(),
            feedback: rating.feedback,
            created_at: rating.created_at,
            updated_at: rating.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingSummaryResponse {
    pub course_id: String,
    /// Rounded to one decimal, absent when nobody has rated the course
    pub average: Option<f64>,
    pub count: u32,
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            course_id: summary.course_id.into(),
            average: summary.average,
            count: summary.count,
        }
    }
}
