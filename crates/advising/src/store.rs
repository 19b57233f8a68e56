use crate::error::StoreResult;
use async_trait::async_trait;
use models::{
    course::Course,
    enrollment::{Absence, Enrollment},
    gpa::GpaRecord,
    ids::{AdvisorId, CourseId, StudentId},
    rating::{CourseRating, RatingUpsert, RatingValue},
    student::{Advisor, Student},
};
use std::collections::HashSet;

/// Read access to the academic records, plus the single rating write.
///
/// Lookups by key return `Ok(None)` when the row does not exist; `Err` is
/// reserved for the store itself failing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_student(&self, id: &StudentId) -> StoreResult<Option<Student>>;

    async fn find_course(&self, id: &CourseId) -> StoreResult<Option<Course>>;

    /// All enrollments of a student, in storage order
    async fn find_enrollments(&self, student_id: &StudentId) -> StoreResult<Vec<Enrollment>>;

    async fn find_absences(&self, student_id: &StudentId) -> StoreResult<Vec<Absence>>;

    async fn find_gpa_history(&self, student_id: &StudentId) -> StoreResult<Vec<GpaRecord>>;

    /// Every rating, by any student, of any course in `course_ids`
    async fn find_ratings(&self, course_ids: &HashSet<CourseId>) -> StoreResult<Vec<CourseRating>>;

    /// Inserts or overwrites the rating for (`student_id`, `course_id`).
    /// Absent `feedback` keeps whatever feedback is already stored.
    async fn upsert_rating(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
        rating: RatingValue,
        feedback: Option<String>,
    ) -> StoreResult<RatingUpsert>;

    async fn find_advisor(&self, id: &AdvisorId) -> StoreResult<Option<Advisor>>;

    async fn find_advisees(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>>;

    /// Advisees listed in the dedicated high-risk relation
    async fn find_high_risk_by_advisor(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>>;

    async fn find_by_advisor_and_gpa_below(
        &self,
        advisor_id: &AdvisorId,
        threshold: f64,
    ) -> StoreResult<Vec<Student>>;
}
