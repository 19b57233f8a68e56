use crate::services::{academic::AcademicService, rating::RatingService, student::StudentService};
use advising::{RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use models::{
    course::Course,
    enrollment::{Absence, Enrollment},
    gpa::GpaRecord,
    ids::{AdvisorId, CourseId, StudentId},
    rating::{CourseRating, RatingUpsert, RatingValue},
    student::{Advisor, Student},
};
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashSet;

/// [`RecordStore`] backed by the relational schema
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn backend(err: DbErr) -> StoreError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            StoreError::Unavailable(format!("database ({err})"))
        }
        other => StoreError::backend(other),
    }
}

fn convert_all<M, T: From<M>>(rows: Vec<M>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

#[async_trait]
impl RecordStore for SeaOrmStore {
    async fn find_student(&self, id: &StudentId) -> StoreResult<Option<Student>> {
        // Student ids are integers in storage; anything else cannot match
        let Some(key) = id.as_key() else {
            return Ok(None);
        };
        let student = StudentService::find_student(&self.db, key)
            .await
            .map_err(backend)?;
        Ok(student.map(Student::from))
    }

    async fn find_course(&self, id: &CourseId) -> StoreResult<Option<Course>> {
        let course = AcademicService::find_course(&self.db, id.as_str())
            .await
            .map_err(backend)?;
        Ok(course.map(Course::from))
    }

    async fn find_enrollments(&self, student_id: &StudentId) -> StoreResult<Vec<Enrollment>> {
        let Some(key) = student_id.as_key() else {
            return Ok(vec![]);
        };
        AcademicService::find_enrollments(&self.db, key)
            .await
            .map(convert_all)
            .map_err(backend)
    }

    async fn find_absences(&self, student_id: &StudentId) -> StoreResult<Vec<Absence>> {
        let Some(key) = student_id.as_key() else {
            return Ok(vec![]);
        };
        AcademicService::find_absences(&self.db, key)
            .await
            .map(convert_all)
            .map_err(backend)
    }

    async fn find_gpa_history(&self, student_id: &StudentId) -> StoreResult<Vec<GpaRecord>> {
        let Some(key) = student_id.as_key() else {
            return Ok(vec![]);
        };
        AcademicService::find_gpa_history(&self.db, key)
            .await
            .map(convert_all)
            .map_err(backend)
    }

    async fn find_ratings(&self, course_ids: &HashSet<CourseId>) -> StoreResult<Vec<CourseRating>> {
        let ids = course_ids.iter().map(|id| id.as_str().to_owned()).collect();
        let rows = RatingService::find_ratings(&self.db, ids)
            .await
            .map_err(backend)?;

        rows.into_iter()
            .map(|row| CourseRating::try_from(row).map_err(backend))
            .collect()
    }

    async fn upsert_rating(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
        rating: RatingValue,
        feedback: Option<String>,
    ) -> StoreResult<RatingUpsert> {
        let key = student_id
            .as_key()
            .ok_or_else(|| StoreError::backend(format!("student id {student_id} is not numeric")))?;

        let (row, created) = RatingService::upsert_rating(
            &self.db,
            key,
            course_id.as_str(),
            i32::from(rating.get()),
            feedback,
        )
        .await
        .map_err(backend)?;

        let stored = CourseRating::try_from(row).map_err(backend)?;
        Ok(if created {
            RatingUpsert::Created(stored)
        } else {
            RatingUpsert::Updated(stored)
        })
    }

    async fn find_advisor(&self, id: &AdvisorId) -> StoreResult<Option<Advisor>> {
        let advisor = StudentService::find_advisor(&self.db, id.as_str())
            .await
            .map_err(backend)?;
        Ok(advisor.map(Advisor::from))
    }

    async fn find_advisees(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>> {
        StudentService::find_advisees(&self.db, advisor_id.as_str())
            .await
            .map(convert_all)
            .map_err(backend)
    }

    async fn find_high_risk_by_advisor(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>> {
        StudentService::find_high_risk_by_advisor(&self.db, advisor_id.as_str())
            .await
            .map(convert_all)
            .map_err(backend)
    }

    async fn find_by_advisor_and_gpa_below(
        &self,
        advisor_id: &AdvisorId,
        threshold: f64,
    ) -> StoreResult<Vec<Student>> {
        StudentService::find_by_advisor_and_gpa_below(&self.db, advisor_id.as_str(), threshold)
            .await
            .map(convert_all)
            .map_err(backend)
    }
}
