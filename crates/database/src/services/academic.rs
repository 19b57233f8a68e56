use crate::entities::{absence, course, enrollment, gpa_history};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Reads the per-student academic relations
pub struct AcademicService;

impl AcademicService {
    pub async fn find_course(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(course_id.to_owned())
            .one(db)
            .await
    }

    /// A student's enrollments in a stable order: semester label, then course
    pub async fn find_enrollments(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(enrollment::Column::Semester)
            .order_by_asc(enrollment::Column::CourseId)
            .all(db)
            .await
    }

    pub async fn find_absences(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<absence::Model>, DbErr> {
        absence::Entity::find()
            .filter(absence::Column::StudentId.eq(student_id))
            .all(db)
            .await
    }

    pub async fn find_gpa_history(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<gpa_history::Model>, DbErr> {
        gpa_history::Entity::find()
            .filter(gpa_history::Column::StudentId.eq(student_id))
            .all(db)
            .await
    }
}
