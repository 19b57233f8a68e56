use models::{
    enrollment::{Enrollment, EnrollmentStatus, Grade},
    ids::{CourseId, StudentId},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per student, course and semester
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String,
    #[sea_orm(column_type = "Text")]
    pub status: EnrollmentStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub grade: Option<Grade>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment {
            student_id: StudentId::from(model.student_id),
            course_id: CourseId::from(model.course_id),
            semester: model.semester,
            status: model.status,
            grade: model.grade,
        }
    }
}
