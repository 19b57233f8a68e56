use models::{
    enrollment::Absence,
    ids::{CourseId, StudentId},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Absences for one offering; (course_id, semester) names the same offering
/// as the matching enrollment
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "absences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String,
    pub absences: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Absence {
    fn from(model: Model) -> Self {
        let count = super::stored_count(
            model.absences,
            "absences",
            format_args!(
                "student {} {} {}",
                model.student_id, model.course_id, model.semester
            ),
        );

        Absence {
            student_id: StudentId::from(model.student_id),
            course_id: CourseId::from(model.course_id),
            semester: model.semester,
            count,
        }
    }
}
