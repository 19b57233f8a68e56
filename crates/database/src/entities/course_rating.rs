use models::{
    ids::{CourseId, StudentId},
    rating::{CourseRating, RatingValue},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's rating of a course. (student_id, course_id) carries a unique
/// index so a pair can only ever have one row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub course_id: String,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for CourseRating {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let rating = RatingValue::try_from(i64::from(model.rating))
            .map_err(|e| DbErr::Type(format!("course_ratings row {}: {e}", model.id)))?;

        Ok(CourseRating {
            student_id: StudentId::from(model.student_id),
            course_id: CourseId::from(model.course_id),
            rating,
            feedback: model.feedback,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
