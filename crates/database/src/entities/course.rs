use models::{course::Course, ids::CourseId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog entry. The absence limit is derived from `credit_hours` on read
/// and has no column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub credit_hours: i32,
    pub difficulty_rating: Option<f64>,
    pub prerequisite_id: Option<String>,
    pub department_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::course_rating::Entity")]
    Ratings,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::course_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        let credit_hours =
            super::stored_count(model.credit_hours, "credit_hours", format_args!("course {}", model.id));

        Course {
            id: CourseId::from(model.id),
            name: model.name,
            description: model.description,
            credit_hours,
            prerequisite: model.prerequisite_id.map(CourseId::from),
            department_id: model.department_id,
            difficulty_rating: model.difficulty_rating,
        }
    }
}
