use models::{
    ids::{AdvisorId, StudentId},
    student::Student,
};
use log::warn;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub advisor_id: Option<String>,
    pub major_id: String,
    pub department_id: String,
    pub current_gpa: Option<f64>,
    pub cumulative_gpa: Option<f64>,
    pub completed_hours: Option<i32>,
    pub enrollment_year: i32,
    pub attendance_rate: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::advisor::Entity",
        from = "Column::AdvisorId",
        to = "super::advisor::Column::Id"
    )]
    Advisor,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::advisor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advisor.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: StudentId::from(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            advisor_id: model.advisor_id.map(AdvisorId::from),
            major_id: model.major_id,
            department_id: model.department_id,
            current_gpa: model.current_gpa,
            cumulative_gpa: model.cumulative_gpa,
            // A negative count is treated like a missing one
            completed_hours: model.completed_hours.and_then(|hours| {
                u32::try_from(hours)
                    .inspect_err(|_| {
                        warn!("Negative completed_hours ({hours}) on student {}", model.id)
                    })
                    .ok()
            }),
            enrollment_year: model.enrollment_year,
            attendance: model.attendance_rate,
        }
    }
}
