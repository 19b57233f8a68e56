use crate::entities::{advisor, high_risk_student, student};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct StudentService;

impl StudentService {
    pub async fn find_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find_by_id(student_id).one(db).await
    }

    pub async fn find_advisor(
        db: &DatabaseConnection,
        advisor_id: &str,
    ) -> Result<Option<advisor::Model>, DbErr> {
        advisor::Entity::find_by_id(advisor_id.to_owned())
            .one(db)
            .await
    }

    /// All students assigned to an advisor, by last name
    pub async fn find_advisees(
        db: &DatabaseConnection,
        advisor_id: &str,
    ) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .filter(student::Column::AdvisorId.eq(advisor_id))
            .order_by_asc(student::Column::LastName)
            .order_by_asc(student::Column::FirstName)
            .all(db)
            .await
    }

    /// Students listed under an advisor in the high-risk relation, joined to
    /// their current student row. Rows whose student no longer exists, or
    /// has since moved to another advisor, are skipped.
    pub async fn find_high_risk_by_advisor(
        db: &DatabaseConnection,
        advisor_id: &str,
    ) -> Result<Vec<student::Model>, DbErr> {
        let rows = high_risk_student::Entity::find()
            .filter(high_risk_student::Column::AdvisorId.eq(advisor_id))
            .filter(student::Column::AdvisorId.eq(advisor_id))
            .order_by_asc(high_risk_student::Column::CumulativeGpa)
            .find_also_related(student::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, student)| student)
            .collect())
    }

    pub async fn find_by_advisor_and_gpa_below(
        db: &DatabaseConnection,
        advisor_id: &str,
        threshold: f64,
    ) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .filter(student::Column::AdvisorId.eq(advisor_id))
            .filter(student::Column::CumulativeGpa.lt(threshold))
            .order_by_asc(student::Column::CumulativeGpa)
            .all(db)
            .await
    }
}
