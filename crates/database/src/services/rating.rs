use crate::entities::course_rating;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, TransactionTrait, sea_query::OnConflict,
};

pub struct RatingService;

impl RatingService {
    /// Every rating of the given courses, fetched in a single query
    pub async fn find_ratings(
        db: &DatabaseConnection,
        course_ids: Vec<String>,
    ) -> Result<Vec<course_rating::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(vec![]);
        }

        course_rating::Entity::find()
            .filter(course_rating::Column::CourseId.is_in(course_ids))
            .all(db)
            .await
    }

    /// Writes a student's rating of a course, overwriting any earlier one.
    ///
    /// Returns the stored row and whether it was newly created. `feedback`
    /// of `None` keeps the stored feedback. The insert carries an ON CONFLICT
    /// update on the (student_id, course_id) unique index, so a concurrent
    /// insert of the same pair turns into an update instead of a second row.
    pub async fn upsert_rating(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: &str,
        rating: i32,
        feedback: Option<String>,
    ) -> Result<(course_rating::Model, bool), DbErr> {
        let txn = db.begin().await?;
        let now = Utc::now().naive_utc();

        let result = match Self::find_rating(&txn, student_id, course_id).await? {
            Some(existing) => {
                let mut active: course_rating::ActiveModel = existing.into();
                active.rating = Set(rating);
                if let Some(feedback) = feedback {
                    active.feedback = Set(Some(feedback));
                }
                active.updated_at = Set(now);

                (active.update(&txn).await?, false)
            }
            None => {
                let mut update_columns = vec![
                    course_rating::Column::Rating,
                    course_rating::Column::UpdatedAt,
                ];
                if feedback.is_some() {
                    update_columns.push(course_rating::Column::Feedback);
                }

                let new_rating = course_rating::ActiveModel {
                    id: NotSet,
                    student_id: Set(student_id),
                    course_id: Set(course_id.to_owned()),
                    rating: Set(rating),
                    feedback: Set(feedback),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                course_rating::Entity::insert(new_rating)
                    .on_conflict(
                        OnConflict::columns([
                            course_rating::Column::StudentId,
                            course_rating::Column::CourseId,
                        ])
                        .update_columns(update_columns)
                        .to_owned(),
                    )
                    .exec(&txn)
                    .await?;

                let stored = Self::find_rating(&txn, student_id, course_id)
                    .await?
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "rating of {course_id} by {student_id} after insert"
                        ))
                    })?;

                (stored, true)
            }
        };

        txn.commit().await?;
        debug!(
            "Stored rating {} of {course_id} by {student_id} (created: {})",
            result.0.rating, result.1
        );
        Ok(result)
    }

    async fn find_rating(
        txn: &DatabaseTransaction,
        student_id: i32,
        course_id: &str,
    ) -> Result<Option<course_rating::Model>, DbErr> {
        course_rating::Entity::find()
            .filter(course_rating::Column::StudentId.eq(student_id))
            .filter(course_rating::Column::CourseId.eq(course_id))
            .one(txn)
            .await
    }
}
