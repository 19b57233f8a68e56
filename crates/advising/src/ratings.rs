//! Course rating aggregation and the rating submission flow.

use crate::{
    RecordStore, Viewer,
    error::{ProfileError, ProfileResult, Section, StoreError, or_degraded},
    merge::MergedEnrollment,
};
use log::{debug, info};
use models::{
    ids::{CourseId, StudentId},
    rating::{CourseRating, RatingUpsert, RatingValue},
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Running totals for one course
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingAggregate {
    pub total: u32,
    pub count: u32,
    /// The profile student's own rating of the course
    pub student_rating: Option<RatingValue>,
}

impl RatingAggregate {
    pub fn average(&self) -> Option<f64> {
        average(self.total, self.count)
    }
}

/// Mean rating rounded to one decimal place, or `None` without ratings
pub fn average(total: u32, count: u32) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let mean = f64::from(total) / f64::from(count);
    Some((mean * 10.0).round() / 10.0)
}

/// Folds ratings into per-course aggregates, picking out `student_id`'s own
pub fn aggregate_ratings(
    ratings: &[CourseRating],
    student_id: &StudentId,
) -> HashMap<CourseId, RatingAggregate> {
    let mut aggregates: HashMap<CourseId, RatingAggregate> = HashMap::new();

    for rating in ratings {
        let aggregate = aggregates.entry(rating.course_id.clone()).or_default();
        aggregate.total += u32::from(rating.rating.get());
        aggregate.count += 1;

        if rating.student_id == *student_id {
            aggregate.student_rating = Some(rating.rating);
        }
    }

    aggregates
}

pub fn completed_course_ids(completed: &[MergedEnrollment]) -> HashSet<CourseId> {
    completed.iter().map(|e| e.course_id.clone()).collect()
}

/// Sets `avg_rating` and `my_rating` on every enrollment whose course has
/// at least one rating; the rest are left untouched
pub fn annotate(completed: &mut [MergedEnrollment], aggregates: &HashMap<CourseId, RatingAggregate>) {
    for enrollment in completed {
        if let Some(aggregate) = aggregates.get(&enrollment.course_id) {
            enrollment.avg_rating = aggregate.average();
            enrollment.my_rating = aggregate.student_rating;
        }
    }
}

/// Fetches the ratings of all completed courses in one query and annotates
/// the completed enrollments with them
pub async fn annotate_completed(
    store: &dyn RecordStore,
    completed: &mut [MergedEnrollment],
    student_id: &StudentId,
    degraded: &mut Vec<Section>,
) {
    if completed.is_empty() {
        return;
    }

    let course_ids = completed_course_ids(completed);
    let ratings = or_degraded(
        store.find_ratings(&course_ids).await,
        Section::Ratings,
        degraded,
    );
    debug!(
        "Found {} ratings across {} completed courses",
        ratings.len(),
        course_ids.len()
    );

    annotate(completed, &aggregate_ratings(&ratings, student_id));
}

/// Body of a rating submission as it arrives from the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingSubmission {
    pub rating: Option<i64>,
    pub feedback: Option<String>,
}

/// Validates a submission and writes it as the viewer's rating of
/// `course_id`, replacing any earlier rating
pub async fn submit_rating(
    store: &dyn RecordStore,
    viewer: &Viewer,
    course_id: &CourseId,
    submission: RatingSubmission,
) -> ProfileResult<RatingUpsert> {
    let Viewer::Student(student_id) = viewer else {
        return Err(ProfileError::forbidden("only students can rate courses"));
    };

    let (rating, feedback) = validate_submission(course_id, submission)?;

    if store.find_student(student_id).await?.is_none() {
        return Err(ProfileError::not_found("student", student_id));
    }
    if store.find_course(course_id).await?.is_none() {
        return Err(ProfileError::not_found("course", course_id));
    }

    let outcome = store
        .upsert_rating(student_id, course_id, rating, feedback)
        .await?;

    info!(
        "Student {student_id} {} rating {rating} for {course_id}",
        if outcome.is_created() { "submitted" } else { "updated" }
    );

    Ok(outcome)
}

fn validate_submission(
    course_id: &CourseId,
    submission: RatingSubmission,
) -> ProfileResult<(RatingValue, Option<String>)> {
    if course_id.as_str().is_empty() {
        return Err(ProfileError::invalid("course id and rating are required"));
    }
    let Some(raw) = submission.rating else {
        return Err(ProfileError::invalid("course id and rating are required"));
    };
    let rating = RatingValue::try_from(raw).map_err(|e| ProfileError::invalid(e.to_string()))?;

    let feedback = submission
        .feedback
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty());

    Ok((rating, feedback))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub course_id: CourseId,
    pub average: Option<f64>,
    pub count: u32,
}

pub async fn course_rating_summary(
    store: &dyn RecordStore,
    course_id: &CourseId,
) -> ProfileResult<RatingSummary> {
    let ratings = store
        .find_ratings(&HashSet::from([course_id.clone()]))
        .await?;

    let total = ratings.iter().map(|r| u32::from(r.rating.get())).sum();
    let count = u32::try_from(ratings.len())
        .map_err(|_| StoreError::backend(format!("rating count for {course_id} exceeds u32")))?;

    Ok(RatingSummary {
        course_id: course_id.clone(),
        average: average(total, count),
        count,
    })
}

pub async fn student_course_rating(
    store: &dyn RecordStore,
    student_id: &StudentId,
    course_id: &CourseId,
) -> ProfileResult<Option<CourseRating>> {
    let ratings = store
        .find_ratings(&HashSet::from([course_id.clone()]))
        .await?;

    Ok(ratings
        .into_iter()
        .find(|rating| rating.student_id == *student_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn rating(student: i32, course: &str, value: i64) -> CourseRating {
        CourseRating {
            student_id: StudentId::from(student),
            course_id: CourseId::new(course),
            rating: RatingValue::try_from(value).unwrap(),
            feedback: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(average(8, 2), Some(4.0));
        assert_eq!(average(10, 3), Some(3.3));
        assert_eq!(average(11, 3), Some(3.7));
        assert_eq!(average(0, 0), None);
    }

    #[test]
    fn test_aggregate_average_and_own_rating() {
        let ratings = vec![rating(1, "c1", 5), rating(2, "c1", 3)];
        let c1 = CourseId::new("c1");

        let for_s1 = aggregate_ratings(&ratings, &StudentId::from(1));
        assert_eq!(for_s1[&c1].average(), Some(4.0));
        assert_eq!(for_s1[&c1].student_rating.map(RatingValue::get), Some(5));

        let for_s2 = aggregate_ratings(&ratings, &StudentId::from("2"));
        assert_eq!(for_s2[&c1].student_rating.map(RatingValue::get), Some(3));

        let for_s3 = aggregate_ratings(&ratings, &StudentId::from(3));
        assert_eq!(for_s3[&c1].student_rating, None);
        assert_eq!(for_s3[&c1].count, 2);
    }

    #[test]
    fn test_validate_submission() {
        let course = CourseId::new("CMPSC 131");
        let ok = RatingSubmission {
            rating: Some(4),
            feedback: Some("  heavy workload ".to_owned()),
        };
        let (value, feedback) = validate_submission(&course, ok).unwrap();
        assert_eq!(value.get(), 4);
        assert_eq!(feedback.as_deref(), Some("heavy workload"));

        let blank_feedback = RatingSubmission {
            rating: Some(1),
            feedback: Some("   ".to_owned()),
        };
        assert_eq!(validate_submission(&course, blank_feedback).unwrap().1, None);
    }

    #[test]
    fn test_validate_submission_rejects_bad_input() {
        let course = CourseId::new("CMPSC 131");
        for rating in [None, Some(0), Some(6)] {
            let submission = RatingSubmission {
                rating,
                feedback: None,
            };
            assert!(matches!(
                validate_submission(&course, submission),
                Err(ProfileError::Validation(_))
            ));
        }

        let submission = RatingSubmission {
            rating: Some(3),
            feedback: None,
        };
        assert!(matches!(
            validate_submission(&CourseId::new("  "), submission),
            Err(ProfileError::Validation(_))
        ));
    }
}
