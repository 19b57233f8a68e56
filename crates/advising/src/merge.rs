//! Joins a student's enrollments to the course catalog and to absence
//! records.

use crate::{
    RecordStore,
    error::{Section, or_degraded},
};
use futures::future::join_all;
use log::{debug, warn};
use models::{
    course::Course,
    enrollment::{Absence, Enrollment, EnrollmentStatus, Grade},
    ids::CourseId,
    rating::RatingValue,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The course fields shown next to an enrollment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub credit_hours: u32,
    pub absence_limit: Option<u32>,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            description: course.description.clone(),
            credit_hours: course.credit_hours,
            absence_limit: course.absence_limit(),
        }
    }
}

/// An enrollment joined with its course and, when recorded, its absences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedEnrollment {
    pub course_id: CourseId,
    pub semester: String,
    pub status: EnrollmentStatus,
    pub grade: Option<Grade>,
    pub course: CourseSummary,
    pub absence: Option<Absence>,
    /// Average rating of the course, set on completed enrollments only
    pub avg_rating: Option<f64>,
    /// The student's own rating of the course, set on completed enrollments only
    pub my_rating: Option<RatingValue>,
}

/// Identifies one offering of a course
#[derive(Debug, PartialEq, Eq, Hash)]
struct OfferingKey<'a> {
    course_id: &'a CourseId,
    semester: &'a str,
}

/// Merges enrollments with their courses and absences.
///
/// Output follows the order of `enrollments`. An enrollment whose course is
/// missing from `courses` is dropped. Absences match on course and semester
/// together; when several share a key the last one wins.
pub fn merge_enrollments(
    enrollments: &[Enrollment],
    courses: &HashMap<CourseId, Course>,
    absences: &[Absence],
) -> Vec<MergedEnrollment> {
    let absences_by_offering: HashMap<OfferingKey, &Absence> = absences
        .iter()
        .map(|absence| {
            let key = OfferingKey {
                course_id: &absence.course_id,
                semester: &absence.semester,
            };
            (key, absence)
        })
        .collect();

    enrollments
        .iter()
        .filter_map(|enrollment| {
            let Some(course) = courses.get(&enrollment.course_id) else {
                warn!(
                    "Dropping enrollment of student {} in {} ({}): course not found",
                    enrollment.student_id, enrollment.course_id, enrollment.semester
                );
                return None;
            };

            let key = OfferingKey {
                course_id: &enrollment.course_id,
                semester: &enrollment.semester,
            };

            Some(MergedEnrollment {
                course_id: enrollment.course_id.clone(),
                semester: enrollment.semester.clone(),
                status: enrollment.status,
                grade: enrollment.grade,
                course: CourseSummary::from(course),
                absence: absences_by_offering.get(&key).map(|&a| a.clone()),
                avg_rating: None,
                my_rating: None,
            })
        })
        .collect()
}

/// Looks up each distinct course referenced by `enrollments`, concurrently.
///
/// Courses that do not exist are left out of the map. A failed lookup marks
/// the courses section as degraded and leaves that course out as well.
pub async fn fetch_courses(
    store: &dyn RecordStore,
    enrollments: &[Enrollment],
    degraded: &mut Vec<Section>,
) -> HashMap<CourseId, Course> {
    let course_ids: HashSet<&CourseId> = enrollments.iter().map(|e| &e.course_id).collect();
    debug!("Looking up {} distinct courses", course_ids.len());

    let lookups = course_ids
        .into_iter()
        .map(|id| async move { (id, store.find_course(id).await) });

    let mut courses = HashMap::new();
    for (id, result) in join_all(lookups).await {
        match or_degraded(result, Section::Courses, degraded) {
            Some(course) => {
                courses.insert(id.clone(), course);
            }
            None => debug!("Course {id} has no catalog entry"),
        }
    }

    courses
}
