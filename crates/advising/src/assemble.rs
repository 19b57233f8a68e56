use crate::{
    RecordStore, ViewMode, Viewer,
    derive::{self, AcademicLevel, partition_by_status},
    error::{ProfileError, ProfileResult, Section, or_degraded},
    merge::{self, MergedEnrollment},
    ratings,
};
use log::{debug, info};
use models::{gpa::GpaRecord, ids::StudentId, semester::sort_by_semester, student::Student};
use serde::Serialize;

/// One point on the GPA history chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaPoint {
    pub semester: String,
    pub gpa: f64,
}

impl From<GpaRecord> for GpaPoint {
    fn from(record: GpaRecord) -> Self {
        Self {
            semester: record.semester,
            gpa: record.gpa,
        }
    }
}

/// Everything the dashboard shows about one student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub student: Student,
    /// All enrollments that could be joined to a course
    pub courses: Vec<MergedEnrollment>,
    pub current_courses: Vec<MergedEnrollment>,
    /// Completed enrollments, annotated with course ratings
    pub completed_courses: Vec<MergedEnrollment>,
    pub leftover_courses: Vec<MergedEnrollment>,
    /// Chronological, oldest semester first
    pub gpa_history: Vec<GpaPoint>,
    pub warnings: Vec<String>,
    pub academic_level: AcademicLevel,
    pub remaining_hours: i64,
    pub view_mode: ViewMode,
    /// Sections that failed to load and were left empty
    pub degraded: Vec<Section>,
}

/// Builds the profile of `student_id` as seen by `viewer`.
///
/// Fails only when the student does not exist, the viewer may not see them,
/// or the student lookup itself errors. Every other fetch degrades to an
/// empty section.
pub async fn assemble_profile(
    store: &dyn RecordStore,
    viewer: &Viewer,
    student_id: &StudentId,
) -> ProfileResult<Profile> {
    let student = store
        .find_student(student_id)
        .await?
        .ok_or_else(|| ProfileError::not_found("student", student_id))?;

    if !viewer.can_view(&student) {
        return Err(ProfileError::forbidden(format!(
            "not allowed to view student {student_id}"
        )));
    }

    let mut degraded = Vec::new();

    let (enrollments, absences, gpa_records) = futures::join!(
        store.find_enrollments(&student.id),
        store.find_absences(&student.id),
        store.find_gpa_history(&student.id),
    );
    let enrollments = or_degraded(enrollments, Section::Enrollments, &mut degraded);
    let absences = or_degraded(absences, Section::Absences, &mut degraded);
    let gpa_records = or_degraded(gpa_records, Section::GpaHistory, &mut degraded);
    debug!(
        "Student {}: {} enrollments, {} absence records, {} GPA records",
        student.id,
        enrollments.len(),
        absences.len(),
        gpa_records.len()
    );

    let catalog = merge::fetch_courses(store, &enrollments, &mut degraded).await;
    let courses = merge::merge_enrollments(&enrollments, &catalog, &absences);

    let mut partitions = partition_by_status(&courses);
    ratings::annotate_completed(store, &mut partitions.completed, &student.id, &mut degraded)
        .await;

    let mut gpa_history: Vec<GpaPoint> = gpa_records.into_iter().map(GpaPoint::from).collect();
    sort_by_semester(&mut gpa_history, |point| point.semester.as_str());

    let hours = student.hours();
    let profile = Profile {
        warnings: derive::warnings(&student),
        academic_level: derive::academic_level(hours),
        remaining_hours: derive::remaining_hours(hours),
        view_mode: viewer.mode(),
        courses,
        current_courses: partitions.current,
        completed_courses: partitions.completed,
        leftover_courses: partitions.leftover,
        gpa_history,
        degraded,
        student,
    };

    info!(
        "Assembled profile for student {} ({} courses, {} degraded sections)",
        profile.student.id,
        profile.courses.len(),
        profile.degraded.len()
    );

    Ok(profile)
}
