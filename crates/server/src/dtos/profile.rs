use advising::{
    ViewMode,
    assemble::{GpaPoint, Profile},
    merge::MergedEnrollment,
};
use models::student::Student;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub advisor_id: Option<String>,
    pub major_id: String,
    pub department_id: String,
    pub current_gpa: Option<f64>,
    pub cumulative_gpa: Option<f64>,
    pub completed_hours: Option<u32>,
    pub enrollment_year: i32,
    pub attendance: Option<f64>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            full_name: student.full_name(),
            id: student.id.into(),
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            advisor_id: student.advisor_id.map(String::from),
            major_id: student.major_id,
            department_id: student.department_id,
            current_gpa: student.current_gpa,
            cumulative_gpa: student.cumulative_gpa,
            completed_hours: student.completed_hours,
            enrollment_year: student.enrollment_year,
            attendance: student.attendance,
        }
    }
}

/// One enrollment with its course details
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseEntryResponse {
    pub course_id: String,
    pub name: String,
    pub description: String,
    pub credit_hours: u32,
    pub absence_limit: Option<u32>,
    pub semester: String,
    pub status: String,
    pub grade: Option<String>,
    pub absences: Option<u32>,
    pub avg_rating: Option<f64>,
    pub my_rating: Option<u8>,
}

impl From<MergedEnrollment> for CourseEntryResponse {
    fn from(entry: MergedEnrollment) -> Self {
        Self {
            course_id: entry.course_id.into(),
            name: entry.course.name,
            description: entry.course.description,
            credit_hours: entry.course.credit_hours,
            absence_limit: entry.course.absence_limit,
            semester: entry.semester,
            status: entry.status.to_string(),
            grade: entry.grade.map(|grade| grade.to_string()),
            absences: entry.absence.map(|absence| absence.count),
            avg_rating: entry.avg_rating,
            my_rating: entry.my_rating.map(|rating| rating.get()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GpaPointResponse {
    pub semester: String,
    pub gpa: f64,
}

impl From<GpaPoint> for GpaPointResponse {
    fn from(point: GpaPoint) -> Self {
        Self {
            semester: point.semester,
            gpa: point.gpa,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub student: StudentResponse,
    pub courses: Vec<CourseEntryResponse>,
    pub current_courses: Vec<CourseEntryResponse>,
    pub completed_courses: Vec<CourseEntryResponse>,
    pub leftover_courses: Vec<CourseEntryResponse>,
    pub gpa_history: Vec<GpaPointResponse>,
    pub warnings: Vec<String>,
    pub academic_level: String,
    pub remaining_hours: i64,
    /// "student" or "faculty"
    pub view_mode: String,
    /// Sections that could not be loaded and are shown empty
    pub degraded: Vec<String>,
}

pub fn view_mode_name(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Student => "student",
        ViewMode::Faculty => "faculty",
    }
}

fn entries(list: Vec<MergedEnrollment>) -> Vec<CourseEntryResponse> {
    list.into_iter().map(CourseEntryResponse::from).collect()
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            student: profile.student.into(),
            courses: entries(profile.courses),
            current_courses: entries(profile.current_courses),
            completed_courses: entries(profile.completed_courses),
            leftover_courses: entries(profile.leftover_courses),
            gpa_history: profile
                .gpa_history
                .into_iter()
                .map(GpaPointResponse::from)
                .collect(),
            warnings: profile.warnings,
            academic_level: profile.academic_level.to_string(),
            remaining_hours: profile.remaining_hours,
            view_mode: view_mode_name(profile.view_mode).to_owned(),
            degraded: profile
                .degraded
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
