//! Standing metrics computed from already-fetched records. Nothing here is
//! stored; every value is recomputed on each read.

use crate::merge::MergedEnrollment;
use models::{enrollment::EnrollmentStatus, student::Student};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Credit hours required to graduate
pub const GRADUATION_HOURS: i64 = 134;

/// Cumulative GPA below which a student is on probation and at high risk
pub const PROBATION_GPA: f64 = 2.0;

/// Attendance ratio below which a student is warned
pub const MIN_ATTENDANCE: f64 = 0.75;

pub const PROBATION_WARNING: &str = "Academic probation (GPA below 2.0)";
pub const LOW_ATTENDANCE_WARNING: &str = "Low attendance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AcademicLevel {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl Display for AcademicLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
        };
        f.write_str(name)
    }
}

/// Class standing by completed hours; 30, 60 and 90 start a new level
pub fn academic_level(completed_hours: u32) -> AcademicLevel {
    match completed_hours {
        0..30 => AcademicLevel::Freshman,
        30..60 => AcademicLevel::Sophomore,
        60..90 => AcademicLevel::Junior,
        _ => AcademicLevel::Senior,
    }
}

/// Hours left until graduation, negative once a student passes the requirement
pub fn remaining_hours(completed_hours: u32) -> i64 {
    GRADUATION_HOURS - i64::from(completed_hours)
}

pub fn standing_warnings(cumulative_gpa: Option<f64>, attendance: Option<f64>) -> Vec<String> {
    let mut warnings = Vec::new();

    if cumulative_gpa.is_some_and(|gpa| gpa < PROBATION_GPA) {
        warnings.push(PROBATION_WARNING.to_owned());
    }
    if attendance.is_some_and(|ratio| ratio < MIN_ATTENDANCE) {
        warnings.push(LOW_ATTENDANCE_WARNING.to_owned());
    }

    warnings
}

pub fn warnings(student: &Student) -> Vec<String> {
    standing_warnings(student.cumulative_gpa, student.attendance)
}

/// A student is high-risk when their cumulative GPA is below the probation
/// threshold and an advisor is assigned to follow up
pub fn is_high_risk(student: &Student) -> bool {
    student.advisor_id.is_some() && student.cumulative_gpa.is_some_and(|gpa| gpa < PROBATION_GPA)
}

/// Enrollments split by status, each group in the original order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusPartitions {
    pub current: Vec<MergedEnrollment>,
    pub completed: Vec<MergedEnrollment>,
    pub leftover: Vec<MergedEnrollment>,
}

pub fn partition_by_status(merged: &[MergedEnrollment]) -> StatusPartitions {
    let mut partitions = StatusPartitions::default();

    for enrollment in merged {
        let group = match enrollment.status {
            EnrollmentStatus::Current => &mut partitions.current,
            EnrollmentStatus::Completed => &mut partitions.completed,
            EnrollmentStatus::Leftover => &mut partitions.leftover,
        };
        group.push(enrollment.clone());
    }

    partitions
}
