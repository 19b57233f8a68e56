use crate::ids::{AdvisorId, StudentId};
use serde::{Deserialize, Serialize};

/// A student as stored by the registrar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub advisor_id: Option<AdvisorId>,
    pub major_id: String,
    pub department_id: String,
    pub current_gpa: Option<f64>,
    pub cumulative_gpa: Option<f64>,
    /// Credit hours completed so far, absent for new students
    pub completed_hours: Option<u32>,
    pub enrollment_year: i32,
    /// Fraction of attended class meetings, when attendance is tracked
    pub attendance: Option<f64>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Completed hours with an absent value read as zero
    pub fn hours(&self) -> u32 {
        self.completed_hours.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: AdvisorId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: String,
}

impl Advisor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
