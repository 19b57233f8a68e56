use crate::ids::CourseId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub credit_hours: u32,
    pub prerequisite: Option<CourseId>,
    pub department_id: String,
    pub difficulty_rating: Option<f64>,
}

impl Course {
    /// Number of absences allowed before a student is withdrawn, derived from
    /// the credit hours on every read
    pub fn absence_limit(&self) -> Option<u32> {
        absence_limit(self.credit_hours)
    }
}

/// Maps credit hours to the absence limit; other hour counts have no limit
pub fn absence_limit(credit_hours: u32) -> Option<u32> {
    match credit_hours {
        4 => Some(18),
        3 => Some(16),
        2 => Some(12),
        1 => Some(8),
        _ => None,
    }
}
