use crate::ids::StudentId;
use serde::{Deserialize, Serialize};

/// One semester's GPA for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaRecord {
    pub student_id: StudentId,
    pub semester: String,
    pub gpa: f64,
}
