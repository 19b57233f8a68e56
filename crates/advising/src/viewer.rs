use models::{
    ids::{AdvisorId, StudentId},
    student::Student,
};
use serde::Serialize;

/// Which audience a view is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Student,
    Faculty,
}

/// The authenticated caller, passed explicitly into every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Student(StudentId),
    Faculty(AdvisorId),
}

impl Viewer {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Student(_) => ViewMode::Student,
            Self::Faculty(_) => ViewMode::Faculty,
        }
    }

    /// Students see their own profile; advisors see their advisees
    pub fn can_view(&self, student: &Student) -> bool {
        match self {
            Self::Student(id) => *id == student.id,
            Self::Faculty(id) => student.advisor_id.as_ref() == Some(id),
        }
    }
}
