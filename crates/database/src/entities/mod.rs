pub mod absence;
pub mod advisor;
pub mod course;
pub mod course_rating;
pub mod enrollment;
pub mod gpa_history;
pub mod high_risk_student;
pub mod student;

use log::warn;

/// Reads a stored count that must not be negative. Negative values are
/// logged and read as zero.
pub(crate) fn stored_count(value: i32, column: &str, row: impl std::fmt::Display) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        warn!("Negative {column} ({value}) on {row}; reading it as 0");
        0
    })
}
