//! Academic profile aggregation for the advising dashboard.
//!
//! Given a student id, [`assemble::assemble_profile`] pulls enrollments,
//! courses, absences, GPA history and course ratings out of a
//! [`store::RecordStore`], joins them, derives standing metrics and returns
//! one immutable [`assemble::Profile`].

pub mod advisor;
pub mod assemble;
pub mod derive;
pub mod error;
pub mod merge;
pub mod ratings;
pub mod store;
pub mod viewer;

pub use error::{ProfileError, ProfileResult, Section, StoreError, StoreResult};
pub use store::RecordStore;
pub use viewer::{ViewMode, Viewer};
