pub mod course;
pub mod enrollment;
pub mod gpa;
pub mod ids;
pub mod rating;
pub mod semester;
pub mod student;
