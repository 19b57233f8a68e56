pub mod academic;
pub mod rating;
pub mod student;
