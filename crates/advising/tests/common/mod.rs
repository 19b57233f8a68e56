#![allow(dead_code)]

use advising::{RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use models::{
    course::Course,
    enrollment::{Absence, Enrollment, EnrollmentStatus, Grade},
    gpa::GpaRecord,
    ids::{AdvisorId, CourseId, StudentId},
    rating::{CourseRating, RatingUpsert, RatingValue},
    student::{Advisor, Student},
};
use std::{
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fetch {
    Student,
    Course,
    Enrollments,
    Absences,
    GpaHistory,
    Ratings,
    Advisees,
    HighRisk,
    GpaScan,
}

/// In-memory record store with switchable failures
#[derive(Default)]
pub struct MemoryStore {
    pub students: Vec<Student>,
    pub advisors: Vec<Advisor>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub absences: Vec<Absence>,
    pub gpa_history: Vec<GpaRecord>,
    pub ratings: Mutex<Vec<CourseRating>>,
    /// (advisor, student) rows of the high-risk relation
    pub high_risk: Vec<(AdvisorId, StudentId)>,
    pub failing: HashSet<Fetch>,
    pub rating_fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn fail(mut self, fetch: Fetch) -> Self {
        self.failing.insert(fetch);
        self
    }

    pub fn with_ratings(self, ratings: Vec<CourseRating>) -> Self {
        *self.ratings.lock().unwrap() = ratings;
        self
    }

    pub fn stored_ratings(&self) -> Vec<CourseRating> {
        self.ratings.lock().unwrap().clone()
    }

    fn check(&self, fetch: Fetch) -> StoreResult<()> {
        if self.failing.contains(&fetch) {
            Err(StoreError::Unavailable(format!("{fetch:?}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_student(&self, id: &StudentId) -> StoreResult<Option<Student>> {
        self.check(Fetch::Student)?;
        Ok(self.students.iter().find(|s| s.id == *id).cloned())
    }

    async fn find_course(&self, id: &CourseId) -> StoreResult<Option<Course>> {
        self.check(Fetch::Course)?;
        Ok(self.courses.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_enrollments(&self, student_id: &StudentId) -> StoreResult<Vec<Enrollment>> {
        self.check(Fetch::Enrollments)?;
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.student_id == *student_id)
            .cloned()
            .collect())
    }

    async fn find_absences(&self, student_id: &StudentId) -> StoreResult<Vec<Absence>> {
        self.check(Fetch::Absences)?;
        Ok(self
            .absences
            .iter()
            .filter(|a| a.student_id == *student_id)
            .cloned()
            .collect())
    }

    async fn find_gpa_history(&self, student_id: &StudentId) -> StoreResult<Vec<GpaRecord>> {
        self.check(Fetch::GpaHistory)?;
        Ok(self
            .gpa_history
            .iter()
            .filter(|g| g.student_id == *student_id)
            .cloned()
            .collect())
    }

    async fn find_ratings(&self, course_ids: &HashSet<CourseId>) -> StoreResult<Vec<CourseRating>> {
        self.rating_fetches.fetch_add(1, Ordering::SeqCst);
        self.check(Fetch::Ratings)?;
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| course_ids.contains(&r.course_id))
            .cloned()
            .collect())
    }

    async fn upsert_rating(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
        rating: RatingValue,
        feedback: Option<String>,
    ) -> StoreResult<RatingUpsert> {
        let now = NaiveDateTime::default();
        let mut ratings = self.ratings.lock().unwrap();

        if let Some(existing) = ratings
            .iter_mut()
            .find(|r| r.student_id == *student_id && r.course_id == *course_id)
        {
            existing.rating = rating;
            if feedback.is_some() {
                existing.feedback = feedback;
            }
            existing.updated_at = now;
            return Ok(RatingUpsert::Updated(existing.clone()));
        }

        let created = CourseRating {
            student_id: student_id.clone(),
            course_id: course_id.clone(),
            rating,
            feedback,
            created_at: now,
            updated_at: now,
        };
        ratings.push(created.clone());
        Ok(RatingUpsert::Created(created))
    }

    async fn find_advisor(&self, id: &AdvisorId) -> StoreResult<Option<Advisor>> {
        Ok(self.advisors.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_advisees(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>> {
        self.check(Fetch::Advisees)?;
        Ok(self
            .students
            .iter()
            .filter(|s| s.advisor_id.as_ref() == Some(advisor_id))
            .cloned()
            .collect())
    }

    async fn find_high_risk_by_advisor(&self, advisor_id: &AdvisorId) -> StoreResult<Vec<Student>> {
        self.check(Fetch::HighRisk)?;
        Ok(self
            .high_risk
            .iter()
            .filter(|(advisor, _)| advisor == advisor_id)
            .filter_map(|(_, student)| self.students.iter().find(|s| s.id == *student))
            .cloned()
            .collect())
    }

    async fn find_by_advisor_and_gpa_below(
        &self,
        advisor_id: &AdvisorId,
        threshold: f64,
    ) -> StoreResult<Vec<Student>> {
        self.check(Fetch::GpaScan)?;
        Ok(self
            .students
            .iter()
            .filter(|s| s.advisor_id.as_ref() == Some(advisor_id))
            .filter(|s| s.cumulative_gpa.is_some_and(|gpa| gpa < threshold))
            .cloned()
            .collect())
    }
}

pub fn student(id: i32, advisor: Option<&str>, cumulative_gpa: Option<f64>, hours: Option<u32>) -> Student {
    Student {
        id: StudentId::from(id),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("s{id}@psu.edu"),
        advisor_id: advisor.map(AdvisorId::new),
        major_id: "CMPSC".to_owned(),
        department_id: "CSE".to_owned(),
        current_gpa: cumulative_gpa,
        cumulative_gpa,
        completed_hours: hours,
        enrollment_year: 2022,
        attendance: None,
    }
}

pub fn advisor(id: &str) -> Advisor {
    Advisor {
        id: AdvisorId::new(id),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: format!("{id}@psu.edu"),
        department_id: "CSE".to_owned(),
    }
}

pub fn course(id: &str, credit_hours: u32) -> Course {
    Course {
        id: CourseId::new(id),
        name: format!("{id} name"),
        description: format!("{id} description"),
        credit_hours,
        prerequisite: None,
        department_id: "CSE".to_owned(),
        difficulty_rating: None,
    }
}

pub fn enrollment(
    student: i32,
    course: &str,
    semester: &str,
    status: EnrollmentStatus,
    grade: Option<Grade>,
) -> Enrollment {
    Enrollment {
        student_id: StudentId::from(student),
        course_id: CourseId::new(course),
        semester: semester.to_owned(),
        status,
        grade,
    }
}

pub fn absence(student: i32, course: &str, semester: &str, count: u32) -> Absence {
    Absence {
        student_id: StudentId::from(student),
        course_id: CourseId::new(course),
        semester: semester.to_owned(),
        count,
    }
}

pub fn gpa(student: i32, semester: &str, gpa: f64) -> GpaRecord {
    GpaRecord {
        student_id: StudentId::from(student),
        semester: semester.to_owned(),
        gpa,
    }
}

pub fn rating(student: i32, course: &str, value: i64) -> CourseRating {
    CourseRating {
        student_id: StudentId::from(student),
        course_id: CourseId::new(course),
        rating: RatingValue::try_from(value).unwrap(),
        feedback: None,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

/// Student 1 advised by adv01, with completed, current and leftover courses,
/// absences for one offering and three semesters of GPA history
pub fn populated_store() -> MemoryStore {
    MemoryStore {
        students: vec![
            student(1, Some("adv01"), Some(1.8), Some(45)),
            student(2, Some("adv01"), Some(3.4), Some(100)),
            student(3, Some("adv02"), Some(2.9), None),
        ],
        advisors: vec![advisor("adv01"), advisor("adv02")],
        courses: vec![
            course("CMPSC 131", 3),
            course("MATH 140", 4),
            course("ENGL 15", 3),
            course("PHYS 211", 4),
        ],
        enrollments: vec![
            enrollment(1, "CMPSC 131", "Fall 2023", EnrollmentStatus::Completed, Some(Grade::B)),
            enrollment(1, "MATH 140", "Fall 2023", EnrollmentStatus::Completed, Some(Grade::A)),
            enrollment(1, "ENGL 15", "Spring 2024", EnrollmentStatus::Current, None),
            enrollment(1, "PHYS 211", "Spring 2024", EnrollmentStatus::Leftover, Some(Grade::W)),
            enrollment(2, "CMPSC 131", "Fall 2022", EnrollmentStatus::Completed, Some(Grade::APlus)),
        ],
        absences: vec![
            absence(1, "ENGL 15", "Spring 2024", 3),
            absence(1, "CMPSC 131", "Spring 2023", 9),
        ],
        gpa_history: vec![
            gpa(1, "Spring 2024", 1.7),
            gpa(1, "Fall 2023", 2.1),
            gpa(1, "Summer 2023", 1.5),
        ],
        ..MemoryStore::default()
    }
    .with_ratings(vec![rating(1, "CMPSC 131", 5), rating(2, "CMPSC 131", 3)])
}
