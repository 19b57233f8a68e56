use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Advisee listing and the GPA scan fallback both filter on advisor
        manager
            .create_index(
                Index::create()
                    .name("idx_students_advisor_id")
                    .table(Students::Table)
                    .col(Students::AdvisorId)
                    .col(Students::CumulativeGpa)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_absences_student_id")
                    .table(Absences::Table)
                    .col(Absences::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gpa_history_student_id")
                    .table(GpaHistory::Table)
                    .col(GpaHistory::StudentId)
                    .to_owned(),
            )
            .await?;

        // One rating per student and course; upserts conflict on this
        manager
            .create_index(
                Index::create()
                    .name("idx_course_ratings_student_course")
                    .table(CourseRatings::Table)
                    .col(CourseRatings::StudentId)
                    .col(CourseRatings::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_ratings_course_id")
                    .table(CourseRatings::Table)
                    .col(CourseRatings::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_high_risk_students_advisor_id")
                    .table(HighRiskStudents::Table)
                    .col(HighRiskStudents::AdvisorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation
        for name in [
            "idx_high_risk_students_advisor_id",
            "idx_course_ratings_course_id",
            "idx_course_ratings_student_course",
            "idx_gpa_history_student_id",
            "idx_absences_student_id",
            "idx_enrollments_student_id",
            "idx_students_advisor_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    AdvisorId,
    CumulativeGpa,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
}

#[derive(Iden)]
enum Absences {
    Table,
    StudentId,
}

#[derive(Iden)]
enum GpaHistory {
    Table,
    StudentId,
}

#[derive(Iden)]
enum CourseRatings {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum HighRiskStudents {
    Table,
    AdvisorId,
}
