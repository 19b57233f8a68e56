use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Majors::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Majors::Name).string().not_null())
                    .col(ColumnDef::new(Majors::DepartmentId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-majors-department_id")
                            .from(Majors::Table, Majors::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Advisors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advisors::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Advisors::FirstName).string().not_null())
                    .col(ColumnDef::new(Advisors::LastName).string().not_null())
                    .col(ColumnDef::new(Advisors::Email).string().not_null())
                    .col(ColumnDef::new(Advisors::DepartmentId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-advisors-department_id")
                            .from(Advisors::Table, Advisors::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Student ids are issued by the registrar, never generated here
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::AdvisorId).string())
                    .col(ColumnDef::new(Students::MajorId).string().not_null())
                    .col(ColumnDef::new(Students::DepartmentId).string().not_null())
                    .col(ColumnDef::new(Students::CurrentGpa).double())
                    .col(ColumnDef::new(Students::CumulativeGpa).double())
                    .col(ColumnDef::new(Students::CompletedHours).integer())
                    .col(ColumnDef::new(Students::EnrollmentYear).integer().not_null())
                    .col(ColumnDef::new(Students::AttendanceRate).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-advisor_id")
                            .from(Students::Table, Students::AdvisorId)
                            .to(Advisors::Table, Advisors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-major_id")
                            .from(Students::Table, Students::MajorId)
                            .to(Majors::Table, Majors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-department_id")
                            .from(Students::Table, Students::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::CreditHours).integer().not_null())
                    .col(ColumnDef::new(Courses::DifficultyRating).double())
                    .col(ColumnDef::new(Courses::PrerequisiteId).string())
                    .col(ColumnDef::new(Courses::DepartmentId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-department_id")
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enrollments::StudentId).integer().not_null())
                    .col(ColumnDef::new(Enrollments::CourseId).string().not_null())
                    .col(ColumnDef::new(Enrollments::Semester).string().not_null())
                    .col(ColumnDef::new(Enrollments::Status).text().not_null())
                    .col(ColumnDef::new(Enrollments::Grade).text())
                    .primary_key(
                        Index::create()
                            .col(Enrollments::StudentId)
                            .col(Enrollments::CourseId)
                            .col(Enrollments::Semester),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-course_id")
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // No course foreign key: absence rows are imported from attendance
        // sheets and may name offerings the catalog no longer carries
        manager
            .create_table(
                Table::create()
                    .table(Absences::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Absences::StudentId).integer().not_null())
                    .col(ColumnDef::new(Absences::CourseId).string().not_null())
                    .col(ColumnDef::new(Absences::Semester).string().not_null())
                    .col(
                        ColumnDef::new(Absences::Absences)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(
                        Index::create()
                            .col(Absences::StudentId)
                            .col(Absences::CourseId)
                            .col(Absences::Semester),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-absences-student_id")
                            .from(Absences::Table, Absences::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GpaHistory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GpaHistory::StudentId).integer().not_null())
                    .col(ColumnDef::new(GpaHistory::Semester).string().not_null())
                    .col(ColumnDef::new(GpaHistory::Gpa).double().not_null())
                    .primary_key(
                        Index::create()
                            .col(GpaHistory::StudentId)
                            .col(GpaHistory::Semester),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-gpa_history-student_id")
                            .from(GpaHistory::Table, GpaHistory::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseRatings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRatings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseRatings::StudentId).integer().not_null())
                    .col(ColumnDef::new(CourseRatings::CourseId).string().not_null())
                    .col(ColumnDef::new(CourseRatings::Rating).integer().not_null())
                    .col(ColumnDef::new(CourseRatings::Feedback).text())
                    .col(
                        ColumnDef::new(CourseRatings::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRatings::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .check(
                        Expr::col(CourseRatings::Rating)
                            .gte(1)
                            .and(Expr::col(CourseRatings::Rating).lte(5)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_ratings-student_id")
                            .from(CourseRatings::Table, CourseRatings::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_ratings-course_id")
                            .from(CourseRatings::Table, CourseRatings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Populated by an external risk job; only read by this service
        manager
            .create_table(
                Table::create()
                    .table(HighRiskStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HighRiskStudents::StudentId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HighRiskStudents::StudentName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HighRiskStudents::CumulativeGpa)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HighRiskStudents::AdvisorId)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-high_risk_students-student_id")
                            .from(HighRiskStudents::Table, HighRiskStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation for foreign keys
        manager
            .drop_table(Table::drop().table(HighRiskStudents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseRatings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GpaHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Absences::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Advisors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Majors {
    Table,
    Id,
    Name,
    DepartmentId,
}

#[derive(Iden)]
enum Advisors {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    DepartmentId,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    AdvisorId,
    MajorId,
    DepartmentId,
    CurrentGpa,
    CumulativeGpa,
    CompletedHours,
    EnrollmentYear,
    AttendanceRate,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    Description,
    CreditHours,
    DifficultyRating,
    PrerequisiteId,
    DepartmentId,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    StudentId,
    CourseId,
    Semester,
    Status,
    Grade,
}

#[derive(Iden)]
enum Absences {
    Table,
    StudentId,
    CourseId,
    Semester,
    Absences,
}

#[derive(Iden)]
enum GpaHistory {
    Table,
    StudentId,
    Semester,
    Gpa,
}

#[derive(Iden)]
enum CourseRatings {
    Table,
    Id,
    StudentId,
    CourseId,
    Rating,
    Feedback,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum HighRiskStudents {
    Table,
    StudentId,
    StudentName,
    CumulativeGpa,
    AdvisorId,
}
