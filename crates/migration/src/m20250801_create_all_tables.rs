use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create universities table
        manager
            .create_table(
                Table::create()
                    .table(Universities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Universities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Universities::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Universities::Country).string().not_null())
                    .col(
                        ColumnDef::new(Universities::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Universities::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create degrees table
        manager
            .create_table(
                Table::create()
                    .table(Degrees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Degrees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Degrees::Name).string().not_null())
                    .col(ColumnDef::new(Degrees::UniversityId).uuid().not_null())
                    .col(ColumnDef::new(Degrees::DegreeType).string().not_null())
                    .col(ColumnDef::new(Degrees::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Degrees::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degrees-university_id")
                            .from(Degrees::Table, Degrees::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_degrees_name_university")
                    .table(Degrees::Table)
                    .col(Degrees::Name)
                    .col(Degrees::UniversityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create areas table
        manager
            .create_table(
                Table::create()
                    .table(Areas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Areas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Areas::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create programs table
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Programs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Programs::Name).string().not_null())
                    .col(ColumnDef::new(Programs::School).string().not_null())
                    .col(ColumnDef::new(Programs::Code).string().unique_key())
                    .col(ColumnDef::new(Programs::ProgramType).string().not_null())
                    .col(
                        ColumnDef::new(Programs::Years)
                            .integer()
                            .not_null()
                            .default(4),
                    )
                    .col(ColumnDef::new(Programs::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Programs::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create intakes table
        manager
            .create_table(
                Table::create()
                    .table(Intakes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Intakes::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Intakes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Intakes::StartDate).date().not_null())
                    .col(ColumnDef::new(Intakes::EndDate).date().not_null())
                    .col(ColumnDef::new(Intakes::Semester).string().not_null())
                    .col(
                        ColumnDef::new(Intakes::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Intakes::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Intakes::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create joined_academic_years table
        manager
            .create_table(
                Table::create()
                    .table(JoinedAcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JoinedAcademicYears::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JoinedAcademicYears::Name).string().not_null())
                    .col(
                        ColumnDef::new(JoinedAcademicYears::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JoinedAcademicYears::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JoinedAcademicYears::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::Name).string().not_null())
                    .col(ColumnDef::new(Sections::IntakeId).uuid().not_null())
                    .col(ColumnDef::new(Sections::Campus).string().not_null())
                    .col(
                        ColumnDef::new(Sections::CourseYear)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Sections::ProgramId).uuid())
                    .col(ColumnDef::new(Sections::JoinedAcademicYearId).uuid())
                    .col(ColumnDef::new(Sections::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Sections::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-intake_id")
                            .from(Sections::Table, Sections::IntakeId)
                            .to(Intakes::Table, Intakes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-program_id")
                            .from(Sections::Table, Sections::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-joined_academic_year_id")
                            .from(Sections::Table, Sections::JoinedAcademicYearId)
                            .to(JoinedAcademicYears::Table, JoinedAcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_sections_cohort")
                    .table(Sections::Table)
                    .col(Sections::Name)
                    .col(Sections::IntakeId)
                    .col(Sections::Campus)
                    .col(Sections::CourseYear)
                    .col(Sections::ProgramId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::CourseType).string())
                    .col(ColumnDef::new(Courses::Credits).double().not_null())
                    .col(ColumnDef::new(Courses::Sessions).integer().not_null())
                    .col(ColumnDef::new(Courses::AreaId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-area_id")
                            .from(Courses::Table, Courses::AreaId)
                            .to(Areas::Table, Areas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_programs junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CoursePrograms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursePrograms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoursePrograms::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CoursePrograms::ProgramId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_programs-course_id")
                            .from(CoursePrograms::Table, CoursePrograms::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_programs-program_id")
                            .from(CoursePrograms::Table, CoursePrograms::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_course_programs_pair")
                    .table(CoursePrograms::Table)
                    .col(CoursePrograms::CourseId)
                    .col(CoursePrograms::ProgramId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::LastName).string().not_null())
                    .col(ColumnDef::new(Professors::Email).string().not_null())
                    .col(
                        ColumnDef::new(Professors::CorporateEmail)
                            .string()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professors::PhoneNumber).string())
                    .col(
                        ColumnDef::new(Professors::Campuses)
                            .array(ColumnType::String(StringLen::None))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professors::Availabilities)
                            .array(ColumnType::String(StringLen::None))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professors::ProfessorType).string().not_null())
                    .col(
                        ColumnDef::new(Professors::MinimumSessions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Professors::BirthYear).integer())
                    .col(ColumnDef::new(Professors::JoinedYear).integer())
                    .col(ColumnDef::new(Professors::LinkedinProfile).string())
                    .col(ColumnDef::new(Professors::Accredited).boolean())
                    .col(ColumnDef::new(Professors::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Professors::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create professor_degrees junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(ProfessorDegrees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorDegrees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorDegrees::ProfessorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfessorDegrees::DegreeId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProfessorDegrees::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorDegrees::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professor_degrees-professor_id")
                            .from(ProfessorDegrees::Table, ProfessorDegrees::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professor_degrees-degree_id")
                            .from(ProfessorDegrees::Table, ProfessorDegrees::DegreeId)
                            .to(Degrees::Table, Degrees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_professor_degrees_pair")
                    .table(ProfessorDegrees::Table)
                    .col(ProfessorDegrees::ProfessorId)
                    .col(ProfessorDegrees::DegreeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create professor_course_possibilities junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(ProfessorCoursePossibilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorCoursePossibilities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCoursePossibilities::ProfessorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCoursePossibilities::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCoursePossibilities::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCoursePossibilities::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professor_course_possibilities-professor_id")
                            .from(
                                ProfessorCoursePossibilities::Table,
                                ProfessorCoursePossibilities::ProfessorId,
                            )
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professor_course_possibilities-course_id")
                            .from(
                                ProfessorCoursePossibilities::Table,
                                ProfessorCoursePossibilities::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_professor_course_possibilities_pair")
                    .table(ProfessorCoursePossibilities::Table)
                    .col(ProfessorCoursePossibilities::ProfessorId)
                    .col(ProfessorCoursePossibilities::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create course_deliveries table
        manager
            .create_table(
                Table::create()
                    .table(CourseDeliveries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDeliveries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseDeliveries::CourseId).uuid())
                    .col(ColumnDef::new(CourseDeliveries::ProfessorId).uuid())
                    .col(
                        ColumnDef::new(CourseDeliveries::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseDeliveries::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_deliveries-course_id")
                            .from(CourseDeliveries::Table, CourseDeliveries::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_deliveries-professor_id")
                            .from(CourseDeliveries::Table, CourseDeliveries::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_delivery_sections junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseDeliverySections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDeliverySections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseDeliverySections::CourseDeliveryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseDeliverySections::SectionId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_delivery_sections-course_delivery_id")
                            .from(
                                CourseDeliverySections::Table,
                                CourseDeliverySections::CourseDeliveryId,
                            )
                            .to(CourseDeliveries::Table, CourseDeliveries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_delivery_sections-section_id")
                            .from(
                                CourseDeliverySections::Table,
                                CourseDeliverySections::SectionId,
                            )
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_course_delivery_sections_pair")
                    .table(CourseDeliverySections::Table)
                    .col(CourseDeliverySections::CourseDeliveryId)
                    .col(CourseDeliverySections::SectionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CourseDeliverySections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseDeliveries::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(ProfessorCoursePossibilities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfessorDegrees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CoursePrograms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(JoinedAcademicYears::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Intakes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Areas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Degrees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Universities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Universities {
    Table,
    Id,
    Name,
    Country,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Degrees {
    Table,
    Id,
    Name,
    UniversityId,
    DegreeType,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Areas {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Programs {
    Table,
    Id,
    Name,
    School,
    Code,
    ProgramType,
    Years,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Intakes {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Semester,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum JoinedAcademicYears {
    Table,
    Id,
    Name,
    StartDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sections {
    Table,
    Id,
    Name,
    IntakeId,
    Campus,
    CourseYear,
    ProgramId,
    JoinedAcademicYearId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Code,
    Name,
    CourseType,
    Credits,
    Sessions,
    AreaId,
}

#[derive(Iden)]
enum CoursePrograms {
    Table,
    Id,
    CourseId,
    ProgramId,
}

#[derive(Iden)]
enum Professors {
    Table,
    Id,
    Name,
    LastName,
    Email,
    CorporateEmail,
    PhoneNumber,
    Campuses,
    Availabilities,
    ProfessorType,
    MinimumSessions,
    BirthYear,
    JoinedYear,
    LinkedinProfile,
    Accredited,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ProfessorDegrees {
    Table,
    Id,
    ProfessorId,
    DegreeId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ProfessorCoursePossibilities {
    Table,
    Id,
    ProfessorId,
    CourseId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseDeliveries {
    Table,
    Id,
    CourseId,
    ProfessorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseDeliverySections {
    Table,
    Id,
    CourseDeliveryId,
    SectionId,
}
