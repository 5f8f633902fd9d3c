use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on intakes.start_date for the date-window lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_intakes_start_date")
                    .table(Intakes::Table)
                    .col(Intakes::StartDate)
                    .to_owned(),
            )
            .await?;

        // Indexes on professors for name/email lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_professors_name")
                    .table(Professors::Table)
                    .col(Professors::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professors_last_name")
                    .table(Professors::Table)
                    .col(Professors::LastName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professors_email")
                    .table(Professors::Table)
                    .col(Professors::Email)
                    .to_owned(),
            )
            .await?;

        // Indexes on sections for the report query patterns
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_intake_program")
                    .table(Sections::Table)
                    .col(Sections::IntakeId)
                    .col(Sections::ProgramId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_program_course_year")
                    .table(Sections::Table)
                    .col(Sections::ProgramId)
                    .col(Sections::CourseYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_campus_course_year")
                    .table(Sections::Table)
                    .col(Sections::Campus)
                    .col(Sections::CourseYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sections_created_at")
                    .table(Sections::Table)
                    .col(Sections::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Indexes on course_deliveries for gap detection and list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_course_deliveries_course_professor")
                    .table(CourseDeliveries::Table)
                    .col(CourseDeliveries::CourseId)
                    .col(CourseDeliveries::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_deliveries_professor")
                    .table(CourseDeliveries::Table)
                    .col(CourseDeliveries::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_deliveries_course")
                    .table(CourseDeliveries::Table)
                    .col(CourseDeliveries::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_deliveries_created_at")
                    .table(CourseDeliveries::Table)
                    .col(CourseDeliveries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Indexes on course_delivery_sections for faster many-to-many lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_course_delivery_sections_course_delivery_id")
                    .table(CourseDeliverySections::Table)
                    .col(CourseDeliverySections::CourseDeliveryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_delivery_sections_section_id")
                    .table(CourseDeliverySections::Table)
                    .col(CourseDeliverySections::SectionId)
                    .to_owned(),
            )
            .await?;

        // Indexes on course_programs for faster many-to-many lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_course_programs_course_id")
                    .table(CoursePrograms::Table)
                    .col(CoursePrograms::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_programs_program_id")
                    .table(CoursePrograms::Table)
                    .col(CoursePrograms::ProgramId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_course_programs_program_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_course_programs_course_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_delivery_sections_section_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_delivery_sections_course_delivery_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_deliveries_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_course_deliveries_course").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_deliveries_professor")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_deliveries_course_professor")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_sections_created_at").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_campus_course_year")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_program_course_year")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_sections_intake_program").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_professors_email").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_professors_last_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_professors_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_intakes_start_date").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Intakes {
    Table,
    StartDate,
}

#[derive(Iden)]
enum Professors {
    Table,
    Name,
    LastName,
    Email,
}

#[derive(Iden)]
enum Sections {
    Table,
    IntakeId,
    ProgramId,
    Campus,
    CourseYear,
    CreatedAt,
}

#[derive(Iden)]
enum CourseDeliveries {
    Table,
    CourseId,
    ProfessorId,
    CreatedAt,
}

#[derive(Iden)]
enum CourseDeliverySections {
    Table,
    CourseDeliveryId,
    SectionId,
}

#[derive(Iden)]
enum CoursePrograms {
    Table,
    CourseId,
    ProgramId,
}
