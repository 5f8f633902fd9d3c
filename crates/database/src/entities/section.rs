use models::Campus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cohort of a program at a campus, for a course year, within an intake.
/// Unique over (name, intake, campus, course_year, program).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub intake_id: Uuid,
    pub campus: Campus,
    pub course_year: i16,
    pub program_id: Option<Uuid>,
    pub joined_academic_year_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::intake::Entity",
        from = "Column::IntakeId",
        to = "super::intake::Column::Id"
    )]
    Intake,
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id"
    )]
    Program,
    #[sea_orm(
        belongs_to = "super::joined_academic_year::Entity",
        from = "Column::JoinedAcademicYearId",
        to = "super::joined_academic_year::Column::Id"
    )]
    JoinedAcademicYear,
    #[sea_orm(has_many = "super::course_delivery_section::Entity")]
    CourseDeliverySections,
}

impl Related<super::intake::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intake.def()
    }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl Related<super::joined_academic_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JoinedAcademicYear.def()
    }
}

// Many-to-many relationship with course deliveries
impl Related<super::course_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_delivery_section::Relation::CourseDelivery.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_delivery_section::Relation::Section.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
