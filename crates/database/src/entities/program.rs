use models::{ProgramType, School};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub school: School,
    #[sea_orm(unique)]
    pub code: Option<String>,
    pub program_type: ProgramType,
    pub years: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::section::Entity")]
    Sections,
    #[sea_orm(has_many = "super::course_program::Entity")]
    CoursePrograms,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_program::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_program::Relation::Program.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
