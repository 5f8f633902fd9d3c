use models::DegreeType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Degree awarded by a university. Unique over (name, university).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degrees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub university_id: Uuid,
    pub degree_type: DegreeType,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::university::Entity",
        from = "Column::UniversityId",
        to = "super::university::Column::Id"
    )]
    University,
    #[sea_orm(has_many = "super::professor_degree::Entity")]
    ProfessorDegrees,
}

impl Related<super::university::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

// Many-to-many relationship with professors
impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        super::professor_degree::Relation::Professor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::professor_degree::Relation::Degree.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
