use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between professors and degrees
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professor_degrees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub professor_id: Uuid,
    pub degree_id: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::Id"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::degree::Entity",
        from = "Column::DegreeId",
        to = "super::degree::Column::Id"
    )]
    Degree,
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::degree::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Degree.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
