use models::CourseType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub course_type: Option<CourseType>,
    pub credits: f64,
    pub sessions: i32,
    pub area_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id"
    )]
    Area,
    #[sea_orm(has_many = "super::course_delivery::Entity")]
    CourseDeliveries,
    #[sea_orm(has_many = "super::course_program::Entity")]
    CoursePrograms,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::course_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDeliveries.def()
    }
}

// Many-to-many relationship with programs
impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_program::Relation::Program.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_program::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
