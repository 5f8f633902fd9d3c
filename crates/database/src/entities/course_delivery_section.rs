use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between course deliveries
/// and sections
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_delivery_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub course_delivery_id: Uuid,
    pub section_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_delivery::Entity",
        from = "Column::CourseDeliveryId",
        to = "super::course_delivery::Column::Id"
    )]
    CourseDelivery,
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id"
    )]
    Section,
}

impl Related<super::course_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDelivery.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
