use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment of a course (and optionally a professor) to one or more
/// sections. A null professor is a staffing gap; a null course means the
/// course is not known yet.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_deliveries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub course_id: Option<Uuid>,
    pub professor_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::Id"
    )]
    Professor,
    #[sea_orm(has_many = "super::course_delivery_section::Entity")]
    CourseDeliverySections,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

// Many-to-many relationship with sections
impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_delivery_section::Relation::Section.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::course_delivery_section::Relation::CourseDelivery
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
