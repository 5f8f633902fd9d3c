use models::ProfessorType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Professor master record. `campuses` and `availabilities` hold campus and
/// time-slot codes as Postgres text arrays.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub corporate_email: Option<String>,
    pub phone_number: Option<String>,
    pub campuses: Vec<String>,
    pub availabilities: Vec<String>,
    pub professor_type: ProfessorType,
    pub minimum_sessions: i32,
    pub birth_year: Option<i32>,
    pub joined_year: Option<i32>,
    pub linkedin_profile: Option<String>,
    pub accredited: Option<bool>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// "name last_name" as shown in reports
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }

    /// Corporate address when present, personal otherwise
    pub fn contact_email(&self) -> &str {
        self.corporate_email.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_delivery::Entity")]
    CourseDeliveries,
    #[sea_orm(has_many = "super::professor_degree::Entity")]
    ProfessorDegrees,
    #[sea_orm(has_many = "super::professor_course_possibility::Entity")]
    CoursePossibilities,
}

impl Related<super::course_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDeliveries.def()
    }
}

// Many-to-many relationship with degrees
impl Related<super::degree::Entity> for Entity {
    fn to() -> RelationDef {
        super::professor_degree::Relation::Degree.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::professor_degree::Relation::Professor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
