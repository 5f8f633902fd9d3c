use models::Semester;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Academic term with a fixed date range. The `active` flag is a manual
/// override used by the program overview; "active at a date" is computed
/// from the start/end range instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "intakes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub semester: Semester,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Whether the intake is running on `date`, both ends inclusive
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::section::Entity")]
    Sections,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod test {
    use super::Model;
    use chrono::NaiveDate;
    use models::Semester;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fall_2025() -> Model {
        Model {
            id: Uuid::from_u128(1),
            name: "Fall 2025".to_string(),
            start_date: date(2025, 9, 1),
            end_date: date(2025, 12, 15),
            semester: Semester::Fall,
            active: true,
            created_at: date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            updated_at: date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_contains_inside_range() {
        assert!(fall_2025().contains(date(2025, 10, 1)));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let intake = fall_2025();
        assert!(intake.contains(date(2025, 9, 1)));
        assert!(intake.contains(date(2025, 12, 15)));
    }

    #[test]
    fn test_contains_outside_range() {
        let intake = fall_2025();
        assert!(!intake.contains(date(2025, 8, 31)));
        assert!(!intake.contains(date(2025, 12, 16)));
    }
}
