use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Curricular classification of a course
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum CourseType {
    #[sea_orm(string_value = "BA")]
    #[serde(rename = "BA")]
    Basic,
    #[sea_orm(string_value = "OB")]
    #[serde(rename = "OB")]
    Obligatory,
    #[sea_orm(string_value = "OP")]
    #[serde(rename = "OP")]
    Optional,
    #[sea_orm(string_value = "CA")]
    #[serde(rename = "CA")]
    ComplementaryActivity,
    #[sea_orm(string_value = "EL")]
    #[serde(rename = "EL")]
    Electives,
    #[sea_orm(string_value = "RE")]
    #[serde(rename = "RE")]
    Regular,
    #[sea_orm(string_value = "OACT")]
    #[serde(rename = "OACT")]
    OtherActivities,
}

impl CourseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "BA",
            Self::Obligatory => "OB",
            Self::Optional => "OP",
            Self::ComplementaryActivity => "CA",
            Self::Electives => "EL",
            Self::Regular => "RE",
            Self::OtherActivities => "OACT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Obligatory => "Obligatory",
            Self::Optional => "Optional",
            Self::ComplementaryActivity => "Complementary Activity",
            Self::Electives => "Electives",
            Self::Regular => "Regular",
            Self::OtherActivities => "Other Activities",
        }
    }
}
