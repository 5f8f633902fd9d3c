use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum DegreeType {
    #[sea_orm(string_value = "b")]
    #[serde(rename = "b")]
    Bachelor,
    #[sea_orm(string_value = "m")]
    #[serde(rename = "m")]
    Master,
    #[sea_orm(string_value = "d")]
    #[serde(rename = "d")]
    Doctorate,
    #[sea_orm(string_value = "o")]
    #[serde(rename = "o")]
    Other,
}

impl DegreeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bachelor => "b",
            Self::Master => "m",
            Self::Doctorate => "d",
            Self::Other => "o",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
            Self::Other => "Other",
        }
    }
}
