use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum ProfessorType {
    #[sea_orm(string_value = "f")]
    #[serde(rename = "f")]
    Faculty,
    #[sea_orm(string_value = "a")]
    #[serde(rename = "a")]
    Adjunct,
    #[sea_orm(string_value = "v")]
    #[serde(rename = "v")]
    Visiting,
}

impl ProfessorType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faculty => "f",
            Self::Adjunct => "a",
            Self::Visiting => "v",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Faculty => "Faculty",
            Self::Adjunct => "Adjunct Professor",
            Self::Visiting => "Visiting Professor",
        }
    }
}
