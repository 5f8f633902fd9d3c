use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// School a program belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(13))")]
pub enum School {
    #[sea_orm(string_value = "business")]
    #[serde(rename = "business")]
    Business,
    #[sea_orm(string_value = "law")]
    #[serde(rename = "law")]
    Law,
    #[sea_orm(string_value = "sci_and_tech")]
    #[serde(rename = "sci_and_tech")]
    ScienceAndTechnology,
    #[sea_orm(string_value = "humanities")]
    #[serde(rename = "humanities")]
    Humanities,
    #[sea_orm(string_value = "econ_glo_affa")]
    #[serde(rename = "econ_glo_affa")]
    PoliticsEconomicsGlobalAffairs,
    #[sea_orm(string_value = "arch")]
    #[serde(rename = "arch")]
    ArchitectureAndDesign,
}

impl School {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Law => "law",
            Self::ScienceAndTechnology => "sci_and_tech",
            Self::Humanities => "humanities",
            Self::PoliticsEconomicsGlobalAffairs => "econ_glo_affa",
            Self::ArchitectureAndDesign => "arch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Business => "Business School",
            Self::Law => "Law School",
            Self::ScienceAndTechnology => "Science and Technology School",
            Self::Humanities => "School of Humanities",
            Self::PoliticsEconomicsGlobalAffairs => {
                "Politics, Economics and Global Affairs School"
            }
            Self::ArchitectureAndDesign => "School of Architecture and Design",
        }
    }
}

/// Degree level a program leads to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum ProgramType {
    #[sea_orm(string_value = "ba")]
    #[serde(rename = "ba")]
    Bachelors,
    #[sea_orm(string_value = "ma")]
    #[serde(rename = "ma")]
    Master,
}

impl ProgramType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bachelors => "ba",
            Self::Master => "ma",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bachelors => "Bachelors",
            Self::Master => "Master",
        }
    }
}
