use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The three campuses a section can be taught at
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Campus {
    #[sea_orm(string_value = "Segovia")]
    #[serde(rename = "Segovia")]
    Segovia,
    #[sea_orm(string_value = "Madrid A")]
    #[serde(rename = "Madrid A")]
    MadridA,
    #[sea_orm(string_value = "Madrid B")]
    #[serde(rename = "Madrid B")]
    MadridB,
}

impl Campus {
    pub const ALL: [Self; 3] = [Self::Segovia, Self::MadridA, Self::MadridB];

    /// Stored campus code
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Segovia => "Segovia",
            Self::MadridA => "Madrid A",
            Self::MadridB => "Madrid B",
        }
    }

    /// Display name of the campus building
    pub fn label(self) -> &'static str {
        match self {
            Self::Segovia => "Segovia",
            Self::MadridA => "Madrid IE Tower",
            Self::MadridB => "Madrid Maria de Molina",
        }
    }
}

#[cfg(test)]
mod test {
    use super::Campus;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_campus_codes_round_trip() {
        for campus in Campus::ALL {
            let stored = campus.to_value();
            assert_eq!(Campus::try_from_value(&stored).unwrap(), campus);
            assert_eq!(stored, campus.as_str());
        }
    }

    #[test]
    fn test_campus_labels() {
        assert_eq!(Campus::Segovia.label(), "Segovia");
        assert_eq!(Campus::MadridA.label(), "Madrid IE Tower");
        assert_eq!(Campus::MadridB.label(), "Madrid Maria de Molina");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(Campus::try_from_value(&"Valencia".to_string()).is_err());
    }
}
