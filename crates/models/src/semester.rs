use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Semester an intake belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    #[sea_orm(string_value = "fall")]
    Fall,
    #[sea_orm(string_value = "spring")]
    Spring,
}

impl Semester {
    pub const ALL: [Self; 2] = [Self::Fall, Self::Spring];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fall => "fall",
            Self::Spring => "spring",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
        }
    }
}

#[cfg(test)]
mod test {
    use super::Semester;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_semester_codes_round_trip() {
        for semester in Semester::ALL {
            assert_eq!(
                Semester::try_from_value(&semester.as_str().to_string()).unwrap(),
                semester
            );
        }
    }
}
