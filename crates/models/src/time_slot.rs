use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Teaching time slot, also used as the professor availability code set
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub const ALL: [Self; 2] = [Self::Morning, Self::Afternoon];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
        }
    }

    /// Slot a professor's assignments are reported under. Afternoon
    /// availability wins; everything else (morning-only, empty, unknown
    /// codes) schedules in the morning.
    pub fn for_availabilities(codes: &[String]) -> Self {
        if codes.iter().any(|c| c == Self::Afternoon.as_str()) {
            Self::Afternoon
        } else {
            Self::Morning
        }
    }
}

#[cfg(test)]
mod test {
    use super::TimeSlot;
    use std::str::FromStr;

    #[test]
    fn test_afternoon_availability_wins() {
        let codes = vec!["morning".to_string(), "afternoon".to_string()];
        assert_eq!(TimeSlot::for_availabilities(&codes), TimeSlot::Afternoon);
    }

    #[test]
    fn test_morning_only_defaults_to_morning() {
        let codes = vec!["morning".to_string()];
        assert_eq!(TimeSlot::for_availabilities(&codes), TimeSlot::Morning);
    }

    #[test]
    fn test_empty_availability_defaults_to_morning() {
        assert_eq!(TimeSlot::for_availabilities(&[]), TimeSlot::Morning);
    }

    #[test]
    fn test_unknown_codes_default_to_morning() {
        let codes = vec!["evening".to_string()];
        assert_eq!(TimeSlot::for_availabilities(&codes), TimeSlot::Morning);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(TimeSlot::from_str("afternoon").unwrap(), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_str("morning").unwrap(), TimeSlot::Morning);
        assert!(TimeSlot::from_str("evening").is_err());
    }
}
