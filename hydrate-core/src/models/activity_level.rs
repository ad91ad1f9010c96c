use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How active the user is on a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Extra millilitres added on top of the weight-based goal.
    pub fn bonus_ml(self) -> f64 {
        match self {
            ActivityLevel::Low => 0.0,
            ActivityLevel::Medium => 500.0,
            ActivityLevel::High => 1000.0,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Low => write!(f, "low"),
            ActivityLevel::Medium => write!(f, "medium"),
            ActivityLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ActivityLevel::Low),
            "medium" => Ok(ActivityLevel::Medium),
            "high" => Ok(ActivityLevel::High),
            _ => Err(format!(
                "Invalid activity level '{}'. Valid options: low, medium, high",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_display() {
        assert_eq!(format!("{}", ActivityLevel::Low), "low");
        assert_eq!(format!("{}", ActivityLevel::Medium), "medium");
        assert_eq!(format!("{}", ActivityLevel::High), "high");
    }

    #[test]
    fn test_activity_level_from_str() {
        assert_eq!(ActivityLevel::from_str("low").unwrap(), ActivityLevel::Low);
        assert_eq!(
            ActivityLevel::from_str("MEDIUM").unwrap(),
            ActivityLevel::Medium
        );
        assert_eq!(ActivityLevel::from_str("High").unwrap(), ActivityLevel::High);
    }

    #[test]
    fn test_activity_level_from_str_invalid() {
        assert!(ActivityLevel::from_str("extreme").is_err());
        assert!(ActivityLevel::from_str("").is_err());
    }

    #[test]
    fn test_bonus_ml() {
        assert_eq!(ActivityLevel::Low.bonus_ml(), 0.0);
        assert_eq!(ActivityLevel::Medium.bonus_ml(), 500.0);
        assert_eq!(ActivityLevel::High.bonus_ml(), 1000.0);
    }

    #[test]
    fn test_activity_level_json() {
        let json = serde_json::to_string(&ActivityLevel::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: ActivityLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, ActivityLevel::Medium);
    }
}
