use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit the user prefers to see amounts in.
///
/// Only a label: stored intake is always millilitres and nothing is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Ml,
    Oz,
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeUnit::Ml => write!(f, "ml"),
            VolumeUnit::Oz => write!(f, "oz"),
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml" => Ok(VolumeUnit::Ml),
            "oz" => Ok(VolumeUnit::Oz),
            _ => Err(format!("Invalid unit '{}'. Valid options: ml, oz", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_unit_display() {
        assert_eq!(format!("{}", VolumeUnit::Ml), "ml");
        assert_eq!(format!("{}", VolumeUnit::Oz), "oz");
    }

    #[test]
    fn test_volume_unit_from_str() {
        assert_eq!(VolumeUnit::from_str("ML").unwrap(), VolumeUnit::Ml);
        assert_eq!(VolumeUnit::from_str("oz").unwrap(), VolumeUnit::Oz);
        assert!(VolumeUnit::from_str("cups").is_err());
    }

    #[test]
    fn test_default_is_ml() {
        assert_eq!(VolumeUnit::default(), VolumeUnit::Ml);
    }
}
