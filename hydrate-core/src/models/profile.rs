use serde::{Deserialize, Serialize};
use std::fmt;

use super::activity_level::ActivityLevel;
use super::gender::Gender;

/// The user-entered attributes that drive the daily goal.
///
/// A profile is replaced as a whole; there is no partial update. The store
/// accepts any profile it is given, so range checks belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Body weight in kilograms.
    pub weight: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        gender: Gender,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            gender,
            activity,
        }
    }

    /// Daily hydration goal in millilitres for this profile.
    pub fn daily_goal(&self) -> f64 {
        calculate_daily_goal(self.weight, self.activity)
    }
}

/// `weight * 35` ml plus the activity bonus.
pub fn calculate_daily_goal(weight: f64, activity: ActivityLevel) -> f64 {
    weight * 35.0 + activity.bonus_ml()
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profile: {}", self.name)?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f, "Weight:   {} kg", self.weight)?;
        writeln!(f, "Gender:   {}", self.gender)?;
        writeln!(f, "Activity: {}", self.activity)?;
        Ok(())
    }
}
