//! Input checks that run before a profile is handed to the store.
//!
//! The store accepts whatever it is given, so every command that sets a
//! profile goes through [`ProfileForm::validate`] first.

use hydrate_core::{ActivityLevel, Gender, Profile};

pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Raw profile fields as entered by the user.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub weight: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl ProfileForm {
    /// Form prefilled from an existing profile, for editing.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            weight: profile.weight,
            gender: profile.gender,
            activity: profile.activity,
        }
    }

    /// Trims the name and checks the weight range.
    pub fn validate(self) -> Result<Profile, ProfileFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileFormError::MissingName);
        }

        if !self.weight.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight) {
            return Err(ProfileFormError::InvalidWeight(self.weight));
        }

        Ok(Profile::new(name, self.weight, self.gender, self.activity))
    }
}

#[derive(Debug, PartialEq)]
pub enum ProfileFormError {
    MissingName,
    InvalidWeight(f64),
}

impl std::fmt::Display for ProfileFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileFormError::MissingName => write!(f, "Missing name. Please enter your name."),
            ProfileFormError::InvalidWeight(w) => write!(
                f,
                "Invalid weight '{}'. Please enter a valid weight ({} - {} kg).",
                w, MIN_WEIGHT_KG, MAX_WEIGHT_KG
            ),
        }
    }
}

impl std::error::Error for ProfileFormError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, weight: f64) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            weight,
            gender: Gender::Other,
            activity: ActivityLevel::Medium,
        }
    }

    #[test]
    fn test_valid_form_trims_name() {
        let profile = form("  Alex ", 70.0).validate().unwrap();

        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.gender, Gender::Other);
        assert_eq!(profile.activity, ActivityLevel::Medium);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            form("   ", 70.0).validate().unwrap_err(),
            ProfileFormError::MissingName
        );
        assert_eq!(
            form("", 70.0).validate().unwrap_err(),
            ProfileFormError::MissingName
        );
    }

    #[test]
    fn test_weight_bounds_inclusive() {
        assert!(form("Alex", 30.0).validate().is_ok());
        assert!(form("Alex", 300.0).validate().is_ok());
        assert!(form("Alex", 29.9).validate().is_err());
        assert!(form("Alex", 300.1).validate().is_err());
        assert!(form("Alex", 0.0).validate().is_err());
        assert!(form("Alex", f64::NAN).validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = form("", 70.0).validate().unwrap_err();
        assert!(err.to_string().contains("Please enter your name."));

        let err = form("Alex", 12.0).validate().unwrap_err();
        assert!(err.to_string().contains("30 - 300 kg"));
    }

    #[test]
    fn test_from_profile_roundtrip() {
        let profile = Profile::new("Sam", 64.5, Gender::Female, ActivityLevel::High);
        let validated = ProfileForm::from_profile(&profile).validate().unwrap();

        assert_eq!(validated, profile);
    }
}
