use clap::Args;
use hydrate_core::{ActivityLevel, Gender, HydrationStore, KeyValueStorage};

use crate::commands::format_ml;
use crate::models::ProfileForm;

/// Create the profile and daily goal
#[derive(Args)]
pub struct OnboardCommand {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Body weight in kg (30 - 300)
    #[arg(long)]
    pub weight: f64,

    /// Gender (male, female, other)
    #[arg(long, default_value = "other")]
    pub gender: Gender,

    /// Activity level (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub activity: ActivityLevel,
}

impl OnboardCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if store.profile().is_some() {
            return Err(
                "Already onboarded. Use 'hydrate profile edit' to change your profile.".into(),
            );
        }

        let profile = ProfileForm {
            name: self.name.clone(),
            weight: self.weight,
            gender: self.gender,
            activity: self.activity,
        }
        .validate()?;

        let name = profile.name.clone();
        store.set_profile(profile);
        tracing::info!("Onboarded '{}'", name);

        println!("Welcome, {}!", name);
        println!("Your daily goal: {}", format_ml(store.daily_goal()));

        Ok(())
    }
}
