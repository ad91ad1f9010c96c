use clap::{Args, Subcommand};
use hydrate_core::{ActivityLevel, Gender, HydrationStore, KeyValueStorage};

use crate::commands::{format_ml, OutputFormat};
use crate::models::ProfileForm;
use crate::store::require_profile;

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show the current profile and daily goal
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update the profile; unspecified fields keep their current value
    Edit {
        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New body weight in kg (30 - 300)
        #[arg(long)]
        weight: Option<f64>,

        /// New gender (male, female, other)
        #[arg(long)]
        gender: Option<Gender>,

        /// New activity level (low, medium, high)
        #[arg(long)]
        activity: Option<ActivityLevel>,
    },
}

impl ProfileCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProfileSubcommand::Show { format } => show_profile(store, format),
            ProfileSubcommand::Edit {
                name,
                weight,
                gender,
                activity,
            } => {
                let mut form = ProfileForm::from_profile(require_profile(store)?);
                if let Some(name) = name {
                    form.name = name.clone();
                }
                if let Some(weight) = weight {
                    form.weight = *weight;
                }
                if let Some(gender) = gender {
                    form.gender = *gender;
                }
                if let Some(activity) = activity {
                    form.activity = *activity;
                }

                let profile = form.validate()?;
                store.set_profile(profile);

                println!("Your profile has been updated.");
                println!("Daily goal: {}", format_ml(store.daily_goal()));
                Ok(())
            }
        }
    }
}

fn show_profile<S: KeyValueStorage>(
    store: &HydrationStore<S>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = require_profile(store)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "profile": profile,
                "dailyGoal": store.daily_goal(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print!("{}", profile);
            println!("Goal:     {}", format_ml(store.daily_goal()));
        }
    }

    Ok(())
}
