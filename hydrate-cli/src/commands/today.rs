use clap::Args;
use hydrate_core::{HydrationStore, KeyValueStorage};

use crate::commands::{format_ml, format_progress, OutputFormat};
use crate::store::require_profile;

/// Show today's intake against the daily goal
#[derive(Args)]
pub struct TodayCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TodayCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let profile = require_profile(store)?;

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "todayIntake": store.today_intake(),
                    "dailyGoal": store.daily_goal(),
                    "remaining": store.remaining(),
                    "progress": store.progress(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => {
                println!("Hi {}!", profile.name);
                println!();
                println!("  Intake:    {}", format_ml(store.today_intake()));
                println!("  Goal:      {}", format_ml(store.daily_goal()));
                println!("  Remaining: {}", format_ml(store.remaining()));
                println!("  Progress:  {}", format_progress(store.progress()));
                if store.remaining() == 0.0 {
                    println!();
                    println!("Goal reached for today.");
                }
            }
        }

        Ok(())
    }
}

/// Reset today's intake to zero
#[derive(Args)]
pub struct ResetCommand {}

impl ResetCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        require_profile(store)?;
        store.reset_today();
        println!("Today's intake has been reset.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrate_core::{today_key, ActivityLevel, Gender, MemoryStorage, Profile};

    #[tokio::test]
    async fn test_reset_zeroes_intake_only() {
        let mut store = HydrationStore::open(MemoryStorage::new()).await;
        store.set_profile(Profile::new("Alex", 70.0, Gender::Male, ActivityLevel::Medium));
        store.add_water(600.0);

        ResetCommand {}.run(&mut store).unwrap();

        assert_eq!(store.today_intake(), 0.0);
        assert_eq!(store.history().get(&today_key()), Some(&600.0));
    }

    #[tokio::test]
    async fn test_today_requires_profile() {
        let store = HydrationStore::open(MemoryStorage::new()).await;
        let command = TodayCommand {
            format: OutputFormat::Text,
        };

        assert!(command.run(&store).is_err());
    }
}
