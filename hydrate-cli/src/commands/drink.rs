use clap::Args;
use hydrate_core::{HydrationStore, KeyValueStorage};

use crate::commands::{format_ml, format_progress};
use crate::store::require_profile;

/// Log a drink in millilitres; negative amounts correct earlier entries
#[derive(Args)]
pub struct DrinkCommand {
    /// Amount in ml
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

impl DrinkCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        require_profile(store)?;
        if !self.amount.is_finite() || !(store.today_intake() + self.amount).is_finite() {
            return Err(format!("Invalid amount '{}'", self.amount).into());
        }

        store.add_water(self.amount);
        tracing::debug!("Logged {} ml, today at {} ml", self.amount, store.today_intake());

        if self.amount >= 0.0 {
            println!("Logged {}.", format_ml(self.amount));
        } else {
            println!("Removed {}.", format_ml(-self.amount));
        }
        println!(
            "Today: {} of {} ({})",
            format_ml(store.today_intake()),
            format_ml(store.daily_goal()),
            format_progress(store.progress())
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrate_core::{today_key, ActivityLevel, Gender, MemoryStorage, Profile};

    async fn onboarded_store() -> HydrationStore<MemoryStorage> {
        let mut store = HydrationStore::open(MemoryStorage::new()).await;
        store.set_profile(Profile::new("Alex", 70.0, Gender::Male, ActivityLevel::Low));
        store
    }

    #[tokio::test]
    async fn test_drink_adds_water() {
        let mut store = onboarded_store().await;

        DrinkCommand { amount: 330.0 }.run(&mut store).unwrap();
        DrinkCommand { amount: 200.0 }.run(&mut store).unwrap();

        assert_eq!(store.today_intake(), 530.0);
        assert_eq!(store.history().get(&today_key()), Some(&530.0));
    }

    #[tokio::test]
    async fn test_negative_drink_clamps() {
        let mut store = onboarded_store().await;

        DrinkCommand { amount: 100.0 }.run(&mut store).unwrap();
        DrinkCommand { amount: -250.0 }.run(&mut store).unwrap();

        assert_eq!(store.today_intake(), 0.0);
    }

    #[tokio::test]
    async fn test_drink_requires_profile() {
        let mut store = HydrationStore::open(MemoryStorage::new()).await;

        assert!(DrinkCommand { amount: 100.0 }.run(&mut store).is_err());
        assert!(store.history().is_empty());
    }

    #[tokio::test]
    async fn test_non_finite_amount_rejected() {
        let mut store = onboarded_store().await;

        assert!(DrinkCommand { amount: f64::NAN }.run(&mut store).is_err());
        assert!(DrinkCommand {
            amount: f64::INFINITY
        }
        .run(&mut store)
        .is_err());
        assert_eq!(store.today_intake(), 0.0);
    }

    #[tokio::test]
    async fn test_overflowing_total_rejected() {
        let mut store = onboarded_store().await;

        DrinkCommand { amount: 1e308 }.run(&mut store).unwrap();
        assert!(DrinkCommand { amount: 1e308 }.run(&mut store).is_err());

        assert_eq!(store.today_intake(), 1e308);
        assert_eq!(store.history().get(&today_key()), Some(&1e308));
    }
}
