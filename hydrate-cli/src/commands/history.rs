use chrono::{NaiveDate, Utc};
use clap::Args;
use hydrate_core::{HydrationStore, KeyValueStorage, DATE_KEY_FORMAT};

use crate::commands::{format_ml, OutputFormat};

/// View intake history
#[derive(Args)]
pub struct HistoryCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Start date (YYYY-MM-DD), defaults to a 7-day window ending at the end date
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<String>,
}

impl HistoryCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (from_date, to_date) = self.date_range(Utc::now().date_naive())?;
        let entries = store.history_range(from_date, to_date);

        if entries.is_empty() {
            println!("No history found for {} to {}", from_date, to_date);
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .iter()
                    .map(|(date, ml)| (date.to_string(), serde_json::json!(ml)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            }
            OutputFormat::Text => {
                let goal = store.daily_goal();
                println!("{:12} {:>10}", "Date", "Intake");
                println!("{}", "-".repeat(30));
                for (date, ml) in &entries {
                    let marker = if goal > 0.0 && *ml >= goal { "  goal met" } else { "" };
                    println!("{:12} {:>10}{}", date.to_string(), format_ml(*ml), marker);
                }

                let total: f64 = entries.iter().map(|(_, ml)| ml).sum();
                println!();
                println!(
                    "{} day(s), average {}",
                    entries.len(),
                    format_ml(total / entries.len() as f64)
                );
            }
        }

        Ok(())
    }

    /// Resolves `--from`/`--to` relative to `today`.
    fn date_range(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), String> {
        let to_date = match &self.to {
            Some(d) => parse_date(d)?,
            None => today,
        };
        let from_date = match &self.from {
            Some(d) => parse_date(d)?,
            None => to_date - chrono::Duration::days(6),
        };
        Ok((from_date, to_date))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", s))
}
