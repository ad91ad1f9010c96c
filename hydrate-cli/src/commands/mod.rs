mod config_cmd;
mod drink;
mod history;
mod onboard;
mod profile;
mod state_cmd;
mod today;

pub use config_cmd::ConfigCommand;
pub use drink::DrinkCommand;
pub use history::HistoryCommand;
pub use onboard::OnboardCommand;
pub use profile::ProfileCommand;
pub use state_cmd::StateCommand;
pub use today::{ResetCommand, TodayCommand};

use clap::ValueEnum;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formats a millilitre amount for display: "2950 ml"
pub(crate) fn format_ml(ml: f64) -> String {
    format!("{:.0} ml", ml)
}

/// Formats a goal fraction as a percentage: "42%"
pub(crate) fn format_progress(progress: f64) -> String {
    format!("{:.0}%", progress * 100.0)
}
