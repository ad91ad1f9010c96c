use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod store;

use commands::{
    ConfigCommand, DrinkCommand, HistoryCommand, OnboardCommand, ProfileCommand, ResetCommand,
    StateCommand, TodayCommand,
};
use config::Config;
use store::{open_store, Store};

#[derive(Parser)]
#[command(name = "hydrate")]
#[command(version)]
#[command(about = "Track your daily water intake", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your profile and daily goal
    Onboard(OnboardCommand),

    /// View or edit your profile
    Profile(ProfileCommand),

    /// Log a drink
    Drink(DrinkCommand),

    /// Show today's progress
    Today(TodayCommand),

    /// Reset today's intake
    Reset(ResetCommand),

    /// View intake history
    History(HistoryCommand),

    /// Export or import the stored state
    State(StateCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `HYDRATE_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HYDRATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cli_config_path = cli.config.clone();
    let config = Config::load(cli.config)?;

    let Some(command) = cli.command else {
        println!("Use --help to see available commands");
        return Ok(());
    };

    if let Commands::Config(cmd) = &command {
        return cmd.run(&config, cli_config_path);
    }

    let mut store = open_store(&config).await;
    let result = execute_command(&command, &mut store);

    store.flush().await;

    result
}

fn execute_command(
    command: &Commands,
    store: &mut Store,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Onboard(cmd) => cmd.run(store),
        Commands::Profile(cmd) => cmd.run(store),
        Commands::Drink(cmd) => cmd.run(store),
        Commands::Today(cmd) => cmd.run(store),
        Commands::Reset(cmd) => cmd.run(store),
        Commands::History(cmd) => cmd.run(store),
        Commands::State(cmd) => cmd.run(store),
        // Handled in run() without opening the store
        Commands::Config(_) => Ok(()),
    }
}
