use clap::{Args, Subcommand};
use hydrate_core::{HydrationStore, KeyValueStorage, StatePatch};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct StateCommand {
    #[command(subcommand)]
    pub command: StateSubcommand,
}

#[derive(Subcommand)]
pub enum StateSubcommand {
    /// Write the stored record as JSON
    Export {
        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Merge a JSON record (full or partial) into the current state
    Import {
        /// File to read
        path: PathBuf,
    },
}

impl StateCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            StateSubcommand::Export { output } => {
                let json = serde_json::to_string_pretty(store.state())?;
                match output {
                    Some(path) => {
                        fs::write(path, json)?;
                        println!("Exported state to {}", path.display());
                    }
                    None => println!("{}", json),
                }
                Ok(())
            }
            StateSubcommand::Import { path } => {
                let patch = read_patch(path)?;
                store.restore_state(patch);
                println!("Imported state from {}", path.display());
                Ok(())
            }
        }
    }
}

fn read_patch(path: &Path) -> Result<StatePatch, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let patch: StatePatch = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;

    if patch.is_empty() {
        return Err(format!("No state fields found in '{}'", path.display()).into());
    }
    Ok(patch)
}
