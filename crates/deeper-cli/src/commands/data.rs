use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use deeper_core::Store;

#[derive(Subcommand)]
pub enum DataAction {
    /// Write the record to a dated JSON file
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Replace the record with an exported file
    Import { path: PathBuf },
    /// Restore the record from the automatic backup copy
    Restore,
    /// Delete all data (asks twice)
    Reset {
        /// Skip the interactive prompts
        #[arg(long)]
        yes: bool,
    },
}

/// Ask on stderr, read y/N from stdin.
fn confirm(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    eprint!("{prompt} [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        DataAction::Export { dir } => {
            let data = store.load();
            let path = store.export(&data, &dir, Utc::now())?;
            println!("{}", path.display());
        }
        DataAction::Import { path } => {
            let mut imported = store.import(&path)?;
            store.save(&mut imported)?;
            println!("{{\"imported\": true}}");
        }
        DataAction::Restore => match store.restore_backup() {
            Some(mut data) => {
                store.save(&mut data)?;
                println!("{{\"restored\": true}}");
            }
            None => return Err("no usable backup found".into()),
        },
        DataAction::Reset { yes } => {
            let confirmed = yes
                || (confirm("Are you sure you want to reset ALL data? This cannot be undone.")?
                    && confirm("Really reset everything? Your data will be permanently deleted.")?);
            let cleared = store.reset(confirmed)?;
            println!("{{\"reset\": {cleared}}}");
        }
    }
    Ok(())
}
