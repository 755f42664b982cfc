use clap::Subcommand;
use deeper_core::model::JournalDraft;
use deeper_core::Store;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Print journal entries, newest first
    List {
        /// Limit the number of entries
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Add a free-form entry
    Add {
        #[arg(long, default_value = "")]
        notes: String,
        /// Good things, one per flag
        #[arg(long = "good")]
        good_things: Vec<String>,
        #[arg(long = "lesson")]
        lessons: Vec<String>,
        #[arg(long = "improvement")]
        improvements: Vec<String>,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut data = store.load();

    match action {
        JournalAction::List { limit } => {
            let entries: Vec<_> = data.journal_entries.iter().rev().take(limit).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        JournalAction::Add {
            notes,
            good_things,
            lessons,
            improvements,
        } => {
            let entry = data.add_journal_entry(
                JournalDraft {
                    good_things,
                    lessons,
                    improvements,
                    notes,
                },
                chrono::Utc::now(),
            );
            println!("{}", serde_json::to_string_pretty(entry)?);
            store.save(&mut data)?;
        }
    }
    Ok(())
}
