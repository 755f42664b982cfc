use chrono::{Local, Utc};
use clap::Subcommand;
use deeper_core::model::StudySessionDraft;
use deeper_core::Store;

#[derive(Subcommand)]
pub enum StudyAction {
    /// Log a finished study session
    Log {
        /// Duration in minutes
        #[arg(long)]
        duration: u32,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Total minutes studied today
    Today,
}

pub fn run(action: StudyAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut data = store.load();

    match action {
        StudyAction::Log {
            duration,
            subject,
            notes,
        } => {
            let session = data.log_study_session(
                StudySessionDraft {
                    duration,
                    subject,
                    notes,
                    ..Default::default()
                },
                Utc::now(),
            );
            println!("{}", serde_json::to_string_pretty(session)?);
            store.save(&mut data)?;
        }
        StudyAction::Today => {
            let minutes = data.today_study_time(Local::now().date_naive());
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "minutes": minutes }))?
            );
        }
    }
    Ok(())
}
