use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use deeper_core::habits;
use deeper_core::Store;
use rand::SeedableRng;

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with today's completion state
    List,
    /// Record a completion
    Track {
        /// Habit id
        id: String,
        /// Completion date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Per-habit statistics
    Stats { id: String },
    /// Completion strip over the rolling window
    Show {
        id: String,
        #[arg(long, default_value = "21")]
        days: u32,
    },
    /// Predicted chance of completing tomorrow
    Predict { id: String },
    /// Motivational message
    Message {
        id: String,
        /// Seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Full analytics report
    Report,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut data = store.load();
    let today = Local::now().date_naive();

    match action {
        HabitAction::List => {
            let summary = habits::today_summary(&data.habits, today);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        HabitAction::Track { id, date } => {
            let date = date.unwrap_or(today);
            if !data.track_habit(&id, date) {
                // Unknown habit or already tracked that day.
                if data.habit(&id).is_none() {
                    return Err(format!("unknown habit '{id}'").into());
                }
            }
            store.save(&mut data)?;
            let habit = data.habit(&id).expect("checked above");
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::Stats { id } => {
            let habit = data
                .habit(&id)
                .ok_or_else(|| format!("unknown habit '{id}'"))?;
            let stats = habits::stats(habit, today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        HabitAction::Show { id, days } => {
            let habit = data
                .habit(&id)
                .ok_or_else(|| format!("unknown habit '{id}'"))?;
            println!("{}: {}", habit.name, habits::visualize(habit, today, days));
        }
        HabitAction::Predict { id } => {
            let habit = data
                .habit(&id)
                .ok_or_else(|| format!("unknown habit '{id}'"))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "habit": habit.id,
                    "tomorrow": habits::predict_tomorrow(habit, today),
                }))?
            );
        }
        HabitAction::Message { id, seed } => {
            let habit = data
                .habit(&id)
                .ok_or_else(|| format!("unknown habit '{id}'"))?;
            let message = match seed {
                Some(seed) => {
                    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
                    habits::pick_message(habit, today, &mut rng)
                }
                None => habits::pick_message(habit, today, &mut rand::thread_rng()),
            };
            println!("{message}");
        }
        HabitAction::Report => {
            let report = habits::report(&data.habits, Utc::now());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
