use chrono::Local;
use clap::Subcommand;
use deeper_core::gate::{self, Page};
use deeper_core::Store;

#[derive(Subcommand)]
pub enum GateAction {
    /// Print the current mode
    Mode,
    /// Check whether a page must redirect
    Redirect {
        /// Current page (locked, morning-routine, evening-routine,
        /// evening-done, dashboard)
        page: String,
    },
    /// Hours and minutes until a trigger time
    Until {
        /// Target time as HH:MM
        time: String,
    },
    /// Time-of-day greeting
    Greeting,
}

pub fn run(action: GateAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let data = store.load();
    let now = Local::now().naive_local();

    match action {
        GateAction::Mode => {
            let mode = gate::mode_for(&data, now);
            println!("{}", serde_json::to_string_pretty(&mode)?);
        }
        GateAction::Redirect { page } => {
            let page = Page::parse(&page).ok_or_else(|| format!("unknown page '{page}'"))?;
            let mode = gate::mode_for(&data, now);
            let target = gate::should_redirect(mode, page);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "mode": mode,
                    "redirect": target,
                }))?
            );
        }
        GateAction::Until { time } => {
            let (hours, minutes) = gate::time_until(now, &time)
                .ok_or_else(|| format!("invalid time '{time}': expected HH:MM"))?;
            println!("{}", gate::format_time_remaining(hours, minutes));
        }
        GateAction::Greeting => {
            use chrono::Timelike;
            println!("{}", gate::greeting(now.time().hour()));
        }
    }
    Ok(())
}
