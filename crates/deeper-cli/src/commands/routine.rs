use chrono::Utc;
use clap::Subcommand;
use deeper_core::routine::{self, ItemUpdate};
use deeper_core::Store;

use super::parse_routine_kind;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Print a routine's items and completion state
    Show {
        /// morning or evening
        routine: String,
    },
    /// Completion progress
    Progress {
        routine: String,
    },
    /// Check off an item
    Check {
        routine: String,
        /// Item id
        item: String,
    },
    /// Set a counter item's progress
    Count {
        routine: String,
        item: String,
        value: u32,
    },
    /// Set a text item's value
    Text {
        routine: String,
        item: String,
        value: String,
    },
    /// Finalize a fully completed routine
    Finalize {
        routine: String,
    },
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut data = store.load();

    match action {
        RoutineAction::Show { routine } => {
            let kind = parse_routine_kind(&routine)?;
            println!(
                "{}",
                serde_json::to_string_pretty(data.routines.get(kind))?
            );
        }
        RoutineAction::Progress { routine } => {
            let kind = parse_routine_kind(&routine)?;
            let progress = routine::progress(data.routines.get(kind));
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        RoutineAction::Check { routine, item } => {
            let kind = parse_routine_kind(&routine)?;
            let item =
                routine::complete_item(data.routines.get_mut(kind), &item, ItemUpdate::Done)?;
            println!("{}", serde_json::to_string_pretty(item)?);
            store.save(&mut data)?;
        }
        RoutineAction::Count {
            routine,
            item,
            value,
        } => {
            let kind = parse_routine_kind(&routine)?;
            let item = routine::complete_item(
                data.routines.get_mut(kind),
                &item,
                ItemUpdate::Count(value),
            )?;
            println!("{}", serde_json::to_string_pretty(item)?);
            store.save(&mut data)?;
        }
        RoutineAction::Text {
            routine,
            item,
            value,
        } => {
            let kind = parse_routine_kind(&routine)?;
            let item = routine::complete_item(
                data.routines.get_mut(kind),
                &item,
                ItemUpdate::Text(value),
            )?;
            println!("{}", serde_json::to_string_pretty(item)?);
            store.save(&mut data)?;
        }
        RoutineAction::Finalize { routine } => {
            let kind = parse_routine_kind(&routine)?;
            let finalized = routine::finalize_routine(&mut data, kind, Utc::now());
            if finalized {
                store.save(&mut data)?;
                println!("{{\"finalized\": true}}");
            } else {
                println!("{{\"finalized\": false}}");
            }
        }
    }
    Ok(())
}
