//! Routine item completion and end-of-routine finalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{AppData, ItemKind, JournalDraft, Routine, RoutineItem, RoutineKind};

/// Ids of the evening text items that feed the synthesized journal entry.
const GOOD_THINGS: &str = "good-things";
const LESSONS: &str = "lessons";
const IMPROVEMENTS: &str = "improvements";

/// How far through a routine the user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

pub fn progress(routine: &Routine) -> RoutineProgress {
    let total = routine.items.len();
    let completed = routine.items.iter().filter(|i| i.completed).count();
    let percentage = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };
    RoutineProgress {
        completed,
        total,
        percentage,
    }
}

/// Input for [`complete_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUpdate {
    /// Plain check-off (auto, timer, manual, redirect, text).
    Done,
    /// New progress value for a counter item.
    Count(u32),
    /// New value for a text item; checks the item off as well.
    Text(String),
}

/// Apply an update to a routine item.
///
/// Non-counter kinds are marked completed unconditionally. A counter is
/// completed only once `current >= target`; it cannot be checked off
/// directly. A text item's completion does not depend on what was typed.
pub fn complete_item<'a>(
    routine: &'a mut Routine,
    item_id: &str,
    update: ItemUpdate,
) -> Result<&'a RoutineItem, CoreError> {
    let item = routine
        .item_mut(item_id)
        .ok_or_else(|| CoreError::UnknownItem(item_id.to_string()))?;

    match (&update, item.kind) {
        (ItemUpdate::Count(n), ItemKind::Counter) => {
            item.current = Some(*n);
            item.completed = *n >= item.target.unwrap_or(0);
        }
        (ItemUpdate::Text(value), ItemKind::Text) => {
            item.value = Some(value.clone());
            item.completed = true;
        }
        (ItemUpdate::Done, ItemKind::Counter) => {
            return Err(CoreError::InvalidItemValue {
                id: item_id.to_string(),
                message: "counter items complete through their count".into(),
            });
        }
        (ItemUpdate::Done, _) => {
            item.completed = true;
        }
        (ItemUpdate::Count(_), kind) => {
            return Err(CoreError::InvalidItemValue {
                id: item_id.to_string(),
                message: format!("count given to {kind:?} item"),
            });
        }
        (ItemUpdate::Text(_), kind) => {
            return Err(CoreError::InvalidItemValue {
                id: item_id.to_string(),
                message: format!("text given to {kind:?} item"),
            });
        }
    }

    Ok(routine.item(item_id).expect("item looked up above"))
}

pub fn is_fully_completed(routine: &Routine) -> bool {
    routine.items.iter().all(|i| i.completed)
}

/// Finalize a fully completed routine.
///
/// For the evening routine this first synthesizes a journal entry from the
/// three reflection text items. It then stamps `last_completed`, records
/// today in the routine's tracking habit (idempotent per day), and resets
/// every item for the next day.
///
/// Returns false without touching anything if any item is incomplete.
pub fn finalize_routine(data: &mut AppData, kind: RoutineKind, now: DateTime<Utc>) -> bool {
    if !is_fully_completed(data.routines.get(kind)) {
        return false;
    }
    let today = now.date_naive();

    if kind == RoutineKind::Evening {
        let routine = data.routines.get(kind);
        let draft = JournalDraft {
            good_things: lines_of(routine, GOOD_THINGS),
            lessons: lines_of(routine, LESSONS),
            improvements: lines_of(routine, IMPROVEMENTS),
            notes: String::new(),
        };
        data.add_journal_entry(draft, now);
    }

    data.routines.get_mut(kind).last_completed = Some(today);
    data.track_habit(kind.habit_id(), today);
    reset_items(data.routines.get_mut(kind));
    true
}

/// Text item value split into non-blank lines. Lines keep their original
/// text; only blank ones are dropped.
fn lines_of(routine: &Routine, item_id: &str) -> Vec<String> {
    routine
        .item(item_id)
        .and_then(|i| i.value.as_deref())
        .map(split_lines)
        .unwrap_or_default()
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn reset_items(routine: &mut Routine) {
    for item in &mut routine.items {
        item.completed = false;
        if item.kind == ItemKind::Counter {
            item.current = Some(0);
        }
        if item.kind == ItemKind::Text {
            item.value = Some(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn evening_done(data: &mut AppData) {
        let ids: Vec<String> = data
            .routines
            .evening
            .items
            .iter()
            .map(|i| i.id.clone())
            .collect();
        for id in ids {
            let kind = data.routines.evening.item(&id).unwrap().kind;
            let update = match kind {
                ItemKind::Text => ItemUpdate::Text(format!("entry for {id}\n\nsecond line")),
                ItemKind::Counter => ItemUpdate::Count(100),
                _ => ItemUpdate::Done,
            };
            complete_item(&mut data.routines.evening, &id, update).unwrap();
        }
    }

    #[test]
    fn manual_item_checks_off() {
        let mut data = AppData::default();
        let item =
            complete_item(&mut data.routines.morning, "water", ItemUpdate::Done).unwrap();
        assert!(item.completed);
    }

    #[test]
    fn counter_completes_only_at_target() {
        let mut data = AppData::default();
        let item = complete_item(
            &mut data.routines.morning,
            "squats",
            ItemUpdate::Count(30),
        )
        .unwrap();
        assert!(!item.completed);
        assert_eq!(item.current, Some(30));

        let item = complete_item(
            &mut data.routines.morning,
            "squats",
            ItemUpdate::Count(50),
        )
        .unwrap();
        assert!(item.completed);
    }

    #[test]
    fn counter_rejects_plain_checkoff() {
        let mut data = AppData::default();
        let err = complete_item(&mut data.routines.morning, "squats", ItemUpdate::Done)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemValue { .. }));
    }

    #[test]
    fn unknown_item_is_an_error() {
        let mut data = AppData::default();
        let err = complete_item(&mut data.routines.morning, "nope", ItemUpdate::Done)
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(_)));
    }

    #[test]
    fn text_item_stores_value() {
        let mut data = AppData::default();
        let item = complete_item(
            &mut data.routines.evening,
            "good-things",
            ItemUpdate::Text("coffee\nsunshine".into()),
        )
        .unwrap();
        assert!(item.completed);
        assert_eq!(item.value.as_deref(), Some("coffee\nsunshine"));
    }

    #[test]
    fn progress_counts_and_rounds() {
        let mut data = AppData::default();
        assert_eq!(progress(&data.routines.evening).percentage, 0);
        complete_item(&mut data.routines.evening, "lights", ItemUpdate::Done).unwrap();
        let p = progress(&data.routines.evening);
        assert_eq!(p.completed, 1);
        assert_eq!(p.total, 7);
        assert_eq!(p.percentage, 14); // round(1/7 * 100)
    }

    #[test]
    fn finalize_is_noop_when_incomplete() {
        let mut data = AppData::default();
        assert!(!finalize_routine(&mut data, RoutineKind::Evening, Utc::now()));
        assert!(data.journal_entries.is_empty());
        assert!(data.routines.evening.last_completed.is_none());
    }

    #[test]
    fn evening_finalize_synthesizes_journal_entry_and_resets() {
        let mut data = AppData::default();
        evening_done(&mut data);
        let now: DateTime<Utc> = "2026-06-01T21:30:00Z".parse().unwrap();
        let today: NaiveDate = "2026-06-01".parse().unwrap();

        assert!(finalize_routine(&mut data, RoutineKind::Evening, now));

        assert_eq!(data.journal_entries.len(), 1);
        let entry = &data.journal_entries[0];
        // Blank lines dropped, non-blank kept verbatim.
        assert_eq!(
            entry.good_things,
            vec!["entry for good-things".to_string(), "second line".to_string()]
        );
        assert_eq!(data.routines.evening.last_completed, Some(today));
        assert!(data
            .habit("evening-routine")
            .unwrap()
            .completed_on(today));
        // Every item reset for tomorrow.
        for item in &data.routines.evening.items {
            assert!(!item.completed);
            if item.kind == ItemKind::Text {
                assert_eq!(item.value.as_deref(), Some(""));
            }
        }
    }

    #[test]
    fn finalize_twice_same_day_tracks_habit_once() {
        let mut data = AppData::default();
        let now: DateTime<Utc> = "2026-06-01T21:30:00Z".parse().unwrap();

        evening_done(&mut data);
        assert!(finalize_routine(&mut data, RoutineKind::Evening, now));
        evening_done(&mut data);
        assert!(finalize_routine(&mut data, RoutineKind::Evening, now));

        let habit = data.habit("evening-routine").unwrap();
        assert_eq!(habit.dates.len(), 1);
        // Finalizing again does create another journal entry; only the habit
        // date insert is idempotent.
        assert_eq!(data.journal_entries.len(), 2);
    }

    #[test]
    fn morning_finalize_does_not_journal() {
        let mut data = AppData::default();
        let ids: Vec<String> = data
            .routines
            .morning
            .items
            .iter()
            .map(|i| i.id.clone())
            .collect();
        for id in ids {
            let kind = data.routines.morning.item(&id).unwrap().kind;
            let update = match kind {
                ItemKind::Counter => ItemUpdate::Count(50),
                _ => ItemUpdate::Done,
            };
            complete_item(&mut data.routines.morning, &id, update).unwrap();
        }
        let now = Utc::now();
        assert!(finalize_routine(&mut data, RoutineKind::Morning, now));
        assert!(data.journal_entries.is_empty());
        assert!(data
            .habit("morning-routine")
            .unwrap()
            .completed_on(now.date_naive()));
    }
}
