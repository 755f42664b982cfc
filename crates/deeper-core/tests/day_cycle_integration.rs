//! End-to-end walk through one tracked day: wake into the morning gate,
//! finish both routines, and check the analytics and persisted record.

use chrono::{DateTime, NaiveDateTime, Utc};
use deeper_core::gate::{self, Mode, Page};
use deeper_core::habits;
use deeper_core::model::{AppData, Habit, ItemKind};
use deeper_core::routine::{self, ItemUpdate};
use deeper_core::{RoutineKind, Store};
use tempfile::TempDir;

fn complete_all(data: &mut AppData, kind: RoutineKind) {
    let ids: Vec<String> = data
        .routines
        .get(kind)
        .items
        .iter()
        .map(|i| i.id.clone())
        .collect();
    for id in ids {
        let item_kind = data.routines.get(kind).item(&id).unwrap().kind;
        let update = match item_kind {
            ItemKind::Counter => ItemUpdate::Count(999),
            ItemKind::Text => ItemUpdate::Text("went well\nlearned things".into()),
            _ => ItemUpdate::Done,
        };
        routine::complete_item(data.routines.get_mut(kind), &id, update).unwrap();
    }
}

#[test]
fn full_day_cycle() {
    let dir = TempDir::new().unwrap();
    let store = Store::with_dir(dir.path());
    let mut data = store.load();

    // 05:00 -- locked out.
    let dawn: NaiveDateTime = "2026-08-20T05:00:00".parse().unwrap();
    assert_eq!(gate::mode_for(&data, dawn), Mode::PreMorning);
    assert_eq!(
        gate::should_redirect(gate::mode_for(&data, dawn), Page::Dashboard),
        Some(Page::Locked)
    );

    // 07:00 -- morning routine required until finalized.
    let morning: NaiveDateTime = "2026-08-20T07:00:00".parse().unwrap();
    assert_eq!(gate::mode_for(&data, morning), Mode::MorningRequired);

    complete_all(&mut data, RoutineKind::Morning);
    let morning_utc: DateTime<Utc> = "2026-08-20T07:20:00Z".parse().unwrap();
    assert!(routine::finalize_routine(
        &mut data,
        RoutineKind::Morning,
        morning_utc
    ));
    assert_eq!(gate::mode_for(&data, morning), Mode::Daytime);

    // 21:30 -- evening routine required, then complete.
    let evening: NaiveDateTime = "2026-08-20T21:30:00".parse().unwrap();
    assert_eq!(gate::mode_for(&data, evening), Mode::EveningRequired);

    complete_all(&mut data, RoutineKind::Evening);
    let evening_utc: DateTime<Utc> = "2026-08-20T21:45:00Z".parse().unwrap();
    assert!(routine::finalize_routine(
        &mut data,
        RoutineKind::Evening,
        evening_utc
    ));
    assert_eq!(gate::mode_for(&data, evening), Mode::EveningComplete);

    // One journal entry synthesized from the reflection items.
    assert_eq!(data.journal_entries.len(), 1);
    assert_eq!(
        data.journal_entries[0].good_things,
        vec!["went well".to_string(), "learned things".to_string()]
    );

    // Both routine habits were tracked exactly once today.
    let today = morning_utc.date_naive();
    for id in [Habit::MORNING_ROUTINE, Habit::EVENING_ROUTINE] {
        let habit = data.habit(id).unwrap();
        assert!(habit.completed_on(today));
        assert_eq!(habits::current_streak(habit, today), 1);
    }

    // Analytics over the whole record.
    let summary = habits::today_summary(&data.habits, today);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.remaining, 3);

    // Record survives a save/load cycle with everything in place.
    store.save(&mut data).unwrap();
    let reloaded = store.load();
    assert_eq!(reloaded, data);
    assert!(reloaded.is_routine_completed_today(RoutineKind::Evening, today));
}
