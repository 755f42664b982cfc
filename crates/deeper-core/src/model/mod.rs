//! The persisted data model.
//!
//! Everything the app knows lives in one [`AppData`] record that is loaded
//! and saved wholesale by [`crate::storage::Store`]. Field names serialize
//! in camelCase so the on-disk JSON stays compatible with records exported
//! by earlier versions of the app.

mod habit;
mod journal;
mod routine;

pub use habit::Habit;
pub use journal::{JournalDraft, JournalEntry, StudySession, StudySessionDraft, Todo};
pub use routine::{ItemKind, Routine, RoutineItem, RoutineKind};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DATA_VERSION: &str = "1.0";

/// User-configurable trigger times, stored as `"HH:MM"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_morning_time")]
    pub morning_time: String,
    #[serde(default = "default_evening_time")]
    pub evening_time: String,
}

fn default_morning_time() -> String {
    "06:30".into()
}

fn default_evening_time() -> String {
    "21:00".into()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            morning_time: default_morning_time(),
            evening_time: default_evening_time(),
        }
    }
}

/// Parse an `"HH:MM"` string into minutes since midnight.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

impl Preferences {
    /// Morning trigger in minutes since midnight. Falls back to 06:30 if the
    /// stored string is malformed, matching load-degradation behavior.
    pub fn morning_minutes(&self) -> u32 {
        parse_hhmm(&self.morning_time).unwrap_or(6 * 60 + 30)
    }

    /// Evening trigger in minutes since midnight. Falls back to 21:00.
    pub fn evening_minutes(&self) -> u32 {
        parse_hhmm(&self.evening_time).unwrap_or(21 * 60)
    }
}

/// The two daily routines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routines {
    #[serde(default = "Routine::default_morning")]
    pub morning: Routine,
    #[serde(default = "Routine::default_evening")]
    pub evening: Routine,
}

impl Default for Routines {
    fn default() -> Self {
        Self {
            morning: Routine::default_morning(),
            evening: Routine::default_evening(),
        }
    }
}

impl Routines {
    pub fn get(&self, kind: RoutineKind) -> &Routine {
        match kind {
            RoutineKind::Morning => &self.morning,
            RoutineKind::Evening => &self.evening,
        }
    }

    pub fn get_mut(&mut self, kind: RoutineKind) -> &mut Routine {
        match kind {
            RoutineKind::Morning => &mut self.morning,
            RoutineKind::Evening => &mut self.evening,
        }
    }
}

/// Record metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default = "default_version")]
    pub version: String,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

fn default_version() -> String {
    DATA_VERSION.into()
}

impl Default for Meta {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            version: DATA_VERSION.into(),
            created: now,
            last_updated: now,
        }
    }
}

/// Root record. One logical writer at a time; mutated in place by routine
/// and habit operations, persisted wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub routines: Routines,
    #[serde(default = "Habit::default_set")]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub meta: Meta,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            preferences: Preferences::default(),
            routines: Routines::default(),
            habits: Habit::default_set(),
            study_sessions: Vec::new(),
            journal_entries: Vec::new(),
            todos: Vec::new(),
            meta: Meta::default(),
        }
    }
}

impl AppData {
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Whether the given routine was finalized today.
    pub fn is_routine_completed_today(&self, kind: RoutineKind, today: NaiveDate) -> bool {
        self.routines.get(kind).last_completed == Some(today)
    }

    /// Record a habit completion. Returns true if the date was newly added.
    pub fn track_habit(&mut self, habit_id: &str, date: NaiveDate) -> bool {
        match self.habit_mut(habit_id) {
            Some(habit) => habit.insert_date(date),
            None => false,
        }
    }

    /// Append a study session and track the `study-time` habit.
    pub fn log_study_session(&mut self, draft: StudySessionDraft, now: DateTime<Utc>) -> &StudySession {
        let session = StudySession::from_draft(draft, now);
        self.study_sessions.push(session);
        self.track_habit(Habit::STUDY_TIME, now.date_naive());
        self.study_sessions.last().expect("just pushed")
    }

    /// Append a journal entry. Entries are never mutated after creation.
    pub fn add_journal_entry(&mut self, draft: JournalDraft, now: DateTime<Utc>) -> &JournalEntry {
        let entry = JournalEntry::from_draft(draft, now);
        self.journal_entries.push(entry);
        self.journal_entries.last().expect("just pushed")
    }

    /// Total study minutes logged in the inclusive date range.
    pub fn study_time_for_range(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        self.study_sessions
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .map(|s| s.duration)
            .sum()
    }

    /// Total study minutes logged today.
    pub fn today_study_time(&self, today: NaiveDate) -> u32 {
        self.study_time_for_range(today, today)
    }

    /// Append a to-do item.
    pub fn add_todo(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> &Todo {
        self.todos.push(Todo::new(text, now));
        self.todos.last().expect("just pushed")
    }

    /// Flip a to-do's done flag. Returns the new state, or `None` for an
    /// unknown id.
    pub fn toggle_todo(&mut self, id: i64) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.done = !todo.done;
        Some(todo.done)
    }
}
