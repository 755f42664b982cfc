//! Append-only records: journal entries, study sessions, and todos.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An evening reflection entry. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Millisecond epoch at creation time.
    pub id: i64,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub good_things: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Content for a journal entry before id/date/timestamp are assigned.
#[derive(Debug, Clone, Default)]
pub struct JournalDraft {
    pub good_things: Vec<String>,
    pub lessons: Vec<String>,
    pub improvements: Vec<String>,
    pub notes: String,
}

impl JournalEntry {
    pub fn from_draft(draft: JournalDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            date: now.date_naive(),
            timestamp: now,
            good_things: draft.good_things,
            lessons: draft.lessons,
            improvements: draft.improvements,
            notes: draft.notes,
        }
    }
}

/// A logged block of study time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct StudySessionDraft {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: u32,
    pub subject: String,
    pub notes: String,
}

impl StudySession {
    pub fn from_draft(draft: StudySessionDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            date: now.date_naive(),
            start_time: draft.start_time.unwrap_or(now),
            end_time: draft.end_time.unwrap_or(now),
            duration: draft.duration,
            subject: draft.subject,
            notes: draft.notes,
        }
    }
}

/// A to-do list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    pub created: DateTime<Utc>,
}

impl Todo {
    pub fn new(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            text: text.into(),
            done: false,
            created: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_entry_takes_date_from_creation_time() {
        let now: DateTime<Utc> = "2026-03-04T21:15:00Z".parse().unwrap();
        let entry = JournalEntry::from_draft(
            JournalDraft {
                good_things: vec!["sunshine".into()],
                ..Default::default()
            },
            now,
        );
        assert_eq!(entry.date, "2026-03-04".parse::<NaiveDate>().unwrap());
        assert_eq!(entry.id, now.timestamp_millis());
        assert_eq!(entry.good_things, vec!["sunshine".to_string()]);
    }

    #[test]
    fn study_session_defaults_start_end_to_now() {
        let now = Utc::now();
        let session = StudySession::from_draft(StudySessionDraft::default(), now);
        assert_eq!(session.start_time, now);
        assert_eq!(session.end_time, now);
        assert_eq!(session.duration, 0);
    }
}
