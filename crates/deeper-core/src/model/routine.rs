//! Routine checklists and their items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which routine a caller is talking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineKind {
    Morning,
    Evening,
}

impl RoutineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoutineKind::Morning => "morning",
            RoutineKind::Evening => "evening",
        }
    }

    /// Id of the habit that tracks this routine's completion history.
    pub fn habit_id(self) -> &'static str {
        match self {
            RoutineKind::Morning => "morning-routine",
            RoutineKind::Evening => "evening-routine",
        }
    }
}

/// Completion semantics of a routine item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Completed implicitly (e.g. waking up at the trigger time).
    Auto,
    /// Backed by a countdown; checked off when the countdown runs out.
    Timer,
    /// Plain checkbox.
    Manual,
    /// Complete once `current >= target`.
    Counter,
    /// Free-form text; completion is independent of the value.
    Text,
    /// Completed by visiting another part of the app.
    Redirect,
}

/// One checklist entry. Kind-specific fields are optional so that every
/// item round-trips through the same JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineItem {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub completed: bool,
    /// Countdown length in seconds (timer items).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Required count (counter items).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Progress so far (counter items).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Entered text (text items).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RoutineItem {
    fn base(id: &str, label: &str, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            completed: false,
            duration: None,
            target: None,
            current: None,
            value: None,
        }
    }

    pub fn auto(id: &str, label: &str) -> Self {
        Self::base(id, label, ItemKind::Auto)
    }

    pub fn manual(id: &str, label: &str) -> Self {
        Self::base(id, label, ItemKind::Manual)
    }

    pub fn timer(id: &str, label: &str, duration_secs: u32) -> Self {
        Self {
            duration: Some(duration_secs),
            ..Self::base(id, label, ItemKind::Timer)
        }
    }

    pub fn counter(id: &str, label: &str, target: u32) -> Self {
        Self {
            target: Some(target),
            current: Some(0),
            ..Self::base(id, label, ItemKind::Counter)
        }
    }

    pub fn text(id: &str, label: &str) -> Self {
        Self {
            value: Some(String::new()),
            ..Self::base(id, label, ItemKind::Text)
        }
    }

    pub fn redirect(id: &str, label: &str) -> Self {
        Self::base(id, label, ItemKind::Redirect)
    }
}

/// An ordered checklist plus the day it was last finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<RoutineItem>,
}

impl Routine {
    pub fn item(&self, id: &str) -> Option<&RoutineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut RoutineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// The seeded morning checklist.
    pub fn default_morning() -> Self {
        Self {
            last_completed: None,
            items: vec![
                RoutineItem::auto("wake", "Wake up (6:30 AM)"),
                RoutineItem::timer("stretch", "Stretch for 5 minutes", 300),
                RoutineItem::manual("pushups", "1 failure set of push-ups"),
                RoutineItem::counter("squats", "50x bodyweight squats", 50),
                RoutineItem::timer("shower", "Quick shower (max 5 min)", 300),
                RoutineItem::manual("water", "Drink full bottle of water"),
                RoutineItem::manual("breakfast", "Good breakfast"),
                RoutineItem::redirect("bible", "Bible study and prayer"),
                RoutineItem::manual("study", "Start studying"),
            ],
        }
    }

    /// The seeded evening checklist. The three text items feed the journal
    /// entry synthesized on finalize.
    pub fn default_evening() -> Self {
        Self {
            last_completed: None,
            items: vec![
                RoutineItem::manual("lights", "Turn on red lights"),
                RoutineItem::manual("hygiene", "Brush teeth and change into pyjamas"),
                RoutineItem::text("good-things", "3 good things from today"),
                RoutineItem::text("lessons", "3 lessons from today"),
                RoutineItem::text("improvements", "Improvements for tomorrow"),
                RoutineItem::manual("plan", "Plan tomorrow on paper"),
                RoutineItem::manual("read-book", "Read a book"),
            ],
        }
    }
}
