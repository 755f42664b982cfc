//! Habit records: a name, a category, and a rolling window of completion
//! dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked habit. `dates` is kept sorted ascending, deduplicated, and
/// capped to the most recent [`Habit::MAX_TRACKED_DAYS`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

impl Habit {
    /// Rolling window size for completion history.
    pub const MAX_TRACKED_DAYS: usize = 21;

    pub const MORNING_ROUTINE: &'static str = "morning-routine";
    pub const EVENING_ROUTINE: &'static str = "evening-routine";
    pub const STUDY_TIME: &'static str = "study-time";

    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            dates: Vec::new(),
        }
    }

    /// The habits seeded into a fresh record.
    pub fn default_set() -> Vec<Habit> {
        vec![
            Habit::new(Self::MORNING_ROUTINE, "Morning Routine", "routine"),
            Habit::new(Self::EVENING_ROUTINE, "Evening Routine", "routine"),
            Habit::new("bible-study", "Bible Study", "spiritual"),
            Habit::new("exercise", "Exercise", "health"),
            Habit::new(Self::STUDY_TIME, "Study Time", "productivity"),
        ]
    }

    /// Record a completion. Duplicates are ignored; when the window
    /// overflows, only the latest 21 sorted dates are retained.
    ///
    /// Returns true if the date was newly inserted.
    pub fn insert_date(&mut self, date: NaiveDate) -> bool {
        if self.dates.contains(&date) {
            return false;
        }
        self.dates.push(date);
        self.dates.sort_unstable();
        if self.dates.len() > Self::MAX_TRACKED_DAYS {
            let excess = self.dates.len() - Self::MAX_TRACKED_DAYS;
            self.dates.drain(..excess);
        }
        true
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(n)
    }

    #[test]
    fn insert_date_dedupes() {
        let mut habit = Habit::new("h", "H", "test");
        assert!(habit.insert_date(day(0)));
        assert!(!habit.insert_date(day(0)));
        assert_eq!(habit.dates.len(), 1);
    }

    #[test]
    fn insert_date_keeps_sorted_order() {
        let mut habit = Habit::new("h", "H", "test");
        habit.insert_date(day(5));
        habit.insert_date(day(1));
        habit.insert_date(day(3));
        assert_eq!(habit.dates, vec![day(1), day(3), day(5)]);
    }

    #[test]
    fn window_caps_at_latest_21() {
        let mut habit = Habit::new("h", "H", "test");
        for n in 0..30 {
            habit.insert_date(day(n));
        }
        assert_eq!(habit.dates.len(), Habit::MAX_TRACKED_DAYS);
        assert_eq!(habit.dates[0], day(9));
        assert_eq!(*habit.dates.last().unwrap(), day(29));
    }

    #[test]
    fn dates_serialize_as_iso_day_strings() {
        let mut habit = Habit::new("h", "H", "test");
        habit.insert_date(day(0));
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["dates"][0], "2026-01-01");
    }
}
