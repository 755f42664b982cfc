//! Habit analytics: streaks, completion rates, weekly comparisons,
//! predictions, and textual reports.
//!
//! Every function here is stateless and recomputes from the habit's full
//! date window. Calendar days are compared as `NaiveDate` values via
//! `num_days` -- one convention everywhere, no elapsed-hours arithmetic.
//! The reference day is always passed in explicitly so callers (and tests)
//! control the clock.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::Habit;

/// Streak thresholds that trigger a milestone message.
const STREAK_WEEK: u32 = 7;
const STREAK_HABIT_FORMED: u32 = 21;
const STREAK_MASTERED: u32 = 66;

/// Aggregated per-habit statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub total: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate_7_days: u32,
    pub completion_rate_30_days: u32,
    pub completed_today: bool,
}

/// This week's completions vs. the prior 7-day window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub this_week: usize,
    pub last_week: usize,
    pub change: i64,
    pub improved: bool,
}

/// Names of habits completed / still open today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryNames {
    pub completed: Vec<String>,
    pub remaining: Vec<String>,
}

/// Today's completion summary across all habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
    pub remaining: usize,
    pub habits: SummaryNames,
}

/// One cell in the rolling day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// Per-habit section of the full report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitReportEntry {
    pub name: String,
    pub category: String,
    pub stats: HabitStats,
    pub weekly: WeeklyComparison,
}

/// Full analytics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitReport {
    pub timestamp: DateTime<Utc>,
    pub summary: TodaySummary,
    pub habits: Vec<HabitReportEntry>,
    pub insights: Vec<String>,
}

/// Count of consecutive calendar days ending at or adjacent to `today`.
///
/// Walks the dates newest-first against a shrinking reference point: today
/// or yesterday opens the count, then every further date must fall exactly
/// one day before the previously accepted one. Stops at the first gap.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    if habit.dates.is_empty() {
        return 0;
    }
    let mut sorted = habit.dates.clone();
    sorted.sort_unstable();

    let mut streak: u32 = 0;
    let mut reference = today;
    for &date in sorted.iter().rev() {
        let diff = (reference - date).num_days();
        let contiguous = if streak == 0 {
            (0..=1).contains(&diff)
        } else {
            diff == 1
        };
        if contiguous {
            streak += 1;
            reference = date;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive days anywhere in the window.
pub fn longest_streak(habit: &Habit) -> u32 {
    if habit.dates.is_empty() {
        return 0;
    }
    let mut sorted = habit.dates.clone();
    sorted.sort_unstable();

    let mut max_streak: u32 = 1;
    let mut run: u32 = 1;
    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            max_streak = max_streak.max(run);
        } else {
            run = 1;
        }
    }
    max_streak
}

/// Percentage of the trailing `days` calendar days (today inclusive) with
/// a completion, rounded to the nearest integer.
pub fn completion_rate(habit: &Habit, days: u32, today: NaiveDate) -> u32 {
    if days == 0 {
        return 0;
    }
    let completed = (0..days)
        .filter(|&i| habit.completed_on(today - Duration::days(i64::from(i))))
        .count();
    ((completed as f64 / f64::from(days)) * 100.0).round() as u32
}

/// Completions in the inclusive date range.
pub fn completion_count(habit: &Habit, start: NaiveDate, end: NaiveDate) -> usize {
    habit
        .dates
        .iter()
        .filter(|&&d| d >= start && d <= end)
        .count()
}

/// This week (Sunday-based, through today) vs. the prior 7-day window.
pub fn weekly_comparison(habit: &Habit, today: NaiveDate) -> WeeklyComparison {
    let start_of_week = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let this_week = completion_count(habit, start_of_week, today);
    let last_week = completion_count(
        habit,
        start_of_week - Duration::days(7),
        start_of_week - Duration::days(1),
    );
    WeeklyComparison {
        this_week,
        last_week,
        change: this_week as i64 - last_week as i64,
        improved: this_week > last_week,
    }
}

/// Bundle of all per-habit statistics.
pub fn stats(habit: &Habit, today: NaiveDate) -> HabitStats {
    HabitStats {
        total: habit.dates.len(),
        current_streak: current_streak(habit, today),
        longest_streak: longest_streak(habit),
        completion_rate_7_days: completion_rate(habit, 7, today),
        completion_rate_30_days: completion_rate(habit, 30, today),
        completed_today: habit.completed_on(today),
    }
}

/// Predicted chance of completing tomorrow, as a rounded percentage:
/// average completion over the previous 8 occurrences of tomorrow's
/// weekday (offsets 0, 7, ..., 49 days back from tomorrow).
pub fn predict_tomorrow(habit: &Habit, today: NaiveDate) -> u32 {
    let tomorrow = today + Duration::days(1);
    let hits = (0..8)
        .filter(|&week| habit.completed_on(tomorrow - Duration::days(7 * week)))
        .count();
    ((hits as f64 / 8.0) * 100.0).round() as u32
}

/// The deterministic set of triggered motivational messages. Empty when
/// nothing triggers; selection is left to the caller so it can be seeded.
pub fn motivational_messages(habit: &Habit, today: NaiveDate) -> Vec<String> {
    let s = stats(habit, today);
    let mut messages = Vec::new();

    if s.current_streak >= STREAK_WEEK {
        messages.push(format!(
            "🔥 Amazing! {}-day streak on {}!",
            s.current_streak, habit.name
        ));
    }
    if s.current_streak >= STREAK_HABIT_FORMED {
        messages.push(format!(
            "🏆 Incredible! {} days - this is now a habit!",
            s.current_streak
        ));
    }
    if s.current_streak >= STREAK_MASTERED {
        messages.push(format!(
            "⭐ Legendary! {} days - you've mastered this!",
            s.current_streak
        ));
    }
    if s.completion_rate_7_days == 100 {
        messages.push("✨ Perfect week! Keep it up!".to_string());
    }
    if s.current_streak == 0 && s.total > 0 {
        messages.push(format!("💪 Time to restart your {} streak!", habit.name));
    }
    if s.current_streak == s.longest_streak && s.current_streak > 0 {
        messages.push(format!("🎯 New personal record! {} days!", s.current_streak));
    }

    messages
}

/// Pick one triggered message uniformly at random, or fall back to a
/// generic encouragement.
pub fn pick_message<R: Rng>(habit: &Habit, today: NaiveDate, rng: &mut R) -> String {
    let messages = motivational_messages(habit, today);
    messages
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| format!("Keep going with {}!", habit.name))
}

/// Today's completion summary across all habits.
pub fn today_summary(habits: &[Habit], today: NaiveDate) -> TodaySummary {
    let completed: Vec<String> = habits
        .iter()
        .filter(|h| h.completed_on(today))
        .map(|h| h.name.clone())
        .collect();
    let remaining: Vec<String> = habits
        .iter()
        .filter(|h| !h.completed_on(today))
        .map(|h| h.name.clone())
        .collect();
    let total = habits.len();
    let percentage = if total == 0 {
        0
    } else {
        ((completed.len() as f64 / total as f64) * 100.0).round() as u32
    };
    TodaySummary {
        completed: completed.len(),
        total,
        percentage,
        remaining: remaining.len(),
        habits: SummaryNames {
            completed,
            remaining,
        },
    }
}

/// Full report: summary, per-habit stats, and textual insights.
pub fn report(habits: &[Habit], now: DateTime<Utc>) -> HabitReport {
    let today = now.date_naive();
    let entries = habits
        .iter()
        .map(|h| HabitReportEntry {
            name: h.name.clone(),
            category: h.category.clone(),
            stats: stats(h, today),
            weekly: weekly_comparison(h, today),
        })
        .collect();

    let mut insights = Vec::new();
    if let Some(best) = strongest_habit(habits, today) {
        insights.push(format!(
            "Your strongest habit: {} ({}-day streak)",
            best.name,
            current_streak(best, today)
        ));
    }
    let needs_work: Vec<&str> = habits
        .iter()
        .filter(|h| completion_rate(h, 7, today) < 50)
        .map(|h| h.name.as_str())
        .collect();
    if !needs_work.is_empty() {
        insights.push(format!(
            "Habits needing attention: {}",
            needs_work.join(", ")
        ));
    }

    HabitReport {
        timestamp: now,
        summary: today_summary(habits, today),
        habits: entries,
        insights,
    }
}

/// The habit with the longest current streak; first wins on ties.
fn strongest_habit(habits: &[Habit], today: NaiveDate) -> Option<&Habit> {
    let mut best: Option<(&Habit, u32)> = None;
    for habit in habits {
        let streak = current_streak(habit, today);
        if best.map_or(true, |(_, s)| streak > s) {
            best = Some((habit, streak));
        }
    }
    best.map(|(h, _)| h)
}

/// The trailing `n`-day grid ending today, oldest first.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<DayCell> {
    (0..n)
        .rev()
        .map(|i| {
            let date = today - Duration::days(i64::from(i));
            let weekday = date.weekday().num_days_from_sunday();
            DayCell {
                date,
                day: date.day(),
                month: date.month(),
                year: date.year(),
                weekday,
                is_today: i == 0,
                is_weekend: weekday == 0 || weekday == 6,
            }
        })
        .collect()
}

/// Completion strip over the last `n` days: `■` done, `□` missed.
pub fn visualize(habit: &Habit, today: NaiveDate, n: u32) -> String {
    last_n_days(today, n)
        .iter()
        .map(|cell| {
            if habit.completed_on(cell.date) {
                "■"
            } else {
                "□"
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorted, deduplicated category names.
pub fn categories(habits: &[Habit]) -> Vec<String> {
    let mut cats: Vec<String> = habits.iter().map(|h| h.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}

pub fn by_category<'a>(habits: &'a [Habit], category: &str) -> Vec<&'a Habit> {
    habits.iter().filter(|h| h.category == category).collect()
}

/// Sort best-rate-first over the trailing window.
pub fn sort_by_completion_rate(habits: &mut [Habit], days: u32, today: NaiveDate) {
    habits.sort_by_key(|h| std::cmp::Reverse(completion_rate(h, days, today)));
}

/// Sort longest-current-streak-first.
pub fn sort_by_streak(habits: &mut [Habit], today: NaiveDate) {
    habits.sort_by_key(|h| std::cmp::Reverse(current_streak(h, today)));
}
