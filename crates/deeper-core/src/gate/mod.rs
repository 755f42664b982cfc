//! Time-of-day gating.
//!
//! The gate is a pure function of wall-clock time and today's completion
//! flags. Nothing here is persisted: the mode is recomputed from scratch on
//! every query, so it can change silently as time passes.
//!
//! ```text
//! pre-morning -> morning-required -> daytime -> evening-required -> evening-complete
//! ```

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::model::{AppData, Preferences, RoutineKind};

/// The app's allowed mode, derived from time and completion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    PreMorning,
    MorningRequired,
    Daytime,
    EveningRequired,
    EveningComplete,
}

/// Screens subject to gating. `Dashboard` stands in for every page that is
/// only reachable during the daytime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Locked,
    MorningRoutine,
    EveningRoutine,
    EveningDone,
    Dashboard,
}

impl Page {
    pub fn parse(s: &str) -> Option<Page> {
        match s {
            "locked" => Some(Page::Locked),
            "morning-routine" => Some(Page::MorningRoutine),
            "evening-routine" => Some(Page::EveningRoutine),
            "evening-done" => Some(Page::EveningDone),
            "dashboard" => Some(Page::Dashboard),
            _ => None,
        }
    }
}

/// Compute the current mode from minutes-since-midnight and today's
/// routine completion flags.
///
/// The morning boundary is inclusive: at exactly the morning trigger the
/// morning routine is already required. Same for the evening trigger.
pub fn current_mode(
    now_minutes: u32,
    prefs: &Preferences,
    morning_done_today: bool,
    evening_done_today: bool,
) -> Mode {
    let morning_start = prefs.morning_minutes();
    let evening_start = prefs.evening_minutes();

    if now_minutes < morning_start {
        return Mode::PreMorning;
    }
    if now_minutes < evening_start {
        if !morning_done_today {
            return Mode::MorningRequired;
        }
        return Mode::Daytime;
    }
    if !evening_done_today {
        return Mode::EveningRequired;
    }
    Mode::EveningComplete
}

/// Convenience wrapper deriving the flags from the record.
pub fn mode_for(data: &AppData, now: NaiveDateTime) -> Mode {
    let today = now.date();
    current_mode(
        now.time().hour() * 60 + now.time().minute(),
        &data.preferences,
        data.is_routine_completed_today(RoutineKind::Morning, today),
        data.is_routine_completed_today(RoutineKind::Evening, today),
    )
}

/// The page the user must be on for the given mode, or `None` if the
/// current page is already allowed. Only `Daytime` leaves every page open.
pub fn should_redirect(mode: Mode, current_page: Page) -> Option<Page> {
    let mandatory = match mode {
        Mode::PreMorning => Page::Locked,
        Mode::MorningRequired => Page::MorningRoutine,
        Mode::EveningRequired => Page::EveningRoutine,
        Mode::EveningComplete => Page::EveningDone,
        Mode::Daytime => return None,
    };
    if current_page == mandatory {
        None
    } else {
        Some(mandatory)
    }
}

/// Hours and minutes until the next occurrence of an `"HH:MM"` target,
/// wrapping to tomorrow if the target has already passed today.
pub fn time_until(now: NaiveDateTime, target: &str) -> Option<(u32, u32)> {
    let target_minutes = crate::model::parse_hhmm(target)?;
    let now_minutes = now.time().hour() * 60 + now.time().minute();
    let diff = if target_minutes > now_minutes {
        target_minutes - now_minutes
    } else {
        24 * 60 - now_minutes + target_minutes
    };
    Some((diff / 60, diff % 60))
}

pub fn format_time_remaining(hours: u32, minutes: u32) -> String {
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Greeting for the given hour of day.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else if hour < 21 {
        "Good evening"
    } else {
        "Good night"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::default() // 06:30 / 21:00
    }

    #[test]
    fn before_morning_trigger_is_pre_morning() {
        assert_eq!(current_mode(389, &prefs(), false, false), Mode::PreMorning);
    }

    #[test]
    fn morning_trigger_boundary_is_inclusive() {
        // 06:30 exactly, morning not done yet.
        assert_eq!(
            current_mode(390, &prefs(), false, false),
            Mode::MorningRequired
        );
    }

    #[test]
    fn daytime_once_morning_is_done() {
        assert_eq!(current_mode(600, &prefs(), true, false), Mode::Daytime);
        assert_eq!(
            current_mode(600, &prefs(), false, false),
            Mode::MorningRequired
        );
    }

    #[test]
    fn evening_trigger_boundary_is_inclusive() {
        assert_eq!(
            current_mode(21 * 60, &prefs(), true, false),
            Mode::EveningRequired
        );
        assert_eq!(
            current_mode(21 * 60, &prefs(), true, true),
            Mode::EveningComplete
        );
        // One minute earlier is still daytime.
        assert_eq!(current_mode(21 * 60 - 1, &prefs(), true, false), Mode::Daytime);
    }

    #[test]
    fn redirect_maps_each_mode_to_its_page() {
        assert_eq!(
            should_redirect(Mode::PreMorning, Page::Dashboard),
            Some(Page::Locked)
        );
        assert_eq!(
            should_redirect(Mode::MorningRequired, Page::Dashboard),
            Some(Page::MorningRoutine)
        );
        assert_eq!(
            should_redirect(Mode::EveningRequired, Page::Dashboard),
            Some(Page::EveningRoutine)
        );
        assert_eq!(
            should_redirect(Mode::EveningComplete, Page::Dashboard),
            Some(Page::EveningDone)
        );
    }

    #[test]
    fn no_redirect_when_already_on_mandatory_page() {
        assert_eq!(should_redirect(Mode::PreMorning, Page::Locked), None);
        assert_eq!(
            should_redirect(Mode::MorningRequired, Page::MorningRoutine),
            None
        );
    }

    #[test]
    fn daytime_never_redirects() {
        for page in [
            Page::Locked,
            Page::MorningRoutine,
            Page::EveningRoutine,
            Page::EveningDone,
            Page::Dashboard,
        ] {
            assert_eq!(should_redirect(Mode::Daytime, page), None);
        }
    }

    #[test]
    fn time_until_wraps_past_midnight() {
        let now: NaiveDateTime = "2026-05-01T22:00:00".parse().unwrap();
        assert_eq!(time_until(now, "06:30"), Some((8, 30)));
        let afternoon: NaiveDateTime = "2026-05-01T14:15:00".parse().unwrap();
        assert_eq!(time_until(afternoon, "21:00"), Some((6, 45)));
        assert_eq!(time_until(now, "nope"), None);
    }

    #[test]
    fn greeting_follows_hour() {
        assert_eq!(greeting(7), "Good morning");
        assert_eq!(greeting(13), "Good afternoon");
        assert_eq!(greeting(19), "Good evening");
        assert_eq!(greeting(22), "Good night");
    }

    #[test]
    fn mode_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(Mode::MorningRequired).unwrap(),
            "morning-required"
        );
        assert_eq!(serde_json::to_value(Page::EveningDone).unwrap(), "evening-done");
    }
}
