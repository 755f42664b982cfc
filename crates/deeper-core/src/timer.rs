//! Countdown helper for timer-kind routine items.
//!
//! Wall-clock based, no internal threads: the caller ticks it (once per
//! second is plenty) and reacts to the returned signal. Stopping is the
//! only cancellation there is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
    Finished,
}

/// Emitted by [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerSignal {
    /// Countdown crossed zero on this tick.
    Finished,
}

/// A one-shot countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    duration_secs: u32,
    remaining_ms: u64,
    state: TimerState,
    /// Epoch ms of the last flush; `None` unless running.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_ms: u64::from(duration_secs) * 1000,
            state: TimerState::Idle,
            last_tick_epoch_ms: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000) as u32
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn start(&mut self) {
        if self.state == TimerState::Idle {
            self.state = TimerState::Running;
            self.last_tick_epoch_ms = Some(now_ms());
        }
    }

    /// Call periodically while running. Returns `Some(Finished)` exactly
    /// once, on the tick that crosses zero.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        self.tick_at(now_ms())
    }

    fn tick_at(&mut self, now: u64) -> Option<TimerSignal> {
        if self.state != TimerState::Running {
            return None;
        }
        if let Some(last) = self.last_tick_epoch_ms {
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
        if self.remaining_ms == 0 {
            self.state = TimerState::Finished;
            self.last_tick_epoch_ms = None;
            return Some(TimerSignal::Finished);
        }
        None
    }

    /// Cancel the countdown. No signal is emitted.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
            self.last_tick_epoch_ms = None;
        }
    }
}

/// `mm:ss` display for a remaining-seconds value.
pub fn format_timer(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
