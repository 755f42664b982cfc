//! # Deeper Core Library
//!
//! Core business logic for Deeper, a local-first daily-routine and
//! habit-tracking tool. All operations are available through a standalone
//! CLI binary; there is no server and no network.
//!
//! ## Architecture
//!
//! - **Routine Gate**: derives the app's allowed mode purely from
//!   wall-clock time and today's completion flags
//! - **Habit Analytics**: stateless streak/rate/report computations over
//!   each habit's rolling 21-day completion window
//! - **Storage**: one JSON record loaded and saved wholesale, with a
//!   best-effort backup copy alongside
//! - **Countdown**: caller-ticked timer helper for timed routine items
//!
//! ## Key Components
//!
//! - [`AppData`]: the single persisted record
//! - [`gate::current_mode`] / [`gate::should_redirect`]: the gating policy
//! - [`routine::finalize_routine`]: end-of-routine bookkeeping
//! - [`Store`]: record persistence, export/import, reset

pub mod error;
pub mod gate;
pub mod habits;
pub mod model;
pub mod routine;
pub mod storage;
pub mod timer;

pub use error::{CoreError, StorageError};
pub use gate::{Mode, Page};
pub use model::{AppData, Habit, ItemKind, JournalEntry, Routine, RoutineItem, RoutineKind, StudySession};
pub use routine::{ItemUpdate, RoutineProgress};
pub use storage::Store;
pub use timer::{Countdown, TimerSignal, TimerState};
