pub mod data;
pub mod gate;
pub mod habit;
pub mod journal;
pub mod routine;
pub mod study;

use deeper_core::RoutineKind;

/// Parse a `morning` / `evening` argument.
pub fn parse_routine_kind(s: &str) -> Result<RoutineKind, Box<dyn std::error::Error>> {
    match s {
        "morning" => Ok(RoutineKind::Morning),
        "evening" => Ok(RoutineKind::Evening),
        other => Err(format!("unknown routine '{other}' (expected morning or evening)").into()),
    }
}
