//! Event time parsing and the lenient fallback policies.
//!
//! Times are entered as `HH:MM`. [`parse_time`] is the strict parser;
//! the `resolve_*` helpers wrap it with the policies the session applies
//! to user input: a malformed time never fails the operation, it falls
//! back to noon on create and to the event's current time on edit. Both
//! report whether the fallback fired so callers can tell the user.

use chrono::NaiveTime;

use crate::error::{CalmonError, CalmonResult};

/// The time assigned to events created without a usable time: 12:00.
pub fn default_event_time() -> NaiveTime {
    // Noon always exists.
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

/// Parses `HH:MM` into a time. Surrounding whitespace is ignored.
pub fn parse_time(input: &str) -> CalmonResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| CalmonError::InvalidTime(input.to_string()))
}

/// The time for a new event: the parsed input, or noon when the input is
/// missing or malformed. The flag is true when a malformed input fell back.
pub fn resolve_create_time(input: Option<&str>) -> (NaiveTime, bool) {
    match input {
        None => (default_event_time(), false),
        Some(raw) => match parse_time(raw) {
            Ok(time) => (time, false),
            Err(_) => (default_event_time(), true),
        },
    }
}

/// The time for an edited event: the parsed input, or `current` when the
/// input is missing or malformed. The flag is true when a malformed input
/// fell back.
pub fn resolve_edit_time(input: Option<&str>, current: NaiveTime) -> (NaiveTime, bool) {
    match input {
        None => (current, false),
        Some(raw) => match parse_time(raw) {
            Ok(time) => (time, false),
            Err(_) => (current, true),
        },
    }
}
