//! User intents and their outcomes.
//!
//! Every interaction that changes or queries the session is an explicit
//! [`Intent`] message. The presentation layer builds intents from user
//! input and hands them to [`Session::apply`](crate::Session::apply),
//! which answers with an [`Outcome`] describing what actually happened.

use chrono::NaiveDate;

use crate::event::{Color, Event, EventId};

/// Direction of a month step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Next,
    Previous,
}

/// Something the user asked the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Create an event on `date`. A missing or malformed `time` falls back
    /// to noon instead of failing.
    CreateEvent {
        date: NaiveDate,
        description: String,
        time: Option<String>,
        color: Color,
    },
    /// Edit the event with `id`. `None` fields keep their current value;
    /// a malformed `time` keeps the event's current time instead of failing.
    EditEvent {
        id: EventId,
        description: Option<String>,
        time: Option<String>,
        date: Option<NaiveDate>,
        color: Option<Color>,
    },
    /// Remove the event with `id`.
    DeleteEvent { id: EventId },
    /// Step the visible month forward or back.
    NavigateMonth { step: MonthStep },
    /// Focus a date and list its events.
    SelectDate { date: NaiveDate },
}

/// What an intent did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event was created. `time_fallback` is true when a malformed
    /// time input was replaced with noon.
    Created { event: Event, time_fallback: bool },
    /// The event was updated. `time_fallback` is true when a malformed
    /// time input kept the previous time.
    Updated { event: Event, time_fallback: bool },
    Deleted { event: Event },
    /// The id names no event, e.g. it was already deleted.
    UnknownEvent { id: EventId },
    MonthChanged { anchor: NaiveDate },
    DaySelected { date: NaiveDate, events: Vec<Event> },
}
