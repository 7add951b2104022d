//! Event types shared by the store, the session and the renderer.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity for an event.
///
/// Generated once at creation and kept across edits, including date moves
/// between buckets, so update/remove stay unambiguous even when two events
/// share a date, time and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    fn generate() -> Self {
        EventId(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Palette for event chips.
///
/// Config files name these in lowercase, e.g. `default_color = "green"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Magenta,
    Cyan,
}

impl Color {
    /// Every palette color, in picker order.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Magenta,
        Color::Cyan,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
        };
        write!(f, "{}", name)
    }
}

/// A calendar event attached to one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub color: Color,
}

impl Event {
    pub fn new(date: NaiveDate, time: NaiveTime, description: &str, color: Color) -> Self {
        Event {
            id: EventId::generate(),
            date,
            time,
            description: description.to_string(),
            color,
        }
    }
}

impl fmt::Display for Event {
    /// `"12:00 - Lunch"`, the form listings and reports use.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.time.format("%H:%M"), self.description)
    }
}
