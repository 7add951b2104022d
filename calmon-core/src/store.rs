//! In-memory event storage, bucketed by date.
//!
//! One store owns every event in the session. Each date maps to a list
//! that preserves insertion order, and a side index maps event ids back
//! to their date so lookups by id never scan the whole calendar.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::event::{Color, Event, EventId};

/// A partial update to one event. `None` fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub description: Option<String>,
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
    pub color: Option<Color>,
}

/// All events in the session, grouped by date.
#[derive(Debug, Default)]
pub struct EventStore {
    buckets: HashMap<NaiveDate, Vec<Event>>,
    index: HashMap<EventId, NaiveDate>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event to its date's bucket, appending after any existing
    /// events on that date.
    pub fn add(&mut self, event: Event) -> EventId {
        // Re-adding an id would leave a stale index entry; evict first.
        self.remove(&event.id);

        let id = event.id;
        self.index.insert(id, event.date);
        self.buckets.entry(event.date).or_default().push(event);
        id
    }

    /// The events on `date`, oldest first. Empty for dates with no events.
    pub fn events_for(&self, date: NaiveDate) -> &[Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        let date = self.index.get(id)?;
        self.buckets.get(date)?.iter().find(|e| e.id == *id)
    }

    /// Removes the event with `id`, returning it. Unknown ids answer `None`,
    /// so removing twice is a no-op.
    pub fn remove(&mut self, id: &EventId) -> Option<Event> {
        let date = self.index.remove(id)?;
        let bucket = self.buckets.get_mut(&date)?;
        let pos = bucket.iter().position(|e| e.id == *id)?;
        let event = bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&date);
        }
        Some(event)
    }

    /// Applies `patch` to the event with `id`, returning the updated event.
    ///
    /// A patch that changes the date moves the event out of its old bucket
    /// and appends it to the new one in a single step, so no intermediate
    /// state has it in both or neither. Patches that keep the date edit the
    /// event in place, preserving its position within the bucket.
    pub fn update(&mut self, id: &EventId, patch: EventPatch) -> Option<Event> {
        let current_date = *self.index.get(id)?;

        if patch.date.is_some_and(|d| d != current_date) {
            let mut event = self.remove(id)?;
            apply_patch(&mut event, patch);
            let updated = event.clone();
            self.add(event);
            return Some(updated);
        }

        let bucket = self.buckets.get_mut(&current_date)?;
        let event = bucket.iter_mut().find(|e| e.id == *id)?;
        apply_patch(event, patch);
        Some(event.clone())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn apply_patch(event: &mut Event, patch: EventPatch) {
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(time) = patch.time {
        event.time = time;
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(color) = patch.color {
        event.color = color;
    }
}
