//! Month navigation.
//!
//! The navigator tracks the anchor date whose month is currently shown.
//! Stepping keeps the day-of-month where possible and clamps it to the
//! target month's last day otherwise, so January 31 steps to February 29
//! in a leap year rather than skipping a month.

use chrono::{Months, NaiveDate};

/// Tracks which month the session is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    anchor: NaiveDate,
}

impl Navigator {
    pub fn new(anchor: NaiveDate) -> Self {
        Navigator { anchor }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Moves the anchor one month forward, returning the new anchor.
    pub fn next_month(&mut self) -> NaiveDate {
        if let Some(next) = self.anchor.checked_add_months(Months::new(1)) {
            self.anchor = next;
        }
        self.anchor
    }

    /// Moves the anchor one month back, returning the new anchor.
    pub fn previous_month(&mut self) -> NaiveDate {
        if let Some(previous) = self.anchor.checked_sub_months(Months::new(1)) {
            self.anchor = previous;
        }
        self.anchor
    }
}
