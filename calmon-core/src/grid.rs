//! Month grid geometry.
//!
//! A [`MonthGrid`] describes one month as a 7-column grid: how many days
//! the month has, and which column its first day lands on (Sunday is
//! column 0). Rows and columns map back to dates with [`MonthGrid::cell_date`],
//! which leaves leading and trailing cells blank rather than borrowing days
//! from neighboring months.

use chrono::{Datelike, Months, NaiveDate};

/// Grid layout for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Column of day 1, counting from Sunday = 0.
    pub first_weekday_offset: u32,
}

impl MonthGrid {
    /// The grid for the month containing `anchor`.
    pub fn of(anchor: NaiveDate) -> Self {
        let first = first_of_month(anchor);
        MonthGrid {
            year: first.year(),
            month: first.month(),
            days_in_month: days_in_month(first),
            first_weekday_offset: first.weekday().num_days_from_sunday(),
        }
    }

    /// The date shown in grid cell (`row`, `col`), or `None` for cells
    /// before day 1 or after the last day. Rows and columns count from 0.
    pub fn cell_date(&self, row: usize, col: usize) -> Option<NaiveDate> {
        if col >= 7 || row >= self.week_rows() {
            return None;
        }
        let cell = (row * 7 + col) as i64 - self.first_weekday_offset as i64;
        if cell < 0 || cell >= self.days_in_month as i64 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, cell as u32 + 1)
    }

    /// How many week rows the grid needs to show every day of the month.
    pub fn week_rows(&self) -> usize {
        ((self.first_weekday_offset + self.days_in_month) as usize).div_ceil(7)
    }

    /// Whether `date` falls inside this grid's month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month heading, e.g. `"February 2024"`.
    pub fn title(&self) -> String {
        // Day 1 exists in every month.
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        first.format("%B %Y").to_string()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap()
}

fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first.signed_duration_since(first).num_days() as u32,
        // Only past chrono's last representable month, which is a December.
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(year: i32, month: u32) -> MonthGrid {
        MonthGrid::of(NaiveDate::from_ymd_opt(year, month, 15).unwrap())
    }

    // --- layout ---

    #[test]
    fn february_2024_is_a_29_day_leap_month() {
        let feb = grid(2024, 2);
        assert_eq!(feb.days_in_month, 29);
        // 2024-02-01 is a Thursday.
        assert_eq!(feb.first_weekday_offset, 4);
        assert_eq!(feb.week_rows(), 5);
    }

    #[test]
    fn march_2024_has_31_days() {
        assert_eq!(grid(2024, 3).days_in_month, 31);
    }

    #[test]
    fn offset_zero_when_the_month_starts_on_sunday() {
        // 2023-10-01 is a Sunday.
        let oct = grid(2023, 10);
        assert_eq!(oct.first_weekday_offset, 0);
        assert_eq!(oct.week_rows(), 5);
    }

    #[test]
    fn six_rows_when_a_long_month_starts_late_in_the_week() {
        // 2026-08-01 is a Saturday, so 31 days spill into a sixth row.
        let aug = grid(2026, 8);
        assert_eq!(aug.first_weekday_offset, 6);
        assert_eq!(aug.week_rows(), 6);
    }

    // --- cell_date ---

    #[test]
    fn first_day_lands_in_its_offset_column() {
        let feb = grid(2024, 2);
        assert_eq!(
            feb.cell_date(0, 4),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        // Cells before day 1 are blank.
        assert_eq!(feb.cell_date(0, 3), None);
    }

    #[test]
    fn every_day_of_the_month_appears_exactly_once() {
        let feb = grid(2024, 2);
        let mut seen = Vec::new();
        for row in 0..feb.week_rows() {
            for col in 0..7 {
                if let Some(date) = feb.cell_date(row, col) {
                    seen.push(date.day());
                }
            }
        }
        let expected: Vec<u32> = (1..=29).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn cells_past_the_last_day_are_blank() {
        let feb = grid(2024, 2);
        // 2024-02-29 is a Thursday in row 4; Friday and Saturday stay blank.
        assert_eq!(
            feb.cell_date(4, 4),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(feb.cell_date(4, 5), None);
        assert_eq!(feb.cell_date(4, 6), None);
    }

    #[test]
    fn out_of_range_rows_and_columns_are_blank() {
        let feb = grid(2024, 2);
        assert_eq!(feb.cell_date(0, 7), None);
        assert_eq!(feb.cell_date(5, 0), None);
    }

    // --- contains / title ---

    #[test]
    fn contains_matches_only_the_grid_month() {
        let feb = grid(2024, 2);
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2023, 2, 15).unwrap()));
    }

    #[test]
    fn title_is_month_name_and_year() {
        assert_eq!(grid(2024, 2).title(), "February 2024");
        assert_eq!(grid(2024, 12).title(), "December 2024");
    }
}
