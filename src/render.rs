//! Terminal rendering for calmon types.

use calmon_core::{Color, Event, EventStore, MonthGrid};
use chrono::{Datelike, NaiveDate};
use owo_colors::{AnsiColors, OwoColorize};

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn ansi(color: Color) -> AnsiColors {
    match color {
        Color::Blue => AnsiColors::Blue,
        Color::Green => AnsiColors::Green,
        Color::Yellow => AnsiColors::Yellow,
        Color::Red => AnsiColors::Red,
        Color::Magenta => AnsiColors::Magenta,
        Color::Cyan => AnsiColors::Cyan,
    }
}

/// Types that render themselves for terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let chip = format!("{}  {}", self.time.format("%H:%M"), self.description);
        chip.color(ansi(self.color)).to_string()
    }
}

/// The full month view: title, weekday header, the day grid, and the
/// month's events listed underneath. `today` gets a highlighted cell
/// when it falls inside the month.
pub fn render_month(grid: &MonthGrid, store: &EventStore, today: NaiveDate) -> String {
    let mut lines = Vec::new();

    lines.push(format!(" {}", grid.title().bold()));
    lines.push(header_line());

    for row in 0..grid.week_rows() {
        let mut cells = Vec::new();
        for col in 0..7 {
            match grid.cell_date(row, col) {
                Some(date) => cells.push(day_cell(date, store, today)),
                None => cells.push("    ".to_string()),
            }
        }
        lines.push(cells.concat());
    }

    lines.push(String::new());
    lines.extend(chip_lines(grid, store));

    lines.join("\n")
}

fn header_line() -> String {
    let labels: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:>3} ", label))
        .collect();
    labels.dimmed().to_string()
}

/// One grid cell: the padded day number, highlighted when it is today,
/// with a marker dot when the day has events.
fn day_cell(date: NaiveDate, store: &EventStore, today: NaiveDate) -> String {
    // Pad before styling so escape codes don't count against the width.
    let number = format!("{:>3}", date.day());
    let number = if date == today {
        number.reversed().to_string()
    } else {
        number
    };
    match store.events_for(date).first() {
        Some(event) => format!("{}{}", number, "•".color(ansi(event.color))),
        None => format!("{} ", number),
    }
}

fn chip_lines(grid: &MonthGrid, store: &EventStore) -> Vec<String> {
    let mut lines = Vec::new();
    for day in 1..=grid.days_in_month {
        if let Some(date) = NaiveDate::from_ymd_opt(grid.year, grid.month, day) {
            for event in store.events_for(date) {
                lines.push(format!("  {:>2}  {}", day, event.render()));
            }
        }
    }
    if lines.is_empty() {
        lines.push(format!("  {}", "No events this month".dimmed()));
    }
    lines
}
