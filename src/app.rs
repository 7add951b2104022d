//! The interactive loop: render the month, prompt for an action, turn it
//! into an intent and show the outcome.

use anyhow::Result;
use calmon_core::{Color, Event, Intent, MonthGrid, MonthStep, Outcome, Session};
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::render::{self, Render};

const MONTH_ACTIONS: [&str; 4] = ["Next month", "Previous month", "Open a day", "Quit"];

/// Runs the interactive session until the user quits.
pub fn run(mut session: Session, config: &Config) -> Result<()> {
    let today = chrono::Local::now().date_naive();

    loop {
        let grid = MonthGrid::of(session.anchor());
        println!("\n{}\n", render::render_month(&grid, session.store(), today));

        let action = Select::new()
            .with_prompt("  Action")
            .items(&MONTH_ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                session.apply(Intent::NavigateMonth {
                    step: MonthStep::Next,
                });
            }
            1 => {
                session.apply(Intent::NavigateMonth {
                    step: MonthStep::Previous,
                });
            }
            2 => open_day(&mut session, &grid, config)?,
            _ => break,
        }
    }

    Ok(())
}

/// The day menu: list the day's events and add, edit or delete until the
/// user goes back to the month.
fn open_day(session: &mut Session, grid: &MonthGrid, config: &Config) -> Result<()> {
    let date = prompt_day(grid)?;

    loop {
        let events = match session.apply(Intent::SelectDate { date }) {
            Outcome::DaySelected { events, .. } => events,
            // SelectDate always answers DaySelected.
            _ => Vec::new(),
        };

        println!("\n  {}", date.format("%A, %B %-d").to_string().bold());
        if events.is_empty() {
            println!("  {}", "No events".dimmed());
        } else {
            for event in &events {
                println!("  {}", event.render());
            }
        }
        println!();

        let mut actions = vec!["Add event"];
        if !events.is_empty() {
            actions.push("Edit an event");
            actions.push("Delete an event");
        }
        actions.push("Back");

        let action = Select::new()
            .with_prompt("  Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[action] {
            "Add event" => add_event(session, date, config)?,
            "Edit an event" => edit_event(session, &events)?,
            "Delete an event" => delete_event(session, &events)?,
            _ => return Ok(()),
        }
    }
}

fn add_event(session: &mut Session, date: NaiveDate, config: &Config) -> Result<()> {
    let description: String = Input::new()
        .with_prompt("  Event (empty to cancel)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    if description.trim().is_empty() {
        return Ok(());
    }

    let time: String = Input::new()
        .with_prompt("  Time (HH:MM, empty for 12:00)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    let color = prompt_color(config.default_color)?;

    let outcome = session.apply(Intent::CreateEvent {
        date,
        description: description.trim().to_string(),
        time: trimmed_or_none(&time),
        color,
    });
    report(&outcome);

    Ok(())
}

fn edit_event(session: &mut Session, events: &[Event]) -> Result<()> {
    let event = pick_event("  Edit which event?", events)?;

    let description: String = Input::new()
        .with_prompt("  Event (empty to cancel)")
        .with_initial_text(&event.description)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    if description.trim().is_empty() {
        return Ok(());
    }

    let time: String = Input::new()
        .with_prompt("  Time (HH:MM)")
        .with_initial_text(event.time.format("%H:%M").to_string())
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    let color = prompt_color(event.color)?;

    let outcome = session.apply(Intent::EditEvent {
        id: event.id,
        description: Some(description.trim().to_string()),
        time: trimmed_or_none(&time),
        date: None,
        color: Some(color),
    });
    report(&outcome);

    Ok(())
}

fn delete_event(session: &mut Session, events: &[Event]) -> Result<()> {
    let event = pick_event("  Delete which event?", events)?;

    let outcome = session.apply(Intent::DeleteEvent { id: event.id });
    report(&outcome);

    Ok(())
}

/// Prompt for a day of the grid's month, retrying on bad input.
fn prompt_day(grid: &MonthGrid) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  Day (1-{})", grid.days_in_month))
            .interact_text()?;
        match parse_day(grid, &input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn parse_day(grid: &MonthGrid, input: &str) -> Result<NaiveDate> {
    let day: u32 = input
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Enter a day number"))?;
    NaiveDate::from_ymd_opt(grid.year, grid.month, day)
        .ok_or_else(|| anyhow::anyhow!("Enter a day between 1 and {}", grid.days_in_month))
}

fn pick_event<'a>(prompt: &str, events: &'a [Event]) -> Result<&'a Event> {
    let items: Vec<String> = events.iter().map(|e| e.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(&events[selection])
}

fn prompt_color(current: Color) -> Result<Color> {
    let items: Vec<String> = Color::ALL.iter().map(|c| c.to_string()).collect();
    let default = Color::ALL.iter().position(|c| *c == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Color")
        .items(&items)
        .default(default)
        .interact()?;
    Ok(Color::ALL[selection])
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Created {
            event,
            time_fallback,
        } => {
            println!("{}", format!("  Created: {}", event).green());
            if *time_fallback {
                println!("  {}", "Couldn't read that time, used 12:00".dimmed());
            }
        }
        Outcome::Updated {
            event,
            time_fallback,
        } => {
            println!("{}", format!("  Updated: {}", event).green());
            if *time_fallback {
                println!("  {}", "Couldn't read that time, kept the old one".dimmed());
            }
        }
        Outcome::Deleted { event } => {
            println!("{}", format!("  Deleted: {}", event).red());
        }
        Outcome::UnknownEvent { .. } => {
            println!("  {}", "That event is no longer in the calendar".yellow());
        }
        _ => {}
    }
}

fn trimmed_or_none(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_day ---

    #[test]
    fn accepts_days_inside_the_month() {
        let grid = MonthGrid::of(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(
            parse_day(&grid, "29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            parse_day(&grid, " 1 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn rejects_days_outside_the_month() {
        let grid = MonthGrid::of(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(parse_day(&grid, "30").is_err());
        assert!(parse_day(&grid, "0").is_err());
        assert!(parse_day(&grid, "lunchtime").is_err());
    }

    // --- trimmed_or_none ---

    #[test]
    fn blank_input_means_no_value() {
        assert_eq!(trimmed_or_none(""), None);
        assert_eq!(trimmed_or_none("   "), None);
        assert_eq!(trimmed_or_none(" 09:30 "), Some("09:30".to_string()));
    }
}
