//! The interactive session: one store, one navigator, intent dispatch.

use chrono::NaiveDate;

use crate::event::Event;
use crate::intent::{Intent, MonthStep, Outcome};
use crate::navigator::Navigator;
use crate::store::{EventPatch, EventStore};
use crate::time::{resolve_create_time, resolve_edit_time};

/// One calendar session. Owns the only [`EventStore`] and the navigator,
/// so every view and every edit goes through the same state.
#[derive(Debug)]
pub struct Session {
    store: EventStore,
    navigator: Navigator,
    selected: Option<NaiveDate>,
}

impl Session {
    /// A fresh session showing the month of `anchor`, with no events.
    pub fn new(anchor: NaiveDate) -> Self {
        Session {
            store: EventStore::new(),
            navigator: Navigator::new(anchor),
            selected: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The anchor date of the visible month.
    pub fn anchor(&self) -> NaiveDate {
        self.navigator.anchor()
    }

    /// The date the user has focused, if any.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Applies one intent and reports what happened.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::CreateEvent {
                date,
                description,
                time,
                color,
            } => {
                let (time, time_fallback) = resolve_create_time(time.as_deref());
                let event = Event::new(date, time, &description, color);
                self.store.add(event.clone());
                Outcome::Created {
                    event,
                    time_fallback,
                }
            }
            Intent::EditEvent {
                id,
                description,
                time,
                date,
                color,
            } => {
                let current_time = match self.store.get(&id) {
                    Some(event) => event.time,
                    None => return Outcome::UnknownEvent { id },
                };
                let (time, time_fallback) = resolve_edit_time(time.as_deref(), current_time);
                let patch = EventPatch {
                    description,
                    time: Some(time),
                    date,
                    color,
                };
                match self.store.update(&id, patch) {
                    Some(event) => Outcome::Updated {
                        event,
                        time_fallback,
                    },
                    None => Outcome::UnknownEvent { id },
                }
            }
            Intent::DeleteEvent { id } => match self.store.remove(&id) {
                Some(event) => Outcome::Deleted { event },
                None => Outcome::UnknownEvent { id },
            },
            Intent::NavigateMonth { step } => {
                let anchor = match step {
                    MonthStep::Next => self.navigator.next_month(),
                    MonthStep::Previous => self.navigator.previous_month(),
                };
                Outcome::MonthChanged { anchor }
            }
            Intent::SelectDate { date } => {
                self.selected = Some(date);
                Outcome::DaySelected {
                    date,
                    events: self.store.events_for(date).to_vec(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Color;
    use chrono::{Datelike, NaiveTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn session() -> Session {
        Session::new(day(1))
    }

    fn create(session: &mut Session, date: NaiveDate, description: &str, time: Option<&str>) -> Event {
        let outcome = session.apply(Intent::CreateEvent {
            date,
            description: description.to_string(),
            time: time.map(str::to_string),
            color: Color::Blue,
        });
        match outcome {
            Outcome::Created { event, .. } => event,
            other => panic!("expected Created, got {other:?}"),
        }
    }

    // --- create ---

    #[test]
    fn created_events_show_up_on_their_date() {
        let mut session = session();
        create(&mut session, day(1), "Lunch", Some("12:00"));

        let events = session.store().events_for(day(1));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "12:00 - Lunch");
    }

    #[test]
    fn malformed_create_time_falls_back_to_noon() {
        let mut session = session();
        let outcome = session.apply(Intent::CreateEvent {
            date: day(14),
            description: "Lunch".to_string(),
            time: Some("25:99".to_string()),
            color: Color::Blue,
        });
        match outcome {
            Outcome::Created {
                event,
                time_fallback,
            } => {
                assert_eq!(event.time, at(12, 0));
                assert!(time_fallback);
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    // --- edit ---

    #[test]
    fn edits_apply_only_the_given_fields() {
        let mut session = session();
        let event = create(&mut session, day(14), "Lunch", Some("09:30"));

        let outcome = session.apply(Intent::EditEvent {
            id: event.id,
            description: Some("Brunch".to_string()),
            time: None,
            date: None,
            color: None,
        });
        match outcome {
            Outcome::Updated {
                event,
                time_fallback,
            } => {
                assert_eq!(event.description, "Brunch");
                assert_eq!(event.time, at(9, 30));
                assert!(!time_fallback);
            }
            other => panic!("expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn malformed_edit_time_keeps_the_previous_time() {
        let mut session = session();
        let event = create(&mut session, day(14), "Lunch", Some("09:30"));

        let outcome = session.apply(Intent::EditEvent {
            id: event.id,
            description: None,
            time: Some("25:99".to_string()),
            date: None,
            color: None,
        });
        match outcome {
            Outcome::Updated {
                event,
                time_fallback,
            } => {
                assert_eq!(event.time, at(9, 30));
                assert!(time_fallback);
            }
            other => panic!("expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn edits_can_move_an_event_to_another_date() {
        let mut session = session();
        let event = create(&mut session, day(14), "Movable", None);

        session.apply(Intent::EditEvent {
            id: event.id,
            description: None,
            time: None,
            date: Some(day(15)),
            color: None,
        });

        assert!(session.store().events_for(day(14)).is_empty());
        assert_eq!(session.store().events_for(day(15)).len(), 1);
    }

    #[test]
    fn editing_an_unknown_id_reports_unknown_event() {
        let mut session = session();
        let event = create(&mut session, day(14), "Gone", None);
        session.apply(Intent::DeleteEvent { id: event.id });

        let outcome = session.apply(Intent::EditEvent {
            id: event.id,
            description: Some("Ghost".to_string()),
            time: None,
            date: None,
            color: None,
        });
        assert_eq!(outcome, Outcome::UnknownEvent { id: event.id });
    }

    // --- delete ---

    #[test]
    fn deleting_twice_reports_unknown_the_second_time() {
        let mut session = session();
        let event = create(&mut session, day(14), "Lunch", None);

        let first = session.apply(Intent::DeleteEvent { id: event.id });
        assert!(matches!(first, Outcome::Deleted { .. }));

        let second = session.apply(Intent::DeleteEvent { id: event.id });
        assert_eq!(second, Outcome::UnknownEvent { id: event.id });
        assert!(session.store().is_empty());
    }

    // --- navigation / selection ---

    #[test]
    fn navigating_forward_and_back_restores_the_month() {
        let mut session = session();
        session.apply(Intent::NavigateMonth {
            step: MonthStep::Next,
        });
        let outcome = session.apply(Intent::NavigateMonth {
            step: MonthStep::Previous,
        });
        match outcome {
            Outcome::MonthChanged { anchor } => {
                assert_eq!((anchor.year(), anchor.month()), (2024, 2));
                assert_eq!(session.anchor(), anchor);
            }
            other => panic!("expected MonthChanged, got {other:?}"),
        }
    }

    #[test]
    fn selecting_a_date_lists_its_events_in_insertion_order() {
        let mut session = session();
        create(&mut session, day(14), "Late", Some("15:00"));
        create(&mut session, day(14), "Early", Some("09:00"));

        let outcome = session.apply(Intent::SelectDate { date: day(14) });
        match outcome {
            Outcome::DaySelected { date, events } => {
                assert_eq!(date, day(14));
                let descriptions: Vec<_> =
                    events.iter().map(|e| e.description.as_str()).collect();
                assert_eq!(descriptions, ["Late", "Early"]);
            }
            other => panic!("expected DaySelected, got {other:?}"),
        }
        assert_eq!(session.selected_date(), Some(day(14)));
    }
}
