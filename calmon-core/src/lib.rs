//! Core types and session logic for calmon.
//!
//! This crate provides everything the terminal front-end consumes:
//! - `Event` and the per-date `EventStore`
//! - `MonthGrid` for month layout geometry
//! - `Navigator` for month stepping
//! - `Intent`/`Outcome` and the `Session` that applies user intents

pub mod error;
pub mod event;
pub mod grid;
pub mod intent;
pub mod navigator;
pub mod session;
pub mod store;
pub mod time;

pub use error::{CalmonError, CalmonResult};
pub use event::{Color, Event, EventId};
pub use grid::MonthGrid;
pub use intent::{Intent, MonthStep, Outcome};
pub use navigator::Navigator;
pub use session::Session;
pub use store::{EventPatch, EventStore};
