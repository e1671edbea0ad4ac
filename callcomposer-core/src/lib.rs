//! Core of callcomposer: turns a described call into a briefing and an invite.
//!
//! Everything here is a pure function of its inputs:
//! - `participant` parses free-text attendee lists
//! - `schedule` resolves date, time and duration into a time window
//! - `ics` renders (and reads back) the calendar document
//! - `briefing` renders the plain-text summary
//! - `compose` runs all of the above for one request
//!
//! The current time is always passed in by the caller.

pub mod briefing;
pub mod compose;
pub mod config;
pub mod error;
pub mod ics;
pub mod participant;
pub mod request;
pub mod schedule;
pub mod timezone;

pub use briefing::render_briefing;
pub use compose::{Composition, compose, compose_in};
pub use error::{ComposerError, ComposerResult};
pub use ics::{render_calendar_document, render_calendar_document_with};
pub use participant::{Participant, parse_participants};
pub use request::CallRequest;
pub use schedule::{DisplayTime, ResolvedSchedule, resolve_schedule, resolve_schedule_in};
