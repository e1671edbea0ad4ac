//! Turning a date, time of day and duration into a concrete time window.
//!
//! The typed date and time are interpreted in the *host* zone, not in the
//! selected call timezone. The selected timezone is only used as the TZID
//! label on the calendar document and for display formatting (pinned by
//! `naive_instant_keeps_typed_wall_clock` below).

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::timezone::{host_timezone, parse_timezone};

/// Time of day used when the request leaves it blank.
pub const DEFAULT_TIME: &str = "09:00";

/// A resolved start/end window for a call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSchedule {
    /// Start instant, expressed in the host zone it was interpreted in
    pub start: DateTime<Tz>,
    /// `start + duration`
    pub end: DateTime<Tz>,
    /// Selected IANA zone id (label and display zone)
    pub timezone: String,
}

/// Display strings for one instant: "Friday, March 1, 2024" and "9:00 AM".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    pub date: String,
    pub time: String,
}

/// Resolve a schedule, interpreting date and time in the host's zone.
pub fn resolve_schedule(
    date: &str,
    time: &str,
    duration_minutes: u32,
    timezone: &str,
) -> Option<ResolvedSchedule> {
    resolve_schedule_in(host_timezone(), date, time, duration_minutes, timezone)
}

/// Resolve a schedule with an explicit host zone.
///
/// Returns `None` when the date is blank or the date/time does not parse.
pub fn resolve_schedule_in(
    host: Tz,
    date: &str,
    time: &str,
    duration_minutes: u32,
    timezone: &str,
) -> Option<ResolvedSchedule> {
    let date = date.trim();
    if date.is_empty() {
        tracing::debug!("no date given, schedule unresolved");
        return None;
    }

    let time = match time.trim() {
        "" => DEFAULT_TIME,
        t => t,
    };

    let naive = match NaiveDateTime::parse_from_str(
        &format!("{date}T{time}:00"),
        "%Y-%m-%dT%H:%M:%S",
    ) {
        Ok(naive) => naive,
        Err(e) => {
            tracing::debug!(date, time, error = %e, "unparsable date/time, schedule unresolved");
            return None;
        }
    };

    let start = interpret_in(host, naive)?;
    let end = start + Duration::minutes(i64::from(duration_minutes));

    Some(ResolvedSchedule {
        start,
        end,
        timezone: timezone.trim().to_string(),
    })
}

/// Attach a zone to a wall-clock value.
///
/// Ambiguous times (clocks falling back) take the earlier instant. Times that
/// fall in a spring-forward gap are read with the offset in effect before the
/// gap, which pushes them past it.
fn interpret_in(zone: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(dt) = zone.from_local_datetime(&naive).earliest() {
        return Some(dt);
    }

    let before_gap = zone
        .offset_from_local_datetime(&(naive - Duration::hours(24)))
        .earliest()?
        .fix();
    let utc = naive - Duration::seconds(i64::from(before_gap.local_minus_utc()));
    Some(zone.from_utc_datetime(&utc))
}

impl ResolvedSchedule {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The zone used for display, UTC if the selected id is not a real zone.
    pub fn display_zone(&self) -> Tz {
        parse_timezone(&self.timezone).unwrap_or_else(|| {
            tracing::warn!(timezone = %self.timezone, "unknown timezone, displaying in UTC");
            Tz::UTC
        })
    }

    pub fn display_start(&self) -> DisplayTime {
        display_time(&self.start, self.display_zone())
    }

    pub fn display_end(&self) -> DisplayTime {
        display_time(&self.end, self.display_zone())
    }

    /// Start and end strings for a "When:" line.
    ///
    /// The start carries the full date ("Friday, March 1, 2024 at 9:00 AM"),
    /// the end only the time of day.
    pub fn briefing_window(&self) -> (String, String) {
        let start = self.display_start();
        let end = self.display_end();
        (format!("{} at {}", start.date, start.time), end.time)
    }
}

fn display_time(instant: &DateTime<Tz>, zone: Tz) -> DisplayTime {
    let local = instant.with_timezone(&zone);
    DisplayTime {
        date: local.format("%A, %B %-d, %Y").to_string(),
        time: local.format("%-I:%M %p").to_string(),
    }
}
