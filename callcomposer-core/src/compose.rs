//! One full pass of the pipeline over a request.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::briefing::render_briefing;
use crate::ics::{RenderOptions, invite_filename, render_calendar_document_with};
use crate::participant::{Participant, parse_participants};
use crate::request::CallRequest;
use crate::schedule::{DisplayTime, ResolvedSchedule, resolve_schedule_in};
use crate::timezone::{host_timezone, timezone_label};

/// Everything derived from a single request.
///
/// Nothing here is cached: a changed request means a fresh `Composition`.
#[derive(Debug, Clone)]
pub struct Composition {
    pub participants: Vec<Participant>,
    pub schedule: Option<ResolvedSchedule>,
    pub timezone_label: String,
    /// Calendar document, empty when unresolved
    pub calendar: String,
    /// Plain-text briefing, empty when unresolved
    pub briefing: String,
    pub filename: String,
}

impl Composition {
    pub fn is_resolved(&self) -> bool {
        self.schedule.is_some()
    }

    /// Start and end display strings, if there is a schedule.
    pub fn display_window(&self) -> Option<(DisplayTime, DisplayTime)> {
        self.schedule
            .as_ref()
            .map(|s| (s.display_start(), s.display_end()))
    }
}

/// Run the pipeline with the host's own timezone.
pub fn compose(request: &CallRequest, now: DateTime<Utc>, options: &RenderOptions) -> Composition {
    compose_in(host_timezone(), request, now, options)
}

/// Run the pipeline with an explicit host zone.
pub fn compose_in(
    host: Tz,
    request: &CallRequest,
    now: DateTime<Utc>,
    options: &RenderOptions,
) -> Composition {
    let participants = parse_participants(&request.attendees);
    let schedule = resolve_schedule_in(
        host,
        &request.date,
        &request.time,
        request.duration_minutes,
        &request.timezone,
    );

    let calendar =
        render_calendar_document_with(request, schedule.as_ref(), &participants, now, options);
    let briefing = render_briefing(request, schedule.as_ref(), &participants);

    tracing::debug!(
        resolved = schedule.is_some(),
        participants = participants.len(),
        "composed call"
    );

    Composition {
        timezone_label: timezone_label(request.timezone.trim()).to_string(),
        filename: invite_filename(&request.title),
        participants,
        schedule,
        calendar,
        briefing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn sample_request_composes() {
        let request = CallRequest::sample("2024-03-01", "10:00");
        let composition = compose_in(Tz::UTC, &request, now(), &RenderOptions::default());

        assert!(composition.is_resolved());
        assert_eq!(composition.participants.len(), 3);
        assert_eq!(composition.timezone_label, "Eastern Time (US & Canada)");
        assert_eq!(composition.filename, "weekly-product-call.ics");
        assert!(composition.calendar.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(composition.briefing.starts_with("Weekly Product Call\n\n"));

        let (start, end) = composition.display_window().unwrap();
        assert_eq!(start.time, "5:00 AM");
        assert_eq!(end.time, "5:45 AM");
    }

    #[test]
    fn unresolved_request_still_parses_participants() {
        let request = CallRequest {
            date: String::new(),
            ..CallRequest::sample("", "")
        };
        let composition = compose_in(Tz::UTC, &request, now(), &RenderOptions::default());

        assert!(!composition.is_resolved());
        assert!(composition.display_window().is_none());
        assert_eq!(composition.participants.len(), 3);
        assert_eq!(composition.calendar, "");
        assert_eq!(composition.briefing, "");
    }

    #[test]
    fn unknown_timezone_label_is_the_id() {
        let request = CallRequest {
            timezone: "Europe/Paris".to_string(),
            ..CallRequest::sample("2024-03-01", "10:00")
        };
        let composition = compose_in(Tz::UTC, &request, now(), &RenderOptions::default());
        assert_eq!(composition.timezone_label, "Europe/Paris");
    }
}
