//! Calendar document generation.

use chrono::{DateTime, Utc};

use super::text::{escape_text, fold_line};
use crate::participant::Participant;
use crate::request::CallRequest;
use crate::schedule::ResolvedSchedule;

pub const DEFAULT_PRODID: &str = "-//Call Composer//EN";

/// Knobs for calendar document output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// PRODID of the generating product
    pub prodid: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            prodid: DEFAULT_PRODID.to_string(),
        }
    }
}

/// Render a single-event calendar document with default options.
///
/// Returns an empty string when the schedule is unresolved.
pub fn render_calendar_document(
    request: &CallRequest,
    schedule: Option<&ResolvedSchedule>,
    participants: &[Participant],
    now: DateTime<Utc>,
) -> String {
    render_calendar_document_with(request, schedule, participants, now, &RenderOptions::default())
}

/// Render a single-event calendar document.
///
/// `now` feeds DTSTAMP and the UID, so a fixed `now` gives byte-identical
/// output. DTSTART/DTEND carry the host wall clock of the resolved instants,
/// labeled with the request's timezone.
pub fn render_calendar_document_with(
    request: &CallRequest,
    schedule: Option<&ResolvedSchedule>,
    participants: &[Participant],
    now: DateTime<Utc>,
    options: &RenderOptions,
) -> String {
    let Some(schedule) = schedule else {
        return String::new();
    };

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{}", options.prodid),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
        "BEGIN:VEVENT".into(),
        format!(
            "UID:{}",
            escape_text(&format!("{}-{}", now.timestamp_millis(), request.title))
        ),
        format!("DTSTAMP:{}", now.format("%Y%m%dT%H%M%SZ")),
        format!(
            "DTSTART;TZID={}:{}",
            schedule.timezone,
            schedule.start.format("%Y%m%dT%H%M%S")
        ),
        format!(
            "DTEND;TZID={}:{}",
            schedule.timezone,
            schedule.end.format("%Y%m%dT%H%M%S")
        ),
    ];

    if let Some(line) = organizer_line(request) {
        lines.push(line);
    }

    // Participants without an email only show up in the briefing
    for participant in participants {
        if let Some(email) = participant.email.as_deref().and_then(present) {
            lines.push(format!(
                "ATTENDEE;CN={}:MAILTO:{}",
                common_name(&participant.name),
                mail_address(email)
            ));
        }
    }

    lines.push(format!("SUMMARY:{}", escape_text(&request.title)));

    if let Some(description) = description_value(request) {
        lines.push(format!("DESCRIPTION:{description}"));
    }

    if let Some(url) = present(&request.meeting_url) {
        lines.push(format!("URL:{}", escape_text(url)));
    }

    lines.push("END:VEVENT".into());
    lines.push("END:VCALENDAR".into());

    let mut output = String::new();
    for line in &lines {
        output.push_str(&fold_line(line));
        output.push_str("\r\n");
    }
    output
}

/// Trimmed value, or `None` if there is nothing there.
fn present(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

fn organizer_line(request: &CallRequest) -> Option<String> {
    let email = present(&request.organizer_email)?;
    let name = present(&request.organizer_name).unwrap_or(email);
    Some(format!(
        "ORGANIZER;CN={}:MAILTO:{}",
        common_name(name),
        mail_address(email)
    ))
}

/// `CN` parameter value: escaped, and quoted when it holds a delimiter.
///
/// Parameter values cannot carry a DQUOTE at all, so those are dropped.
fn common_name(name: &str) -> String {
    let escaped = escape_text(&name.replace('"', ""));
    if escaped.contains([':', ';', ',']) {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Email for a `MAILTO:` value, with control characters removed.
fn mail_address(email: &str) -> String {
    email.chars().filter(|c| !c.is_control()).collect()
}

/// Agenda, notes and join link as one escaped DESCRIPTION value.
fn description_value(request: &CallRequest) -> Option<String> {
    let sections: Vec<String> = [
        ("Agenda", request.agenda.as_str()),
        ("Notes", request.notes.as_str()),
        ("Join", request.meeting_url.as_str()),
    ]
    .into_iter()
    .filter(|(_, body)| present(body).is_some())
    .map(|(label, body)| format!("{label}:\\n{}", escape_text(body)))
    .collect();

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\\n\\n"))
    }
}
