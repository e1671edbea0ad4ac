//! Plain-text briefing for pasting into chat or email.

use crate::participant::Participant;
use crate::request::CallRequest;
use crate::schedule::ResolvedSchedule;

/// Render the briefing. Empty when the schedule is unresolved.
///
/// Sections are separated by a blank line and left out when they have no
/// content. Text is used as typed, without calendar escaping.
pub fn render_briefing(
    request: &CallRequest,
    schedule: Option<&ResolvedSchedule>,
    participants: &[Participant],
) -> String {
    let Some(schedule) = schedule else {
        return String::new();
    };

    let (start, end) = schedule.briefing_window();

    let participant_list = participants
        .iter()
        .map(Participant::display)
        .collect::<Vec<_>>()
        .join("\n");

    let sections = [
        request.title.trim().to_string(),
        format!("When: {start} - {end}"),
        host_line(request),
        labeled_inline("Join", &request.meeting_url),
        labeled_block("Participants", &participant_list),
        labeled_block("Agenda", &request.agenda),
        labeled_block("Notes", &request.notes),
    ];

    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `Host: Name (email)`, degrading to whichever part is present.
fn host_line(request: &CallRequest) -> String {
    let name = request.organizer_name.trim();
    let email = request.organizer_email.trim();
    match (name.is_empty(), email.is_empty()) {
        (false, false) => format!("Host: {name} ({email})"),
        (false, true) => format!("Host: {name}"),
        (true, false) => format!("Host: {email}"),
        (true, true) => String::new(),
    }
}

fn labeled_inline(label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        String::new()
    } else {
        format!("{label}: {value}")
    }
}

fn labeled_block(label: &str, body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!("{label}:\n{}", body.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::parse_participants;
    use crate::schedule::resolve_schedule_in;
    use chrono_tz::Tz;
    use indoc::indoc;

    fn brief(request: &CallRequest) -> String {
        let schedule = resolve_schedule_in(
            Tz::UTC,
            &request.date,
            &request.time,
            request.duration_minutes,
            &request.timezone,
        );
        render_briefing(
            request,
            schedule.as_ref(),
            &parse_participants(&request.attendees),
        )
    }

    #[test]
    fn full_briefing() {
        let request = CallRequest {
            title: "Weekly Product Call".to_string(),
            organizer_name: "Taylor Morgan".to_string(),
            organizer_email: "taylor@example.com".to_string(),
            meeting_url: "https://meet.example.com/product-sync".to_string(),
            date: "2024-03-01".to_string(),
            time: "14:00".to_string(),
            duration_minutes: 45,
            timezone: "UTC".to_string(),
            agenda: "- Highlights\n- Blockers".to_string(),
            notes: "Join early; test audio, please.".to_string(),
            attendees: "Alex Chen <alex@example.com>\nJordan".to_string(),
        };

        assert_eq!(
            brief(&request),
            indoc! {"
                Weekly Product Call

                When: Friday, March 1, 2024 at 2:00 PM - 2:45 PM

                Host: Taylor Morgan (taylor@example.com)

                Join: https://meet.example.com/product-sync

                Participants:
                Alex Chen <alex@example.com>
                Jordan

                Agenda:
                - Highlights
                - Blockers

                Notes:
                Join early; test audio, please."}
        );
    }

    #[test]
    fn empty_sections_leave_no_trace() {
        let request = CallRequest {
            title: "Standup".to_string(),
            date: "2024-03-01".to_string(),
            time: "09:00".to_string(),
            duration_minutes: 30,
            timezone: "UTC".to_string(),
            ..CallRequest::default()
        };

        assert_eq!(
            brief(&request),
            "Standup\n\nWhen: Friday, March 1, 2024 at 9:00 AM - 9:30 AM"
        );
    }

    #[test]
    fn host_degrades_to_available_part() {
        let base = CallRequest {
            date: "2024-03-01".to_string(),
            timezone: "UTC".to_string(),
            ..CallRequest::default()
        };
        let name_only = CallRequest {
            organizer_name: "Taylor".to_string(),
            ..base.clone()
        };
        let email_only = CallRequest {
            organizer_email: "t@x.com".to_string(),
            ..base
        };

        assert!(brief(&name_only).contains("\n\nHost: Taylor"));
        assert!(brief(&email_only).contains("\n\nHost: t@x.com"));
    }

    #[test]
    fn briefing_is_not_escaped() {
        let request = CallRequest {
            title: "Plan; review, ship \\ done".to_string(),
            date: "2024-03-01".to_string(),
            timezone: "UTC".to_string(),
            ..CallRequest::default()
        };
        assert!(brief(&request).starts_with("Plan; review, ship \\ done\n\n"));
    }

    #[test]
    fn when_line_uses_selected_zone() {
        let request = CallRequest {
            title: "Sync".to_string(),
            date: "2024-03-01".to_string(),
            time: "09:00".to_string(),
            duration_minutes: 60,
            timezone: "Asia/Kolkata".to_string(),
            ..CallRequest::default()
        };
        assert!(
            brief(&request).contains("When: Friday, March 1, 2024 at 2:30 PM - 3:30 PM"),
            "Got:\n{}",
            brief(&request)
        );
    }

    #[test]
    fn unresolved_schedule_gives_empty_briefing() {
        let request = CallRequest {
            title: "Sync".to_string(),
            ..CallRequest::default()
        };
        assert_eq!(brief(&request), "");
    }
}
