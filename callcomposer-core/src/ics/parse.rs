//! Reading an invite back using the icalendar crate's parser.

use icalendar::parser::{Component, Property, read_calendar, unfold};

use super::text::unescape_text;
use crate::participant::Participant;

/// The parts of a calendar document worth showing to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedInvite {
    pub uid: Option<String>,
    pub summary: String,
    /// Raw DTSTART value (`YYYYMMDDTHHMMSS`)
    pub start: String,
    pub end: Option<String>,
    /// TZID parameter of DTSTART
    pub tzid: Option<String>,
    pub organizer: Option<Participant>,
    pub attendees: Vec<Participant>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Parse the first VEVENT of a calendar document.
///
/// Returns `None` if the text is not a calendar or has no event with a start.
pub fn inspect_calendar_document(content: &str) -> Option<InspectedInvite> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    let start_prop = vevent.find_prop("DTSTART")?;
    let tzid = start_prop
        .params
        .iter()
        .find(|p| p.key == "TZID")
        .and_then(|p| p.val.as_ref().map(|v| v.to_string()));

    let attendees = vevent
        .properties
        .iter()
        .filter(|p| p.name == "ATTENDEE")
        .map(parse_address)
        .collect();

    Some(InspectedInvite {
        uid: text_prop(vevent, "UID"),
        summary: text_prop(vevent, "SUMMARY").unwrap_or_else(|| "(No title)".to_string()),
        start: start_prop.val.to_string(),
        end: vevent.find_prop("DTEND").map(|p| p.val.to_string()),
        tzid,
        organizer: vevent.find_prop("ORGANIZER").map(parse_address),
        attendees,
        description: text_prop(vevent, "DESCRIPTION"),
        url: text_prop(vevent, "URL"),
    })
}

fn text_prop(vevent: &Component, name: &str) -> Option<String> {
    vevent
        .find_prop(name)
        .map(|p| unescape_text(p.val.as_ref()))
}

/// ORGANIZER/ATTENDEE: `CN` parameter plus a `mailto:` value.
fn parse_address(prop: &Property) -> Participant {
    let value = prop.val.as_ref();
    let email = match value.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("mailto:") => &value[7..],
        _ => value,
    }
    .to_string();

    let name = prop
        .params
        .iter()
        .find(|p| p.key == "CN")
        .and_then(|p| p.val.as_ref().map(|v| unescape_text(v.as_ref())))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.clone());

    Participant {
        name,
        email: Some(email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::render_calendar_document;
    use crate::participant::parse_participants;
    use crate::request::CallRequest;
    use crate::schedule::resolve_schedule_in;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;
    use indoc::indoc;

    #[test]
    fn reads_back_a_generated_invite() {
        let request = CallRequest {
            title: "Weekly Product Call".to_string(),
            organizer_name: "Taylor Morgan".to_string(),
            organizer_email: "taylor@example.com".to_string(),
            meeting_url: "https://meet.example.com/product-sync".to_string(),
            date: "2024-03-01".to_string(),
            time: "14:15".to_string(),
            duration_minutes: 45,
            timezone: "America/New_York".to_string(),
            agenda: "Review the roadmap and the launch checklist for the spring release".to_string(),
            attendees: "Alex Chen <alex@example.com>\nPriya Singh <priya@example.com>\nJordan"
                .to_string(),
            ..CallRequest::default()
        };
        let schedule = resolve_schedule_in(
            Tz::UTC,
            &request.date,
            &request.time,
            request.duration_minutes,
            &request.timezone,
        );
        let participants = parse_participants(&request.attendees);
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let ics = render_calendar_document(&request, schedule.as_ref(), &participants, now);

        let invite = inspect_calendar_document(&ics).expect("Should parse generated invite");

        assert_eq!(invite.summary, "Weekly Product Call");
        assert_eq!(invite.start, "20240301T141500");
        assert_eq!(invite.end.as_deref(), Some("20240301T150000"));
        assert_eq!(invite.tzid.as_deref(), Some("America/New_York"));
        assert_eq!(
            invite.organizer.and_then(|o| o.email).as_deref(),
            Some("taylor@example.com")
        );
        let emails: Vec<_> = invite
            .attendees
            .iter()
            .filter_map(|a| a.email.as_deref())
            .collect();
        assert_eq!(emails, vec!["alex@example.com", "priya@example.com"]);
        assert_eq!(invite.attendees[0].name, "Alex Chen");
        assert_eq!(
            invite.url.as_deref(),
            Some("https://meet.example.com/product-sync")
        );
        assert_eq!(
            invite.description.as_deref(),
            Some(
                "Agenda:\nReview the roadmap and the launch checklist for the spring release\n\nJoin:\nhttps://meet.example.com/product-sync"
            )
        );
    }

    #[test]
    fn names_with_delimiters_read_back_intact() {
        let request = CallRequest {
            title: "Sync".to_string(),
            organizer_name: "Ops: Robin".to_string(),
            organizer_email: "robin@x.com".to_string(),
            date: "2024-03-01".to_string(),
            time: "09:00".to_string(),
            duration_minutes: 30,
            timezone: "UTC".to_string(),
            attendees: "Smith; Jr <smith@x.com>\nKim <kim@x.com>".to_string(),
            ..CallRequest::default()
        };
        let schedule = resolve_schedule_in(Tz::UTC, "2024-03-01", "09:00", 30, "UTC");
        let participants = parse_participants(&request.attendees);
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let ics = render_calendar_document(&request, schedule.as_ref(), &participants, now);

        let invite = inspect_calendar_document(&ics).expect("Should parse generated invite");

        assert_eq!(
            invite.organizer,
            Some(Participant {
                name: "Ops: Robin".to_string(),
                email: Some("robin@x.com".to_string()),
            })
        );
        let names: Vec<&str> = invite.attendees.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Smith; Jr", "Kim"]);
        assert_eq!(invite.attendees[0].email.as_deref(), Some("smith@x.com"));
    }

    #[test]
    fn attendee_without_cn_uses_email_as_name() {
        let ics = indoc! {"
            BEGIN:VCALENDAR
            VERSION:2.0
            PRODID:TEST
            BEGIN:VEVENT
            UID:abc
            SUMMARY:Quick chat
            DTSTART:20240301T090000
            ATTENDEE:mailto:kim@example.com
            END:VEVENT
            END:VCALENDAR
        "};

        let invite = inspect_calendar_document(ics).expect("Should parse");
        assert_eq!(invite.tzid, None);
        assert_eq!(invite.end, None);
        assert_eq!(invite.attendees.len(), 1);
        assert_eq!(invite.attendees[0].name, "kim@example.com");
        assert_eq!(invite.attendees[0].email.as_deref(), Some("kim@example.com"));
    }

    #[test]
    fn not_a_calendar() {
        assert!(inspect_calendar_document("").is_none());
        assert!(inspect_calendar_document("hello world").is_none());
    }

    #[test]
    fn calendar_without_event() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:TEST\r\nEND:VCALENDAR\r\n";
        assert!(inspect_calendar_document(ics).is_none());
    }
}
