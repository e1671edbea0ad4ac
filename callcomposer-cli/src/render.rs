//! Terminal rendering for callcomposer-core types.
//!
//! Extension traits that add colored output using owo_colors.

use callcomposer_core::Participant;
use callcomposer_core::ics::InspectedInvite;
use callcomposer_core::schedule::DisplayTime;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DisplayTime {
    fn render(&self) -> String {
        format!("{} {}", self.date, self.time.bold())
    }
}

impl Render for Participant {
    fn render(&self) -> String {
        match &self.email {
            Some(email) => format!("{} {}", self.name, format!("<{}>", email).dimmed()),
            None => format!("{} {}", self.name, "(no email, not invited)".dimmed()),
        }
    }
}

impl Render for InspectedInvite {
    fn render(&self) -> String {
        let mut lines = vec![format!("📅 {}", self.summary.bold())];

        let zone = self.tzid.as_deref().unwrap_or("floating");
        match &self.end {
            Some(end) => lines.push(format!("   {} → {} ({})", self.start, end, zone)),
            None => lines.push(format!("   {} ({})", self.start, zone)),
        }

        if let Some(ref organizer) = self.organizer {
            lines.push(format!("   Host: {}", organizer.render()));
        }
        for attendee in &self.attendees {
            lines.push(format!("   {} {}", "+".green(), attendee.render()));
        }
        if let Some(ref url) = self.url {
            lines.push(format!("   Join: {}", url));
        }
        if let Some(ref description) = self.description {
            lines.push(String::new());
            lines.extend(description.lines().map(|l| format!("   {}", l.dimmed())));
        }

        lines.join("\n")
    }
}
