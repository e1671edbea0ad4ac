//! Calendar document generation and parsing.
//!
//! Output follows RFC 5545: one VCALENDAR holding one VEVENT, escaped TEXT
//! values, CRLF line endings and 75-octet line folding.

mod generate;
mod parse;
mod text;

pub use generate::{
    DEFAULT_PRODID, RenderOptions, render_calendar_document, render_calendar_document_with,
};
pub use parse::{InspectedInvite, inspect_calendar_document};
pub use text::{escape_text, fold_line, unescape_text};

/// MIME type for the generated document.
pub const CALENDAR_MIME_TYPE: &str = "text/calendar;charset=utf-8";

/// File stem used when the title has nothing slug-worthy in it.
pub const FALLBACK_FILE_STEM: &str = "call-invite";

/// Filesystem-safe `.ics` file name for a call title.
///
/// Only ASCII letters and digits survive; every other run of characters
/// becomes a single `-`.
pub fn invite_filename(title: &str) -> String {
    let stem = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if stem.is_empty() {
        format!("{FALLBACK_FILE_STEM}.ics")
    } else {
        format!("{stem}.ics")
    }
}
