//! The caller-supplied description of a call.

use serde::{Deserialize, Serialize};

use crate::error::{ComposerError, ComposerResult};
use crate::timezone::{DEFAULT_DURATION_MINUTES, DEFAULT_TIMEZONE};

/// Everything a user types into the call form.
///
/// Optional text fields are plain strings: empty means absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallRequest {
    pub title: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub meeting_url: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, blank means 09:00
    pub time: String,
    pub duration_minutes: u32,
    /// IANA zone id, used as label and for display
    pub timezone: String,
    pub agenda: String,
    pub notes: String,
    /// One attendee per line (or comma separated)
    pub attendees: String,
}

impl Default for CallRequest {
    fn default() -> Self {
        CallRequest {
            title: String::new(),
            organizer_name: String::new(),
            organizer_email: String::new(),
            meeting_url: String::new(),
            date: String::new(),
            time: String::new(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            timezone: DEFAULT_TIMEZONE.to_string(),
            agenda: String::new(),
            notes: String::new(),
            attendees: String::new(),
        }
    }
}

impl CallRequest {
    /// A filled-in example request, dated `date`.
    pub fn sample(date: &str, time: &str) -> Self {
        CallRequest {
            title: "Weekly Product Call".to_string(),
            organizer_name: "Taylor Morgan".to_string(),
            organizer_email: "taylor@example.com".to_string(),
            meeting_url: "https://meet.example.com/product-sync".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            timezone: DEFAULT_TIMEZONE.to_string(),
            agenda: "- Share latest sprint highlights\n- Review open blockers\n- Confirm priorities for next iteration".to_string(),
            attendees: "Alex Chen <alex@example.com>\nPriya Singh <priya@example.com>\nJordan Lee <jordan@example.com>".to_string(),
            notes: "Join a few minutes early for audio checks.".to_string(),
        }
    }

    pub fn from_toml(content: &str) -> ComposerResult<Self> {
        toml::from_str(content).map_err(|e| ComposerError::Request(e.to_string()))
    }

    pub fn to_toml(&self) -> ComposerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ComposerError::Request(e.to_string()))
    }
}
