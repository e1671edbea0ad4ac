//! Timezone presets and lookups.

pub use chrono_tz::Tz;

/// A preset timezone offered to users, with a human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    pub label: &'static str,
    pub id: &'static str,
}

/// Common zones, in the order they are offered.
pub const TIMEZONE_OPTIONS: &[TimezoneOption] = &[
    TimezoneOption { label: "UTC", id: "UTC" },
    TimezoneOption { label: "Eastern Time (US & Canada)", id: "America/New_York" },
    TimezoneOption { label: "Central Time (US & Canada)", id: "America/Chicago" },
    TimezoneOption { label: "Mountain Time (US & Canada)", id: "America/Denver" },
    TimezoneOption { label: "Pacific Time (US & Canada)", id: "America/Los_Angeles" },
    TimezoneOption { label: "United Kingdom", id: "Europe/London" },
    TimezoneOption { label: "Central Europe", id: "Europe/Berlin" },
    TimezoneOption { label: "India Standard Time", id: "Asia/Kolkata" },
    TimezoneOption { label: "Singapore", id: "Asia/Singapore" },
    TimezoneOption { label: "Australia (Sydney)", id: "Australia/Sydney" },
];

/// Call lengths offered to users, in minutes.
pub const DURATION_OPTIONS: &[u32] = &[15, 30, 45, 60, 75, 90, 120];

pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_DURATION_MINUTES: u32 = 45;

/// Human label for a zone id, or the id itself when it is not a preset.
pub fn timezone_label(id: &str) -> &str {
    TIMEZONE_OPTIONS
        .iter()
        .find(|option| option.id == id)
        .map(|option| option.label)
        .unwrap_or(id)
}

/// Parse an IANA zone identifier.
pub fn parse_timezone(id: &str) -> Option<Tz> {
    id.trim().parse::<Tz>().ok()
}

/// The zone of the machine we are running on, falling back to UTC.
pub fn host_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => parse_timezone(&name).unwrap_or_else(|| {
            tracing::warn!(zone = %name, "unrecognized host timezone, using UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::warn!(error = %e, "could not determine host timezone, using UTC");
            Tz::UTC
        }
    }
}
