//! Free-text participant parsing.
//!
//! Attendee lists come straight from a text box, so this is a parser and not a
//! validator: every input produces some (possibly empty) list of participants.

use serde::{Deserialize, Serialize};

/// A call participant derived from one attendee entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, never empty (falls back to the email)
    pub name: String,
    /// Email address, if the entry carried one
    pub email: Option<String>,
}

impl Participant {
    /// Render as `Name <email>`, or just the name when there is no email.
    pub fn display(&self) -> String {
        match &self.email {
            Some(email) => format!("{} <{}>", self.name, email),
            None => self.name.clone(),
        }
    }

    /// Build a participant from a single trimmed, non-empty entry.
    fn from_entry(entry: &str) -> Self {
        if let Some((start, end)) = find_bracketed(entry) {
            let email = entry[start + 1..end].trim();
            let name = format!("{}{}", &entry[..start], &entry[end + 1..]);
            let name = name.trim();

            // A blank `< >` group is dropped from the name and carries no email
            match (name.is_empty(), email.is_empty()) {
                (_, false) => {
                    return Participant {
                        name: (if name.is_empty() { email } else { name }).to_string(),
                        email: Some(email.to_string()),
                    };
                }
                (false, true) => {
                    return Participant {
                        name: name.to_string(),
                        email: None,
                    };
                }
                (true, true) => {}
            }
        }

        if entry.contains('@') {
            return Participant {
                name: entry.to_string(),
                email: Some(entry.to_string()),
            };
        }

        Participant {
            name: entry.to_string(),
            email: None,
        }
    }
}

/// Parse an attendee list into participants.
///
/// Entries are separated by newlines or commas. Blank entries are dropped,
/// order is preserved and duplicates are kept.
pub fn parse_participants(text: &str) -> Vec<Participant> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(Participant::from_entry)
        .collect()
}

/// Locate the first `<...>` group with at least one character inside.
///
/// Returns the byte offsets of the `<` and the closing `>`. An unmatched `<`
/// yields `None` so the entry is treated as plain text.
fn find_bracketed(entry: &str) -> Option<(usize, usize)> {
    for (open, _) in entry.match_indices('<') {
        let close = open + 1 + entry[open + 1..].find('>')?;
        if close > open + 1 {
            return Some((open, close));
        }
    }
    None
}
