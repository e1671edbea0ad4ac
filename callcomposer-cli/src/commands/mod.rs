pub mod brief;
pub mod config;
pub mod ics;
pub mod init;
pub mod inspect;
pub mod preview;
pub mod timezones;

use std::path::Path;

use anyhow::{Context, Result};
use callcomposer_core::CallRequest;
use callcomposer_core::config::ComposerConfig;
use chrono::{DateTime, Utc};

/// Parse `--now`, or read the clock when it is not given.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now value \"{}\". Expected RFC 3339", s)),
        None => Ok(Utc::now()),
    }
}

/// Load a request file, filling gaps from the config.
pub fn load_request(config: &ComposerConfig, path: &Path) -> Result<CallRequest> {
    config
        .load_request(path)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Could not load call request {}", path.display()))
}
