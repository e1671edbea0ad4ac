use std::path::Path;

use anyhow::Result;
use callcomposer_core::config::ComposerConfig;
use callcomposer_core::{parse_participants, render_briefing, resolve_schedule};
use owo_colors::OwoColorize;

pub fn run(config: &ComposerConfig, request_path: &Path) -> Result<()> {
    let request = super::load_request(config, request_path)?;

    let participants = parse_participants(&request.attendees);
    let schedule = resolve_schedule(
        &request.date,
        &request.time,
        request.duration_minutes,
        &request.timezone,
    );

    let briefing = render_briefing(&request, schedule.as_ref(), &participants);
    if briefing.is_empty() {
        println!(
            "{}",
            "Nothing to share yet: the request needs a valid date (YYYY-MM-DD)".yellow()
        );
    } else {
        println!("{}", briefing);
    }

    Ok(())
}
