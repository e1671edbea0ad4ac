use std::path::Path;

use anyhow::Result;
use callcomposer_core::config::ComposerConfig;
use callcomposer_core::{Composition, compose};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    config: &ComposerConfig,
    request_path: &Path,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let request = super::load_request(config, request_path)?;
    let composition = compose(&request, now, &config.render_options());

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&composition))?);
        return Ok(());
    }

    println!("{}", "Schedule".bold());
    match composition.display_window() {
        Some((start, end)) => {
            println!("  Starts:    {}", start.render());
            println!("  Ends:      {}", end.render());
        }
        None => println!("  {}", "Add a date to see the schedule".yellow()),
    }
    println!("  Timezone:  {}", composition.timezone_label);

    println!();
    println!("{}", "Participants".bold());
    if composition.participants.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for participant in &composition.participants {
        println!("  {}", participant.render());
    }

    if composition.is_resolved() {
        println!();
        println!("{}", "Briefing".bold());
        println!("{}", composition.briefing);

        println!();
        println!("{}", format!("Invite ({})", composition.filename).bold());
        print!("{}", composition.calendar.dimmed());
    }

    Ok(())
}

fn to_json(composition: &Composition) -> serde_json::Value {
    let window = composition.display_window().map(|(start, end)| {
        serde_json::json!({
            "start": { "date": start.date, "time": start.time },
            "end": { "date": end.date, "time": end.time },
        })
    });

    serde_json::json!({
        "resolved": composition.is_resolved(),
        "timezone_label": composition.timezone_label,
        "window": window,
        "participants": composition.participants,
        "filename": composition.filename,
        "briefing": composition.briefing,
        "calendar": composition.calendar,
    })
}
