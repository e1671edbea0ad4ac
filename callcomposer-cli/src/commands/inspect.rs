use std::path::Path;

use anyhow::{Context, Result};
use callcomposer_core::ics::inspect_calendar_document;

use crate::render::Render;

pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;

    let invite = inspect_calendar_document(&content)
        .with_context(|| format!("{} does not contain a calendar event", file.display()))?;

    println!("{}", invite.render());

    Ok(())
}
