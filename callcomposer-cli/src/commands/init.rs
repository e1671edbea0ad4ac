use std::path::Path;

use anyhow::{Context, Result};
use callcomposer_core::CallRequest;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

pub fn run(path: &Path) -> Result<()> {
    write_sample(path, Utc::now())?;

    println!("{}", format!("  Created: {}", path.display()).green());
    println!(
        "{}",
        format!("  Edit it, then run: callcomposer preview {}", path.display()).dimmed()
    );

    Ok(())
}

/// Write the sample request, dated at `now` (UTC).
fn write_sample(path: &Path, now: DateTime<Utc>) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists, not overwriting it", path.display());
    }

    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%H:%M").to_string();
    let content = CallRequest::sample(&date, &time)
        .to_toml()
        .map_err(|e| anyhow::anyhow!(e))?;

    std::fs::write(path, content)
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(())
}
