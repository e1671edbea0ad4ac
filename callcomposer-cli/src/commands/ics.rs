use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use callcomposer_core::compose;
use callcomposer_core::config::ComposerConfig;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

pub fn run(
    config: &ComposerConfig,
    request_path: &Path,
    out: Option<PathBuf>,
    stdout: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    let request = super::load_request(config, request_path)?;
    let composition = compose(&request, now, &config.render_options());

    if !composition.is_resolved() {
        println!(
            "{}",
            "Nothing to export yet: the request needs a valid date (YYYY-MM-DD)".yellow()
        );
        return Ok(());
    }

    if stdout {
        print!("{}", composition.calendar);
        return Ok(());
    }

    let path = output_path(out, config.output_dir(), &composition.filename);
    std::fs::write(&path, &composition.calendar)
        .with_context(|| format!("Could not write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote invite");
    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}

/// Explicit `--out` wins, then the configured directory, then the cwd.
fn output_path(out: Option<PathBuf>, output_dir: Option<PathBuf>, filename: &str) -> PathBuf {
    match (out, output_dir) {
        (Some(out), _) => out,
        (None, Some(dir)) => dir.join(filename),
        (None, None) => PathBuf::from(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn output_path_precedence() {
        assert_eq!(
            output_path(
                Some(PathBuf::from("x.ics")),
                Some(PathBuf::from("/tmp")),
                "standup.ics"
            ),
            PathBuf::from("x.ics")
        );
        assert_eq!(
            output_path(None, Some(PathBuf::from("/tmp")), "standup.ics"),
            PathBuf::from("/tmp/standup.ics")
        );
        assert_eq!(
            output_path(None, None, "standup.ics"),
            PathBuf::from("standup.ics")
        );
    }

    #[test]
    fn writes_invite_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("call.toml");
        std::fs::write(
            &request_path,
            "title = \"Standup\"\ndate = \"2024-03-01\"\ntime = \"09:00\"\ntimezone = \"UTC\"\n",
        )
        .unwrap();

        let config = ComposerConfig {
            output_dir: Some(dir.path().to_path_buf()),
            ..ComposerConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        run(&config, &request_path, None, false, now).unwrap();

        let written = std::fs::read_to_string(dir.path().join("standup.ics")).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(written.contains("SUMMARY:Standup\r\n"));
    }

    #[test]
    fn unresolved_request_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("call.toml");
        std::fs::write(&request_path, "title = \"Standup\"\n").unwrap();

        let config = ComposerConfig {
            output_dir: Some(dir.path().to_path_buf()),
            ..ComposerConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        run(&config, &request_path, None, false, now).unwrap();

        assert!(!dir.path().join("standup.ics").exists());
    }
}
