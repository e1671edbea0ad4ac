use anyhow::Result;
use callcomposer_core::timezone::{
    DEFAULT_DURATION_MINUTES, DEFAULT_TIMEZONE, DURATION_OPTIONS, TIMEZONE_OPTIONS,
};
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    println!("{}", "Timezones".bold());
    for option in TIMEZONE_OPTIONS {
        let marker = if option.id == DEFAULT_TIMEZONE { "*" } else { " " };
        println!("  {} {:<22} {}", marker, option.id, option.label.dimmed());
    }

    println!();
    println!("{}", "Call lengths (minutes)".bold());
    let lengths: Vec<String> = DURATION_OPTIONS
        .iter()
        .map(|m| {
            if *m == DEFAULT_DURATION_MINUTES {
                format!("{}*", m)
            } else {
                m.to_string()
            }
        })
        .collect();
    println!("  {}", lengths.join(", "));

    println!();
    println!("{}", "* default".dimmed());

    Ok(())
}
