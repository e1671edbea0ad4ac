use anyhow::Result;
use callcomposer_core::config::ComposerConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let config_path = ComposerConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;

    if init {
        if config_path.exists() {
            println!("{}", "Config file already exists".dimmed());
        } else {
            ComposerConfig::create_default_config(&config_path)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", format!("Created {}", config_path.display()).green());
        }
    }

    let config = ComposerConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!(
        "  Output:  {}",
        config
            .output_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string())
    );

    println!("{}", "Defaults".bold());
    println!("  PRODID:    {}", config.prodid);
    if let Some(ref tz) = config.default_timezone {
        println!("  Timezone:  {}", tz);
    }
    if let Some(minutes) = config.default_duration_minutes {
        println!("  Duration:  {} min", minutes);
    }
    if let Some(ref name) = config.organizer_name {
        println!("  Host:      {}", name);
    }
    if let Some(ref email) = config.organizer_email {
        println!("  Email:     {}", email);
    }

    Ok(())
}
