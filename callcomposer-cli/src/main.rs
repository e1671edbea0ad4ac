mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use callcomposer_core::config::ComposerConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "callcomposer")]
#[command(about = "Compose call briefings and calendar invites from a short description")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample call request to get started
    Init {
        /// Where to write the request (TOML)
        #[arg(default_value = "call.toml")]
        path: PathBuf,
    },
    /// Render the calendar invite (.ics) for a request
    Ics {
        /// Call request file (.toml or .json)
        request: PathBuf,

        /// Write to this path instead of <title-slug>.ics
        #[arg(short, long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print the invite instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Generation time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Print the plain-text briefing for a request
    Brief {
        /// Call request file (.toml or .json)
        request: PathBuf,
    },
    /// Show everything derived from a request
    Preview {
        /// Call request file (.toml or .json)
        request: PathBuf,

        /// Generation time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read back an .ics file
    Inspect {
        /// Calendar file to read
        file: PathBuf,
    },
    /// List preset timezones and call lengths
    Timezones,
    /// Show config location, or create a default config file
    Config {
        /// Create the config file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,callcomposer_core=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Ics {
            request,
            out,
            stdout,
            now,
        } => {
            let config = load_config()?;
            let now = commands::parse_now(now.as_deref())?;
            commands::ics::run(&config, &request, out, stdout, now)
        }
        Commands::Brief { request } => {
            let config = load_config()?;
            commands::brief::run(&config, &request)
        }
        Commands::Preview { request, now, json } => {
            let config = load_config()?;
            let now = commands::parse_now(now.as_deref())?;
            commands::preview::run(&config, &request, now, json)
        }
        Commands::Inspect { file } => commands::inspect::run(&file),
        Commands::Timezones => commands::timezones::run(),
        Commands::Config { init } => commands::config::run(init),
    }
}

fn load_config() -> Result<ComposerConfig> {
    ComposerConfig::load().map_err(|e| anyhow::anyhow!(e))
}
