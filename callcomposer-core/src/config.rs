//! User configuration and request loading.

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ComposerError, ComposerResult};
use crate::ics::{DEFAULT_PRODID, RenderOptions};
use crate::request::CallRequest;
use crate::timezone::{DEFAULT_DURATION_MINUTES, DEFAULT_TIMEZONE};

/// Prefix for environment overrides, e.g. `CALLCOMPOSER_DEFAULT_TIMEZONE`.
const ENV_PREFIX: &str = "CALLCOMPOSER";

/// Global configuration at ~/.config/callcomposer/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ComposerConfig {
    /// PRODID written into calendar documents
    pub prodid: String,

    /// Timezone for requests that do not name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,

    /// Call length for requests that do not give one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,

    /// Where `.ics` files are written, `~` allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            prodid: DEFAULT_PRODID.to_string(),
            default_timezone: None,
            default_duration_minutes: None,
            organizer_name: None,
            organizer_email: None,
            output_dir: None,
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

impl ComposerConfig {
    pub fn config_path() -> ComposerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ComposerError::Config("Could not determine config directory".into()))?
            .join("callcomposer");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> ComposerResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) with `CALLCOMPOSER_*` environment overrides.
    pub fn load_from(path: &Path) -> ComposerResult<Self> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: Environment) -> ComposerResult<Self> {
        let config: ComposerConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ComposerError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            prodid: self.prodid.clone(),
        }
    }

    /// Output directory with `~` expanded, if configured.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned())
        })
    }

    /// Load a call request file (TOML or JSON, by extension).
    ///
    /// Fields the file leaves out fall back to this config, then to the
    /// built-in defaults.
    pub fn load_request(&self, path: &Path) -> ComposerResult<CallRequest> {
        let timezone = self
            .default_timezone
            .clone()
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let duration = self
            .default_duration_minutes
            .unwrap_or(DEFAULT_DURATION_MINUTES);

        let request_error =
            |e: ConfigError| ComposerError::Request(format!("{}: {e}", path.display()));

        let builder = Config::builder()
            .set_default("timezone", timezone)
            .and_then(|b| b.set_default("duration_minutes", i64::from(duration)))
            .and_then(|b| {
                b.set_default("organizer_name", self.organizer_name.clone().unwrap_or_default())
            })
            .and_then(|b| {
                b.set_default("organizer_email", self.organizer_email.clone().unwrap_or_default())
            })
            .map_err(request_error)?;

        let request: CallRequest = builder
            .add_source(File::from(path).required(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(request_error)?;

        Ok(request)
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ComposerResult<()> {
        let contents = format!(
            "\
# callcomposer configuration

# PRODID written into generated invites:
# prodid = \"{DEFAULT_PRODID}\"

# Used when a request leaves these out:
# default_timezone = \"{DEFAULT_TIMEZONE}\"
# default_duration_minutes = {DEFAULT_DURATION_MINUTES}
# organizer_name = \"Taylor Morgan\"
# organizer_email = \"taylor@example.com\"

# Where .ics files are written (defaults to the current directory):
# output_dir = \"~/Downloads\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
