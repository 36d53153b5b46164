use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "br";
const APP_ORG: &str = "FsaeTools";
const APP_NAME: &str = "FsaeTools";

/// Read-only tunables. Missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starting recycling balance shown on the Seja Green page.
    pub team_points: u32,
    /// Delay between a successful item submit and the jump to the listing.
    pub redirect_delay_ms: u64,
    pub toast_dismiss_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            team_points: 35,
            redirect_delay_ms: 1_000,
            toast_dismiss_secs: 6,
        }
    }
}

impl AppConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn toast_dismiss(&self) -> Duration {
        Duration::from_secs(self.toast_dismiss_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Serde(#[from] SerdeError),
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn parse_config(raw: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(raw) => parse_config(&raw).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Loads `config.json` from the platform config directory.
pub fn load_config() -> AppConfig {
    let Some(path) = config_file() else {
        tracing::debug!("no config directory on this platform; using defaults");
        return AppConfig::default();
    };

    match read_config(&path) {
        Ok(Some(config)) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring config: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(r#"{ "team_points": 80 }"#).expect("valid json");
        assert_eq!(config.team_points, 80);
        assert_eq!(config.redirect_delay(), Duration::from_secs(1));
        assert_eq!(config.toast_dismiss(), Duration::from_secs(6));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            parse_config("{ team_points: }"),
            Err(ConfigError::Serde(_))
        ));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("fsae-tools-no-such-config.json");
        assert!(matches!(read_config(&path), Ok(None)));
    }
}
