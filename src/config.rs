//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <file>`, else `$XDG_CONFIG_HOME/parceldepot/parceldepot.toml`
//! 3. Environment variables: `PARCELDEPOT_*` prefix
//! 4. Command-line flags (applied by the caller)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::resolve_station;

/// Unified configuration for parceldepot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Seed for pickup code generation (random per run when unset)
    pub seed: Option<u64>,
    /// Station used when the shell's station prompt is left empty
    pub default_station: Option<String>,
}

/// Raw settings for intermediate parsing (unknown keys rejected).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub seed: Option<u64>,
    pub default_station: Option<String>,
}

/// Get the XDG config directory for parceldepot.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "parceldepot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("parceldepot.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        let file = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => global_config_path().filter(|path| path.exists()),
        };
        if let Some(path) = file {
            debug!("load: config file {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            seed: overlay.seed.or(self.seed),
            default_station: overlay
                .default_station
                .clone()
                .or_else(|| self.default_station.clone()),
        }
    }

    /// Apply PARCELDEPOT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PARCELDEPOT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get_int("seed") {
            Ok(val) => {
                settings.seed = Some(u64::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("seed must not be negative: {val}"),
                })?);
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("default_station") {
            settings.default_station = Some(val);
        }

        Ok(settings)
    }

    /// Resolve `default_station` to a known station name (number or name accepted).
    fn validate(mut self) -> Result<Self, ApplicationError> {
        if let Some(station) = self.default_station.take() {
            let resolved = resolve_station(&station).ok_or_else(|| ApplicationError::Config {
                message: format!("unknown default_station: {station}"),
            })?;
            self.default_station = Some(resolved.to_string());
        }
        Ok(self)
    }

    /// Command-line seed takes precedence over every other layer.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# parceldepot configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/parceldepot/parceldepot.toml (or --config <file>)
#   Env:    PARCELDEPOT_* environment variables
#   Flags:  --seed

# Fixed seed for reproducible pickup codes
# seed = 42

# Station preselected in the shell (number or name)
# default_station = "North Gate Station"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_where_set() {
        let base = Settings {
            seed: Some(1),
            default_station: Some("West Gate Station".into()),
        };
        let merged = base.merge_with(&RawSettings {
            seed: Some(9),
            default_station: None,
        });
        assert_eq!(merged.seed, Some(9));
        assert_eq!(merged.default_station.as_deref(), Some("West Gate Station"));
    }

    #[test]
    fn given_station_number_when_validating_then_resolves_to_name() {
        let settings = Settings {
            seed: None,
            default_station: Some("2".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(settings.default_station.as_deref(), Some("North Gate Station"));
    }

    #[test]
    fn given_unknown_station_when_validating_then_config_error() {
        let err = Settings {
            seed: None,
            default_station: Some("Harbour".into()),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_cli_seed_when_applied_then_overrides() {
        let settings = Settings {
            seed: Some(1),
            default_station: None,
        };
        assert_eq!(settings.clone().with_seed(None).seed, Some(1));
        assert_eq!(settings.with_seed(Some(5)).seed, Some(5));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.seed.is_none());
        assert!(raw.default_station.is_none());
    }
}
