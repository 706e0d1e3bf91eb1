//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns loading and saving; the core only ever sees the resolved
//! [`GeneratorSettings`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--output`, `--template`; applied by the commands)
//! 2. Environment variables prefixed `READMEGEN_` (e.g. `READMEGEN_AUTHOR`)
//! 3. Config file: `--config`, else `./config.yaml`, else the user config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, Environment, File, FileFormat};
use tracing::{debug, warn};

use readmegen_core::domain::GeneratorSettings;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

const ENV_PREFIX: &str = "READMEGEN";

/// Serializations a config file can use, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml`, `.json` or `.toml`, case-insensitive.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(CliError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn file_format(self) -> FileFormat {
        match self {
            Self::Yaml => FileFormat::Yaml,
            Self::Json => FileFormat::Json,
            Self::Toml => FileFormat::Toml,
        }
    }

    /// Serialize settings in this format.
    pub fn serialize(self, settings: &GeneratorSettings) -> CliResult<String> {
        let text = match self {
            Self::Yaml => serde_yaml::to_string(settings).map_err(config_error)?,
            Self::Json => serde_json::to_string_pretty(settings).map_err(config_error)? + "\n",
            Self::Toml => toml::to_string_pretty(settings).map_err(config_error)?,
        };
        Ok(text)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings handed to the core.
    pub settings: GeneratorSettings,
    /// The file the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `--config` path must exist. Without one, a missing file is
    /// not an error: a warning is logged and defaults apply.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let source = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => {
                return Err(CliError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            None => Self::discover(),
        };

        let mut builder = Config::builder();
        match &source {
            Some(path) => {
                let format = ConfigFormat::from_path(path)?;
                debug!(path = %path.display(), ?format, "loading config file");
                builder = builder.add_source(File::from(path.as_path()).format(format.file_format()));
            }
            None => warn!(
                "config file {DEFAULT_CONFIG_FILE} not found, using default settings"
            ),
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("exclude_files"),
        );

        let settings = builder
            .build()
            .and_then(|c| c.try_deserialize::<GeneratorSettings>())
            .map_err(|e| CliError::ConfigError {
                message: match &source {
                    Some(path) => format!("Failed to load {}: {e}", path.display()),
                    None => format!("Failed to read environment settings: {e}"),
                },
                source: Some(Box::new(e)),
            })?;

        Ok(Self { settings, source })
    }

    /// Write `settings` to `path` in the format its extension names.
    pub fn save(settings: &GeneratorSettings, path: &Path) -> CliResult<()> {
        let text = ConfigFormat::from_path(path)?.serialize(settings)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create config directory '{}'", parent.display()),
                source: e,
            })?;
        }
        std::fs::write(path, text).map_err(|e| CliError::IoError {
            message: format!("Failed to write config to '{}'", path.display()),
            source: e,
        })
    }

    /// Path of the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `./config.yaml`.
    pub fn user_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "readmegen", "readmegen")
            .map(|d| d.config_dir().join(DEFAULT_CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    fn discover() -> Option<PathBuf> {
        [PathBuf::from(DEFAULT_CONFIG_FILE), Self::user_config_path()]
            .into_iter()
            .find(|p| p.is_file())
    }
}

fn config_error(e: impl std::error::Error + Send + Sync + 'static) -> CliError {
    CliError::ConfigError {
        message: format!("Failed to serialize configuration: {e}"),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YAML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
    }

    #[test]
    fn unknown_extension_is_configuration_error() {
        let err = ConfigFormat::from_path(Path::new("settings.ini")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn save_and_load_each_format() {
        let dir = TempDir::new().unwrap();
        let settings = GeneratorSettings {
            project_name: "demo".into(),
            include_api_docs: true,
            max_depth: 5,
            ..Default::default()
        };

        for file in ["c.yaml", "c.json", "c.toml"] {
            let path = dir.path().join(file);
            AppConfig::save(&settings, &path).unwrap();
            let loaded = AppConfig::load(Some(&path)).unwrap();
            assert_eq!(loaded.settings.project_name, "demo", "{file}");
            assert!(loaded.settings.include_api_docs, "{file}");
            assert_eq!(loaded.settings.max_depth, 5, "{file}");
            assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
        }
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.yaml");
        std::fs::write(&path, "author: Ada\nunknown_key: ignored\n").unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.settings.author, "Ada");
        assert_eq!(loaded.settings.license, "MIT");
        assert!(loaded.settings.include_toc);
    }

    #[test]
    fn malformed_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn user_config_path_is_not_empty() {
        assert!(!AppConfig::user_config_path().as_os_str().is_empty());
    }
}
