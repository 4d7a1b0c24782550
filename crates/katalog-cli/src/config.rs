//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--store`, `--no-color`; applied at the call-site)
//! 2. Environment variables: `KATALOG__<SECTION>__<KEY>`, e.g.
//!    `KATALOG__DISPLAY__CURRENCY=EUR`
//! 3. Config file (`--config` path, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable prefix; `__` separates both prefix and nesting.
const ENV_PREFIX: &str = "KATALOG";
const ENV_SEPARATOR: &str = "__";

/// File name used for the product store when `store.path` is not set.
const DEFAULT_STORE_FILE: &str = "products.json";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Product persistence.
    pub store: StoreConfig,
    /// Product id generation.
    pub ids: IdsConfig,
    /// Price display.
    pub display: DisplayConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file sink.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Store file for the `json` backend. Defaults to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Local JSON file.
    #[default]
    Json,
    /// Process-local; nothing survives the invocation.
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    pub strategy: IdStrategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label printed after every price.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "TL".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, logs are also appended to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// `config_file` is the path the user passed via `--config`. An explicit
    /// file must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        if required && !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.katalog.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "katalog", "katalog")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".katalog.toml"))
    }

    /// Where the JSON store lives: `override_path`, then `store.path`, then
    /// the platform data directory.
    pub fn store_path(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.store.path {
            return path.clone();
        }
        ProjectDirs::from("com", "katalog", "katalog")
            .map(|d| d.data_dir().join(DEFAULT_STORE_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.store.backend, StoreBackend::Json);
        assert_eq!(cfg.ids.strategy, IdStrategy::Uuid);
        assert_eq!(cfg.display.currency, "TL");
        assert!(!cfg.output.no_color);
        assert!(cfg.logging.file.is_none());
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("none.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\ncurrency = \"EUR\"\n\n[ids]\nstrategy = \"timestamp\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.display.currency, "EUR");
        assert_eq!(cfg.ids.strategy, IdStrategy::Timestamp);
        assert_eq!(cfg.store.backend, StoreBackend::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nbackend = \"json\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[("KATALOG__STORE__BACKEND", "memory")]),
        )
        .unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nbackend = \"postgres\"\n").unwrap();

        assert!(AppConfig::load_from(&path, true, no_env()).is_err());
    }

    #[test]
    fn store_path_precedence() {
        let mut cfg = AppConfig::default();
        cfg.store.path = Some(PathBuf::from("/srv/katalog.json"));

        assert_eq!(
            cfg.store_path(Some(Path::new("/tmp/override.json"))),
            PathBuf::from("/tmp/override.json")
        );
        assert_eq!(cfg.store_path(None), PathBuf::from("/srv/katalog.json"));

        cfg.store.path = None;
        assert!(cfg.store_path(None).ends_with(DEFAULT_STORE_FILE));
    }

    #[test]
    fn default_config_serializes_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[display]"));
        assert!(text.contains("currency = \"TL\""));
    }
}
