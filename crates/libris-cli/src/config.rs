//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_overrides`])
//! 2. Environment variables: `LIBRIS_<SECTION>__<KEY>`, e.g.
//!    `LIBRIS_STORAGE__DATA_DIR=/srv/books`
//! 3. Config file (TOML; `--config` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use libris_adapters::{DEFAULT_BOOKS_FILE, DEFAULT_USERS_FILE};

use crate::cli::global::GlobalArgs;
use crate::messages::Locale;

/// Environment variable prefix.
const ENV_PREFIX: &str = "LIBRIS";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the catalog files live.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive menu settings.
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub books_file: String,
    pub users_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from("."),
                books_file: DEFAULT_BOOKS_FILE.into(),
                users_file: DEFAULT_USERS_FILE.into(),
            },
            output: OutputConfig { no_color: false },
            ui: UiConfig {
                locale: Locale::default(),
            },
        }
    }
}

impl StorageConfig {
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(dir) = &args.data_dir {
            self.storage.data_dir = dir.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.libris.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "libris", "libris")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".libris.toml"))
    }
}
