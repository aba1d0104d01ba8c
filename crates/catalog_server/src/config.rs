//! Layered server configuration.
//!
//! Sources are merged in increasing precedence:
//! - Bundled defaults (include_str! from catalog.toml)
//! - `~/.config/catalog/catalog.toml`
//! - `./catalog.toml`
//! - An explicit file passed with `--config`
//! - `CATALOG__SECTION__KEY` environment variables
//!
//! Command-line flags are applied on top by the binary through the `with_*`
//! setters.

use catalog_error::{CatalogError, CatalogResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG: &str = include_str!("../catalog.toml");

/// Which content store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store, lost on restart
    #[default]
    Memory,
    /// PostgreSQL via diesel
    Postgres,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ServerSettings {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
}

impl ServerSettings {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Content store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct StoreSettings {
    /// Store backend
    #[serde(default)]
    backend: StoreBackend,
    /// PostgreSQL URL; DATABASE_URL is used when unset
    #[serde(default)]
    database_url: Option<String>,
    /// Maximum pooled connections
    #[serde(default = "default_pool_size")]
    pool_size: u32,
    /// JSON seed file for the memory store
    #[serde(default)]
    seed_file: Option<PathBuf>,
    /// Apply embedded migrations on startup
    #[serde(default = "default_run_migrations")]
    run_migrations: bool,
}

fn default_pool_size() -> u32 {
    10
}

fn default_run_migrations() -> bool {
    true
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct LoggingSettings {
    /// Filter directive used when RUST_LOG is unset
    level: String,
    /// Emit JSON log lines
    #[serde(default)]
    json: bool,
}

/// Complete server configuration.
///
/// # Examples
///
/// ```no_run
/// use catalog_server::CatalogConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CatalogConfig::load(None)?;
/// println!("listening on {}", config.server().bind_address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct CatalogConfig {
    /// HTTP listener
    server: ServerSettings,
    /// Content store
    store: StoreSettings,
    /// Logging
    logging: LoggingSettings,
}

impl CatalogConfig {
    /// Load configuration from a single TOML file, without defaults.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CatalogError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CatalogError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load the bundled defaults merged with every override source.
    ///
    /// `explicit` is a file named on the command line; unlike the home and
    /// working-directory files it must exist.
    pub fn load(explicit: Option<&Path>) -> CatalogResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("catalog").join("catalog.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("catalog").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CATALOG")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .map_err(|e| {
                CatalogError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CatalogError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The bundled defaults alone.
    pub fn bundled() -> CatalogResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| {
                CatalogError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }
}
