//! Command-line interface for the catalog binary.

use catalog_server::{CatalogConfig, StoreBackend};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Content catalog HTTP API.
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Content catalog HTTP API")]
#[command(version)]
pub struct Cli {
    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; `serve` runs when none is given.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Apply pending database migrations and exit
    #[cfg(feature = "postgres")]
    Migrate {
        /// PostgreSQL URL
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
}

/// Overrides for `serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Store backend
    #[arg(long, value_enum)]
    pub store: Option<StoreBackend>,

    /// JSON seed file for the memory store
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,
}

impl ServeArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(self, config: CatalogConfig) -> CatalogConfig {
        let mut server = config.server().clone();
        if let Some(host) = self.host {
            server = server.with_host(host);
        }
        if let Some(port) = self.port {
            server = server.with_port(port);
        }

        let mut store = config.store().clone();
        if let Some(backend) = self.store {
            store = store.with_backend(backend);
        }
        if let Some(seed) = self.seed {
            store = store.with_seed_file(Some(seed));
        }

        let mut logging = config.logging().clone();
        if self.json_logs {
            logging = logging.with_json(true);
        }

        config
            .with_server(server)
            .with_store(store)
            .with_logging(logging)
    }
}
