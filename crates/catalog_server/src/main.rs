//! Catalog server binary.

mod cli;

use catalog_server::{CatalogConfig, ObservabilityConfig, init_observability, run_server};
use clap::Parser;
use cli::{Cli, Command, ServeArgs};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CatalogConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let config = args.apply(config);
            init_logging(&config, cli.verbose)?;
            info!(
                address = %config.server().bind_address(),
                backend = ?config.store().backend(),
                "Starting catalog server"
            );
            run_server(&config, shutdown_signal()).await?;
        }
        #[cfg(feature = "postgres")]
        Command::Migrate { database_url } => {
            init_logging(&config, cli.verbose)?;
            migrate(database_url.or_else(|| config.store().database_url().clone())).await?;
        }
    }

    Ok(())
}

fn init_logging(config: &CatalogConfig, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.logging().level().clone()
    };
    init_observability(
        &ObservabilityConfig::new("catalog")
            .with_log_level(level)
            .with_json_logs(*config.logging().json()),
    )?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

#[cfg(feature = "postgres")]
async fn migrate(database_url: Option<String>) -> anyhow::Result<()> {
    use anyhow::Context;

    let url = database_url.context("No database URL; set DATABASE_URL or store.database_url")?;
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let pool = catalog_database::create_pool(&url, 1)?;
        let mut conn = pool.get().context("Failed to check out a connection")?;
        catalog_database::run_migrations(&mut conn)?;
        Ok(())
    })
    .await??;
    info!("Migrations complete");
    Ok(())
}
