//! Biblioteca - console library management system

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca::{
    audit::AuditLog,
    bootstrap,
    config::AppConfig,
    console::Console,
    db::{self, ConnectError},
    repository::Repository,
    services::Services,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteca={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting biblioteca v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool; connection failures are fatal here,
    // with a distinct diagnostic and exit status for a missing database.
    let pool = match db::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e @ ConnectError::DatabaseMissing(_)) => {
            eprintln!("{}", e);
            eprintln!("Create the database file first, or enable database.create_if_missing.");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to database");

    // First-run provisioning: schema and default accounts
    bootstrap::ensure_schema(&pool)
        .await
        .context("Failed to create database schema")?;

    let repository = Repository::new(pool);
    let audit = AuditLog::new(config.audit.path.clone());

    let created = bootstrap::seed_default_accounts(&repository, &audit)
        .await
        .context("Failed to seed default accounts")?;
    if created > 0 {
        tracing::info!(created, "seeded default accounts");
    }

    let services = Services::new(repository, audit);
    let console = Console::new(services);
    console.run().await?;

    Ok(())
}
