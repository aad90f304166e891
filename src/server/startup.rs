use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{Config, LogFormat},
    data::catalog::{CatalogRepository, CatalogSeedReport},
    error::AppError,
};

/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info` (`debug` when `DEBUG`
/// is set) with SeaORM and sqlx limited to warnings.
pub fn init_tracing(config: &Config) {
    let level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},sea_orm=warn,sqlx=warn")));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .init(),
        LogFormat::Text => registry.with(fmt::layer().compact()).init(),
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations. SQLite pools are limited to a single connection
/// so that request transactions serialize instead of failing on a locked database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);
    if config.database_url.starts_with("sqlite:") {
        opt.max_connections(1);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Seeds the resource catalog in a single transaction.
///
/// Safe to run on every start: rows whose ID already exists are left untouched.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<CatalogSeedReport, AppError> {
    let txn = db.begin().await?;
    let report = CatalogRepository::new(&txn).seed().await?;
    txn.commit().await?;

    tracing::info!(
        flavors_inserted = report.flavors_inserted,
        images_inserted = report.images_inserted,
        "Catalog seeded"
    );

    Ok(report)
}

/// Resolves once the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
