mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    tracing::info!(
        app = %config.app_name,
        version = %config.app_version,
        env = %config.app_env,
        backend = %config.infra_backend,
        "Starting server"
    );

    let db = startup::connect_to_database(&config).await?;
    startup::seed_catalog(&db).await?;

    let state = AppState::new(
        db.clone(),
        config.infra_backend,
        config.app_name.clone(),
        config.app_version.clone(),
        config.app_env.clone(),
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}
