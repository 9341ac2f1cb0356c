use carnet_service::{
    auth::jwt::JwtService,
    config::AppConfig,
    db,
    middleware::AppState,
    routes,
    services::{AuthService, CardService, MemberService},
    telemetry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    telemetry::init_telemetry(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Membership card service starting...");

    let db_pool = db::create_pool(&config.database).await?;
    db::run_migrations(&db_pool).await?;

    tracing::info!("Database initialized");

    // Signing secret loaded once; immutable for the process lifetime
    let jwt_service = Arc::new(JwtService::from_config(&config)?);

    let auth_service = Arc::new(AuthService::new(
        db_pool.clone(),
        jwt_service.clone(),
        &config,
    )?);
    let card_service = Arc::new(CardService::new(db_pool.clone()));
    let member_service = Arc::new(MemberService::new(
        db_pool.clone(),
        Arc::new(config.clone()),
    )?);

    let app_state = Arc::new(AppState {
        config: config.clone(),
        db: db_pool,
        jwt_service,
        auth_service,
        card_service,
        member_service,
    });

    let app = routes::create_router(app_state);

    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.graceful_shutdown_timeout_secs))
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }

    tokio::time::sleep(tokio::time::Duration::from_secs(timeout_secs)).await;
    tracing::warn!("Graceful shutdown timeout reached, forcing exit");
}
