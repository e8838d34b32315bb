use std::{env, io, net::SocketAddr};

use avatar_relay::{
    app::{envy::Envy, router::build_router, util::logging::init_tracing},
    AppState,
};
use tokio::signal;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> io::Result<()> {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();

    // tracing
    init_tracing("avatar_relay=info,tower_http=info");

    let envy = Envy::from_env().map_err(|e| {
        tracing::error!("failed to load configuration: {}", e);
        io::Error::other(format!("configuration error: {}", e))
    })?;

    // properties
    let port = envy.port.unwrap_or(DEFAULT_PORT);
    tracing::info!(
        app_env = %envy.app_env,
        upstream = %envy.segmind_api_url,
        cors_origin = %envy.cors_origin,
        "configuration loaded"
    );

    let state = AppState::new(envy);

    // app
    let app = build_router(state).map_err(|e| {
        tracing::error!("invalid CORS_ORIGIN: {}", e);
        io::Error::other(format!("configuration error: {}", e))
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let server = axum::Server::try_bind(&addr).map_err(|e| {
        tracing::error!("failed to bind to {}: {}", addr, e);
        io::Error::other(e)
    })?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(io::Error::other)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
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

    tracing::info!("shutdown signal received");
}
