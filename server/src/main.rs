mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "projectapp server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    if let Some(e) = config::dotenv_failure(dotenvy::dotenv()) {
        tracing::warn!(error = %e, "failed to load .env");
    }

    let config = ServerConfig::from_env()?;
    if config.dev_authenticated {
        tracing::warn!("DEV_AUTHENTICATED is set: every visitor is treated as signed in");
    }

    let state = state::AppState::from_config(&config);
    let app = routes::app(state)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "projectapp listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
