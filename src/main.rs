use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

mod auth;
mod config;
mod extract;
mod models;
mod recipes;

use auth::{Authenticator, TokenAuthenticator};
use config::Config;
use models::{CallableError, CallableErrorBody, CallableRequest, CallableResponse, ExtractionRequest};

#[derive(Clone)]
struct AppState {
    authenticator: Arc<dyn Authenticator>,
    delay: Duration,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let authenticator = TokenAuthenticator::new(config.tokens.clone());
    if authenticator.is_empty() {
        tracing::warn!("RECIPE_API_TOKENS is empty; every extractRecipe call will be rejected");
    }

    let state = AppState {
        authenticator: Arc::new(authenticator),
        delay: config.delay,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extractRecipe", post(extract_recipe_endpoint))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn extract_recipe_endpoint(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let caller = state.authenticator.authenticate(&headers);
    let request = parse_callable(&body);

    match extract::extract_recipe(&request, caller.as_ref(), state.delay).await {
        Ok(result) => (StatusCode::OK, Json(CallableResponse { result })).into_response(),
        Err(e) => {
            use extract::ExtractionError;
            let status = match &e {
                ExtractionError::Unauthenticated => StatusCode::UNAUTHORIZED,
            };
            tracing::warn!("rejected extractRecipe call: {}", e);
            let body = CallableError {
                error: CallableErrorBody {
                    status: e.status(),
                    message: e.to_string(),
                },
            };
            (status, Json(body)).into_response()
        }
    }
}

/// Malformed payloads fall through as an empty request rather than an error.
fn parse_callable(body: &[u8]) -> ExtractionRequest {
    match serde_json::from_slice::<CallableRequest>(body) {
        Ok(callable) => callable.data,
        Err(e) => {
            tracing::debug!("unreadable callable payload, treating as empty: {}", e);
            ExtractionRequest::default()
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to register SIGTERM handler: {}", e);
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
