//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health endpoint, the compiled client bundle under `/pkg`, and
//! Leptos SSR for every other path under a single Axum router. The
//! `AuthState` from `AppState` is provided to each render; guard redirects
//! raised while rendering are turned into HTTP redirects by `leptos_axum`.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::state::auth::AuthState;

use crate::error::ServerError;
use crate::state::AppState;

/// Routes that do not go through Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: health check + static bundle + Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let leptos_router = ssr_routes(&leptos_options, state.auth);

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving client bundle");

    Ok(with_layers(
        base_routes()
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(pkg_dir)),
    ))
}

/// Leptos SSR for every declared route plus the catch-all, rendered with
/// `auth` in context.
fn ssr_routes(leptos_options: &LeptosOptions, auth: AuthState) -> Router {
    let routes = generate_route_list(client::app::App);

    Router::new()
        .leptos_routes_with_context(leptos_options, routes, move || provide_context(auth), {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), auth)
        })
        .with_state(leptos_options.clone())
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
