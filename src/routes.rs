//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves three things: the compiled WASM bundle under `/pkg`, a
//! liveness probe at `/healthz`, and the server-rendered application shell
//! for every other path. Routing between pages happens in the browser, so
//! every non-asset path renders the same shell.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use threads_client::app::shell;
use threads_client::config::{ApiConfig, BootConfig};

use crate::config::HostConfig;

/// Per-request inputs for rendering the shell.
#[derive(Clone)]
pub struct ShellState {
    pub options: LeptosOptions,
    pub api: ApiConfig,
}

pub fn app(config: &HostConfig, options: LeptosOptions) -> Router {
    let site_root = PathBuf::from(options.site_root.as_ref());
    let state = ShellState { options, api: config.api.clone() };

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(render_shell)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Server-render the shell with the validated API config in context.
async fn render_shell(State(state): State<ShellState>, request: Request<Body>) -> Response {
    let ShellState { options, api } = state;
    let boot = BootConfig(Ok(api.clone()));
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || provide_context(boot.clone()),
        move || shell(options.clone(), api.clone()),
    );
    handler(request).await.into_response()
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
