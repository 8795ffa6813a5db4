mod config;
mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "threads-web stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;

    let app = routes::app(&config, conf.leptos_options);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, api_base = config.api.base_url(), "threads-web listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
