use crate::api::HttpOrderApi;
use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};

mod api;
mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod screens;
mod state;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    telemetry::setup_tracing();

    // 1️⃣ Read configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Client for the external order API
    let api = match HttpOrderApi::new(&config.backend_url, config.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Order API client setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    info!(%addr, backend = %api.base_url(), "Starting admin panel");

    let state = AppState::new(config, Arc::new(api));

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
