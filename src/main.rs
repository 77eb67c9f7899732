use crate::config::Config;
use crate::router::handle;
use crate::state::SnapshotState;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::parse();

    // Load once on startup. A failed load still starts the server; the report
    // route shows the failure and /reload-data can recover from it.
    let state = Arc::new(SnapshotState::new(data::load(&config.data)));

    let addr = config.addr;
    info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let data_path = config.data.clone();
    let result = server.serve(move |req, _info| match handle(req, &state, &data_path) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
