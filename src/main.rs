use crate::config::Config;
use crate::dataset::Dataset;
use crate::responses::error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use env_logger::{Builder, Env, Target};

mod analysis;
mod config;
mod dataset;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Load once; every request reads the same immutable snapshot.
    let dataset = match Dataset::load(&config.data_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Could not load dataset: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} listings from {} (fingerprint {})",
        dataset.len(),
        dataset.source(),
        dataset.fingerprint()
    );

    let addr = config.addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(dataset, config);

    log::info!("Starting server at http://{addr}");

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("Request failed: {err}");
            error_response(err)
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
