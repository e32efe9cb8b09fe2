use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod likes;
mod responses;
mod router;
mod storage;
mod templates;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Create the database handle and apply the schema
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Build the catalog once for the lifetime of the process
    let state = AppState::new(config.catalog_size, db);
    tracing::info!(listings = state.catalog.len(), "catalog generated");

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
