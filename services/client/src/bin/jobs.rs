//! services/client/src/bin/jobs.rs

use client_lib::{
    adapters::{FileSessionStore, HttpJobBoardAdapter},
    config::Config,
    error::ClientError,
    shell::{AppState, Shell},
};
use job_board_core::navigation::HOME_PATH;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    // Logs go to stderr so they never interleave with the rendered views.
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!(api = %config.api_base_url, "Configuration loaded. Starting client...");

    // --- 2. Initialize Service Adapters ---
    let http_client = HttpJobBoardAdapter::build_client(config.request_timeout)?;
    let api = Arc::new(HttpJobBoardAdapter::new(
        http_client,
        config.api_base_url.clone(),
    ));
    let session = Arc::new(FileSessionStore::new(config.session_file.clone()));
    info!(path = %session.path().display(), "Using session file.");

    // --- 3. Build the Shared AppState ---
    let app_state = AppState::new(config.clone(), api, session, HOME_PATH);

    // --- 4. Run the Shell ---
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    Shell::new(app_state).run(stdin, &mut stdout).await?;

    info!("Client shut down.");
    Ok(())
}
