//! Heart Risk Server - Main Entry Point

use api::{init_logging, run_server, AppState, ServerConfig};
use risk_model::{ArtifactPaths, ModelContext};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Heart Risk Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load()?;
    info!("Artifact directory: {}", config.artifact_dir.display());

    // Artifacts load once here; failure is fatal before the server binds.
    let paths = ArtifactPaths::from_dir(&config.artifact_dir);
    let context = ModelContext::load(&paths)?;
    let state = Arc::new(AppState::new(context));

    run_server(&config.listen_addr, state).await?;

    Ok(())
}
