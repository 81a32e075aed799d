//! bb-service
//!
//! REST API wrapping the Barretenberg prover/verifier CLI

use anyhow::{Context, Result};
use bb_service::{create_router, AppState, CommandWitnessExecutor, Config, Prover, Verifier};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bb_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    info!("Starting bb-service");
    info!("bb binary: {}", config.bb_path.display());
    info!("witness command: {}", config.witness_cmd.display());
    info!("workspace root: {}", config.workspace_root.display());

    let witness = Arc::new(CommandWitnessExecutor::new(&config.witness_cmd));

    let state = AppState {
        prover: Prover::new(&config, witness),
        verifier: Verifier::new(&config),
    };

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    info!("bb-service running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
