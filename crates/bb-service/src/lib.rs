//! bb-service
//!
//! Exposes zero-knowledge proof generation and verification over HTTP by
//! orchestrating the Barretenberg `bb` CLI and an external witness
//! engine. Each request runs in its own uniquely-named temp workspace;
//! there is no shared mutable state between requests.

pub mod config;
pub mod handlers;
pub mod models;
pub mod prover;
pub mod runner;
pub mod verifier;
pub mod witness;
pub mod workspace;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use models::{ProveRequest, ProveResponse, VerifyRequest, VerifyResponse};
pub use prover::Prover;
pub use verifier::Verifier;
pub use witness::{CommandWitnessExecutor, WitnessExecutor};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/prove", post(handlers::prove_handler))
        .route("/verify", post(handlers::verify_handler))
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
