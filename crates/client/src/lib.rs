//! HTTP client for the bb-service
//!
//! Thin async wrapper over the service's `/prove`, `/verify` and
//! `/health` endpoints. Circuits stay opaque JSON on this side; proofs
//! use the shared wire types from `bb-common`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use bb_common::{InputMap, ProofData};

/// Errors from bb-service client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid response format")]
    InvalidResponse,
}

/// A compiled circuit artifact, kept as arbitrary JSON
pub type CompiledCircuit = serde_json::Value;

#[derive(Debug, Serialize)]
struct ProveRequest {
    circuit: CompiledCircuit,
    input: InputMap,
}

#[derive(Debug, Serialize)]
struct VerifyRequest {
    circuit: CompiledCircuit,
    proof: ProofData,
}

#[derive(Debug, Deserialize)]
struct ProveResponse {
    message: String,
    proof: ProofData,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    message: String,
    #[serde(rename = "isValid")]
    is_valid: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

impl ErrorResponse {
    fn into_service_error(self) -> ClientError {
        ClientError::Service(format!("{}: {}", self.error, self.details.unwrap_or_default()))
    }
}

/// Client for interacting with the bb-service
pub struct BbServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl BbServiceClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client pointing at the default local service
    pub fn new_localhost() -> Self {
        Self::new("http://localhost:3000".to_string())
    }

    /// Generate a proof for a circuit and input map
    pub async fn generate_proof(
        &self,
        circuit: CompiledCircuit,
        input: InputMap,
    ) -> Result<ProofData, ClientError> {
        let url = format!("{}/prove", self.base_url);
        debug!("requesting proof from {url}");

        let response = self
            .client
            .post(&url)
            .json(&ProveRequest { circuit, input })
            .send()
            .await?;

        if response.status().is_success() {
            let prove_response: ProveResponse = response.json().await?;
            debug!("service says: {}", prove_response.message);
            Ok(prove_response.proof)
        } else {
            let error_response: ErrorResponse = response
                .json()
                .await
                .map_err(|_| ClientError::InvalidResponse)?;
            Err(error_response.into_service_error())
        }
    }

    /// Verify a proof against a circuit
    pub async fn verify_proof(
        &self,
        circuit: CompiledCircuit,
        proof: ProofData,
    ) -> Result<bool, ClientError> {
        let url = format!("{}/verify", self.base_url);
        debug!("requesting verification from {url}");

        let response = self
            .client
            .post(&url)
            .json(&VerifyRequest { circuit, proof })
            .send()
            .await?;

        if response.status().is_success() {
            let verify_response: VerifyResponse = response.json().await?;
            debug!("service says: {}", verify_response.message);
            Ok(verify_response.is_valid)
        } else {
            let error_response: ErrorResponse = response
                .json()
                .await
                .map_err(|_| ClientError::InvalidResponse)?;
            Err(error_response.into_service_error())
        }
    }

    /// Check whether the service is reachable and healthy
    pub async fn health_check(&self) -> Result<bool, ClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

/// Load a compiled circuit definition from a JSON file.
///
/// Only checks that the essential fields are present; the artifact is
/// otherwise passed through to the service untouched.
pub fn load_circuit_definition(path: impl AsRef<Path>) -> Result<CompiledCircuit> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read circuit file {}", path.display()))?;

    let circuit: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse circuit JSON")?;

    let obj = circuit
        .as_object()
        .context("Circuit JSON must be an object")?;
    if !obj.contains_key("bytecode") || !obj.contains_key("abi") {
        anyhow::bail!("Circuit JSON must contain 'bytecode' and 'abi' fields");
    }

    Ok(circuit)
}
