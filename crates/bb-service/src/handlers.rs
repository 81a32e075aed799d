//! API handlers for the bb-service

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bb_common::{circuit, Error};
use serde_json::Value;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{error, info};

use crate::{
    models::{ProveRequest, ProveResponse, VerifyRequest, VerifyResponse},
    prover::Prover,
    verifier::Verifier,
};

/// Shared application state
pub struct AppState {
    pub prover: Prover,
    pub verifier: Verifier,
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "error": self.message
        });
        if let Some(details) = self.details {
            body["details"] = Value::String(details);
        }

        (self.status, Json(body)).into_response()
    }
}

fn bad_request(reason: impl Into<String>) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        message: "Invalid request".to_string(),
        details: Some(reason.into()),
    }
}

/// Human-readable details for a pipeline failure. An error whose display
/// carries no text is normalized rather than surfaced raw.
fn details_for(err: &Error) -> String {
    let details = err.to_string();
    if details.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        details
    }
}

fn prove_error(err: Error) -> ApiError {
    let message = match &err {
        Error::Witness(_) => "Witness execution failed",
        // Distinct from a tool failure so operators can spot tool or
        // version drift: bb exited 0 but left no artifact behind.
        Error::PostCondition(_) => "Prover produced no proof artifact",
        _ => "Proof generation failed",
    };
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
        details: Some(details_for(&err)),
    }
}

fn verify_error(err: Error) -> ApiError {
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Proof verification failed".to_string(),
        details: Some(details_for(&err)),
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp,
        "service": "bb-service"
    }))
}

/// Generate a proof for a circuit and input map
pub async fn prove_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<ProveResponse>, ApiError> {
    let request = parse_prove_request(&payload)?;

    info!("generating proof");
    match state.prover.prove(&request.circuit, &request.input).await {
        Ok(proof) => {
            info!("proof generated successfully ({} bytes)", proof.proof.len());
            Ok(Json(ProveResponse {
                message: "Proof generated successfully".to_string(),
                proof,
            }))
        }
        Err(err) => {
            error!("proof generation failed: {err}");
            Err(prove_error(err))
        }
    }
}

/// Verify a proof against a circuit
pub async fn verify_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let request = parse_verify_request(&payload)?;

    info!("verifying proof ({} bytes)", request.proof.proof.len());
    match state
        .verifier
        .verify(&request.circuit, &request.proof)
        .await
    {
        Ok(is_valid) => {
            info!("proof verification completed: isValid={is_valid}");
            Ok(Json(VerifyResponse {
                message: "Proof verification completed".to_string(),
                is_valid,
            }))
        }
        Err(err) => {
            error!("proof verification failed before a verdict: {err}");
            Err(verify_error(err))
        }
    }
}

/// Structural validation of a prove request body.
///
/// Validation happens on the raw JSON value so a schema failure is a
/// 400, and no subprocess side effects occur before it passes.
fn parse_prove_request(payload: &Value) -> Result<ProveRequest, ApiError> {
    let circuit_value = payload
        .get("circuit")
        .ok_or_else(|| bad_request("circuit is required"))?;
    circuit::validate(circuit_value).map_err(|e| bad_request(e.to_string()))?;

    let input_value = payload
        .get("input")
        .ok_or_else(|| bad_request("input is required"))?;
    if !input_value.is_object() {
        return Err(bad_request("input must be an object"));
    }

    serde_json::from_value(payload.clone()).map_err(|e| bad_request(e.to_string()))
}

/// Structural validation of a verify request body.
fn parse_verify_request(payload: &Value) -> Result<VerifyRequest, ApiError> {
    let circuit_value = payload
        .get("circuit")
        .ok_or_else(|| bad_request("circuit is required"))?;
    circuit::validate(circuit_value).map_err(|e| bad_request(e.to_string()))?;

    let proof_value = payload
        .get("proof")
        .ok_or_else(|| bad_request("proof is required"))?;
    if proof_value.get("proof").is_none() {
        return Err(bad_request("proof.proof is required"));
    }

    serde_json::from_value(payload.clone()).map_err(|e| bad_request(e.to_string()))
}
