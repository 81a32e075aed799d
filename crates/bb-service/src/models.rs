//! Request and response models for the bb-service API

use bb_common::{Circuit, InputMap, ProofData};
use serde::{Deserialize, Serialize};

/// Request to generate a proof
#[derive(Debug, Deserialize)]
pub struct ProveRequest {
    /// Compiled circuit artifact
    pub circuit: Circuit,

    /// Witness inputs, keyed by parameter name
    pub input: InputMap,
}

/// Response from proof generation
#[derive(Debug, Serialize)]
pub struct ProveResponse {
    pub message: String,

    /// Generated proof with (empty) public inputs
    pub proof: ProofData,
}

/// Request to verify a proof
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Compiled circuit artifact
    pub circuit: Circuit,

    /// Candidate proof
    pub proof: ProofData,
}

/// Response from proof verification
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: String,

    /// Verdict from the verify subcommand
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}
