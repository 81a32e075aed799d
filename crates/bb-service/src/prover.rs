//! Proof generation pipeline.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use bb_common::{Circuit, Error, InputMap, ProofData, Result, WireBytes};
use tracing::{debug, info};

use crate::config::Config;
use crate::runner;
use crate::witness::WitnessExecutor;
use crate::workspace::{Role, WorkspaceManager};

/// Orchestrates one proof generation: workspace, circuit and witness
/// artifacts, the `bb prove` invocation, and the proof read-back.
pub struct Prover {
    bb_path: PathBuf,
    workspaces: WorkspaceManager,
    witness: Arc<dyn WitnessExecutor>,
}

impl Prover {
    pub fn new(config: &Config, witness: Arc<dyn WitnessExecutor>) -> Self {
        Self {
            bb_path: config.bb_path.clone(),
            workspaces: WorkspaceManager::new(&config.workspace_root),
            witness,
        }
    }

    /// Generate a proof for the circuit against the given inputs.
    ///
    /// Steps are strictly sequential; each depends on the previous
    /// step's artifact. The workspace is removed on every exit path when
    /// it drops at the end of this call.
    pub async fn prove(&self, circuit: &Circuit, input: &InputMap) -> Result<ProofData> {
        let workspace = self.workspaces.acquire(Role::Proof).await?;

        let circuit_path = workspace.circuit_path();
        tokio::fs::write(&circuit_path, serde_json::to_vec(circuit)?).await?;

        let witness = self.witness.execute(circuit, input).await?;
        debug!("witness obtained ({} bytes)", witness.len());

        let witness_path = workspace.witness_path();
        tokio::fs::write(&witness_path, &witness).await?;

        let out_dir = workspace.mkdir("target").await?;
        let args: Vec<&OsStr> = vec![
            "prove".as_ref(),
            "--scheme".as_ref(),
            "ultra_honk".as_ref(),
            "-b".as_ref(),
            circuit_path.as_os_str(),
            "-w".as_ref(),
            witness_path.as_os_str(),
            "-o".as_ref(),
            out_dir.as_os_str(),
        ];
        runner::run(&self.bb_path, &args).await?;

        // The tool's naming convention: exactly one file named `proof`
        // inside the output directory it was handed.
        let proof_path = out_dir.join("proof");
        let proof = tokio::fs::read(&proof_path).await.map_err(|e| {
            Error::PostCondition(format!(
                "prover reported success but no proof artifact was readable at {}: {e}",
                proof_path.display()
            ))
        })?;

        info!("proof generated ({} bytes)", proof.len());

        // The CLI mode does not separate public inputs from the
        // serialized proof blob, so publicInputs stays empty.
        Ok(ProofData {
            proof: proof.into(),
            public_inputs: WireBytes::default(),
        })
    }
}
