//! Proof verification pipeline.

use std::ffi::OsStr;
use std::path::PathBuf;

use bb_common::{Circuit, ProofData, Result};
use tracing::{debug, warn};

use crate::config::Config;
use crate::runner;
use crate::workspace::{Role, WorkspaceManager};

/// Orchestrates one verification: workspace, circuit and proof
/// artifacts, `bb write_vk`, then `bb verify`.
pub struct Verifier {
    bb_path: PathBuf,
    workspaces: WorkspaceManager,
}

impl Verifier {
    pub fn new(config: &Config) -> Self {
        Self {
            bb_path: config.bb_path.clone(),
            workspaces: WorkspaceManager::new(&config.workspace_root),
        }
    }

    /// Check a candidate proof against a circuit.
    ///
    /// Subprocess failure in either bb step resolves to `Ok(false)`
    /// rather than an error: an unverifiable circuit cannot certify
    /// anything, so the only safe verdict is "not valid". This is the
    /// opposite of the prove side, where a tool failure is fatal, and
    /// the asymmetry is deliberate. It also means a broken verifier
    /// toolchain is indistinguishable from an invalid proof at this
    /// layer; the exit status is the tool's only pass/fail channel.
    pub async fn verify(&self, circuit: &Circuit, proof: &ProofData) -> Result<bool> {
        let workspace = self.workspaces.acquire(Role::Verify).await?;

        let circuit_path = workspace.circuit_path();
        tokio::fs::write(&circuit_path, serde_json::to_vec(circuit)?).await?;

        let proof_path = workspace.proof_path();
        tokio::fs::write(&proof_path, proof.proof.as_slice()).await?;

        let vk_dir = workspace.mkdir("vk").await?;
        let write_vk_args: Vec<&OsStr> = vec![
            "write_vk".as_ref(),
            "--scheme".as_ref(),
            "ultra_honk".as_ref(),
            "-b".as_ref(),
            circuit_path.as_os_str(),
            "-o".as_ref(),
            vk_dir.as_os_str(),
        ];
        if let Err(e) = runner::run(&self.bb_path, &write_vk_args).await {
            warn!("verification key derivation failed, treating proof as invalid: {e}");
            return Ok(false);
        }

        let vk_path = vk_dir.join("vk");
        let verify_args: Vec<&OsStr> = vec![
            "verify".as_ref(),
            "--scheme".as_ref(),
            "ultra_honk".as_ref(),
            "-k".as_ref(),
            vk_path.as_os_str(),
            "-p".as_ref(),
            proof_path.as_os_str(),
        ];
        match runner::run(&self.bb_path, &verify_args).await {
            Ok(_) => Ok(true),
            Err(e) => {
                debug!("verify subcommand rejected the proof: {e}");
                Ok(false)
            }
        }
    }
}
