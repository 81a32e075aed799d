//! Witness execution collaborator.
//!
//! Turning a circuit plus input map into a witness blob is an external
//! capability; the service only depends on this trait. Failures here are
//! classified as witness errors so callers can tell a bad input map
//! apart from a broken prover invocation.

use async_trait::async_trait;
use bb_common::{Circuit, Error, InputMap, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

use crate::runner;

/// Opaque capability that executes a circuit against witness inputs and
/// yields the binary witness blob consumed by the prover.
#[async_trait]
pub trait WitnessExecutor: Send + Sync {
    async fn execute(&self, circuit: &Circuit, input: &InputMap) -> Result<Vec<u8>>;
}

/// Witness executor backed by an external command.
///
/// The command is invoked as `<cmd> -b <circuit.json> -i <inputs.json>
/// -o <witness.gz>` against files staged in a private scratch directory.
pub struct CommandWitnessExecutor {
    command: PathBuf,
}

impl CommandWitnessExecutor {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl WitnessExecutor for CommandWitnessExecutor {
    async fn execute(&self, circuit: &Circuit, input: &InputMap) -> Result<Vec<u8>> {
        let scratch = tempfile::tempdir().map_err(Error::Io)?;
        let circuit_path = scratch.path().join("circuit.json");
        let inputs_path = scratch.path().join("inputs.json");
        let witness_path = scratch.path().join("witness.gz");

        tokio::fs::write(&circuit_path, serde_json::to_vec(circuit)?).await?;
        tokio::fs::write(&inputs_path, serde_json::to_vec(input)?).await?;

        let args: Vec<&OsStr> = vec![
            "-b".as_ref(),
            circuit_path.as_os_str(),
            "-i".as_ref(),
            inputs_path.as_os_str(),
            "-o".as_ref(),
            witness_path.as_os_str(),
        ];
        runner::run(&self.command, &args)
            .await
            .map_err(|e| Error::Witness(e.to_string()))?;

        debug!("witness engine completed");
        tokio::fs::read(&witness_path)
            .await
            .map_err(|e| Error::Witness(format!("witness engine produced no output: {e}")))
    }
}
