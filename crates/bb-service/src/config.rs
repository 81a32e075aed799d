//! Configuration for the bb-service

use std::env;
use std::path::PathBuf;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the Barretenberg `bb` binary. A bare command name is
    /// resolved through `PATH`.
    pub bb_path: PathBuf,

    /// Command used to execute a circuit into a witness blob.
    pub witness_cmd: PathBuf,

    /// Root directory under which per-request workspaces are created.
    pub workspace_root: PathBuf,

    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// every key.
    pub fn from_env() -> Self {
        let bb_path = env::var("BB_PATH").unwrap_or_else(|_| "bb".to_string());
        let witness_cmd =
            env::var("WITNESS_CMD").unwrap_or_else(|_| "noir-execute".to_string());
        let workspace_root = env::var("BB_WORKSPACE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());
        let host = env::var("BB_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("BB_SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            bb_path: PathBuf::from(bb_path),
            witness_cmd: PathBuf::from(witness_cmd),
            workspace_root,
            host,
            port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bb_path: PathBuf::from("bb"),
            witness_cmd: PathBuf::from("noir-execute"),
            workspace_root: env::temp_dir(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}
