//! Ephemeral per-request workspaces.
//!
//! Every pipeline invocation gets a fresh directory under the temp root,
//! named by a random uuid token. The token's entropy is the only
//! isolation mechanism between concurrent requests: no locks, no
//! coordination, just a namespace wide enough that collisions do not
//! happen in practice.

use std::path::{Path, PathBuf};

use bb_common::Result;
use tracing::{debug, warn};
use uuid::Uuid;

/// Which pipeline a workspace belongs to; part of the directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Proof,
    Verify,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Proof => "proof",
            Role::Verify => "verify",
        }
    }
}

/// Creates uniquely-named workspaces under a shared temp root.
#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    root: PathBuf,
}

impl WorkspaceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a fresh workspace directory for one pipeline invocation.
    pub async fn acquire(&self, role: Role) -> Result<Workspace> {
        let token = Uuid::new_v4().simple().to_string();
        let path = self.root.join(format!("bb-{}-{}", role.as_str(), token));
        tokio::fs::create_dir_all(&path).await?;
        debug!("acquired workspace {}", path.display());
        Ok(Workspace { path })
    }
}

impl Default for WorkspaceManager {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

/// An isolated directory scoped to exactly one pipeline invocation.
///
/// Dropping the workspace removes the directory and everything in it.
/// Removal failure is logged and swallowed: a leaked temp directory must
/// not fail a request that already produced its result.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the circuit artifact is written to.
    pub fn circuit_path(&self) -> PathBuf {
        self.path.join("circuit.json")
    }

    /// Path the witness blob is written to. The `.gz` suffix is the
    /// external tool's naming convention; the content is not necessarily
    /// compressed.
    pub fn witness_path(&self) -> PathBuf {
        self.path.join("witness.gz")
    }

    /// Path a candidate proof is written to for verification.
    pub fn proof_path(&self) -> PathBuf {
        self.path.join("proof")
    }

    /// Create a nested output directory. The external tool writes its
    /// artifacts into a directory it does not create itself.
    pub async fn mkdir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.path.join(name);
        tokio::fs::create_dir_all(&dir).await?;
        Ok(dir)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            warn!("failed to remove workspace {}: {}", self.path.display(), e);
        }
    }
}
