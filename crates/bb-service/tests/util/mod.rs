#![allow(dead_code)]

//! Shared helpers for the HTTP integration tests: fake `bb` scripts,
//! witness-executor stand-ins, and a router factory.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bb_common::{Circuit, Error, InputMap, Result};
use bb_service::{create_router, AppState, Config, Prover, Verifier, WitnessExecutor};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Witness executor returning a fixed blob.
pub struct StaticWitness(pub Vec<u8>);

#[async_trait]
impl WitnessExecutor for StaticWitness {
    async fn execute(&self, _circuit: &Circuit, _input: &InputMap) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

/// Witness executor that always rejects the input map.
pub struct FailingWitness(pub String);

#[async_trait]
impl WitnessExecutor for FailingWitness {
    async fn execute(&self, _circuit: &Circuit, _input: &InputMap) -> Result<Vec<u8>> {
        Err(Error::Witness(self.0.clone()))
    }
}

/// Fake bb covering the full pipeline: `prove` writes proof bytes
/// 1,2,3, `write_vk` writes a key, `verify` accepts.
pub const HAPPY_BB: &str = r#"#!/usr/bin/env bash
set -euo pipefail
cmd="$1"; shift
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
  esac
  shift
done
case "$cmd" in
  prove) printf '\x01\x02\x03' > "$out/proof" ;;
  write_vk) printf 'vk-bytes' > "$out/vk" ;;
  verify) ;;
esac
"#;

/// Fake bb whose `prove` exits 0 without writing any artifact.
pub const SILENT_PROVE_BB: &str = r#"#!/usr/bin/env bash
set -euo pipefail
exit 0
"#;

/// Fake bb whose `prove` fails loudly.
pub const FAILING_PROVE_BB: &str = r#"#!/usr/bin/env bash
set -euo pipefail
echo 'proving key generation blew up' >&2
exit 2
"#;

/// Fake bb whose `write_vk` fails; `prove` still works.
pub const FAILING_VK_BB: &str = r#"#!/usr/bin/env bash
set -euo pipefail
cmd="$1"; shift
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
  esac
  shift
done
case "$cmd" in
  prove) printf '\x01\x02\x03' > "$out/proof" ;;
  write_vk) echo 'vk derivation failed' >&2; exit 1 ;;
  verify) ;;
esac
"#;

/// Fake bb whose `verify` rejects every proof.
pub const REJECTING_VERIFY_BB: &str = r#"#!/usr/bin/env bash
set -euo pipefail
cmd="$1"; shift
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
  esac
  shift
done
case "$cmd" in
  prove) printf '\x01\x02\x03' > "$out/proof" ;;
  write_vk) printf 'vk-bytes' > "$out/vk" ;;
  verify) exit 1 ;;
esac
"#;

/// Fake bb that records every `prove` output directory to a log file,
/// one path per line.
pub fn recording_bb(log_path: &Path) -> String {
    format!(
        r#"#!/usr/bin/env bash
set -euo pipefail
cmd="$1"; shift
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
  esac
  shift
done
if [ "$cmd" = "prove" ]; then
  echo "$out" >> "{}"
  printf '\x01\x02\x03' > "$out/proof"
fi
"#,
        log_path.display()
    )
}

/// Write an executable script and return its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Build a router against a fake bb binary, a workspace root, and a
/// witness executor.
pub fn test_app(bb_path: &Path, workspace_root: &Path, witness: Arc<dyn WitnessExecutor>) -> Router {
    let config = Config {
        bb_path: bb_path.to_path_buf(),
        witness_cmd: PathBuf::from("unused-witness-cmd"),
        workspace_root: workspace_root.to_path_buf(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let state = AppState {
        prover: Prover::new(&config, witness),
        verifier: Verifier::new(&config),
    };

    create_router(state)
}

/// Minimal structurally-valid circuit value.
pub fn valid_circuit() -> Value {
    json!({
        "bytecode": "b",
        "abi": { "parameters": [] },
        "debug_symbols": "d",
        "file_map": {}
    })
}

/// POST a JSON body and return (status, decoded body).
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a workspace root holds no residual per-request
/// directories.
pub fn assert_no_residue(workspace_root: &Path) {
    let leftover: Vec<_> = fs::read_dir(workspace_root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("bb-"))
        .collect();
    assert!(leftover.is_empty(), "residual workspaces: {leftover:?}");
}
