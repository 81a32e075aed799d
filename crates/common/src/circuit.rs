//! Compiled circuit artifact types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Named witness inputs for one execution of a circuit. The shape is
/// circuit-specific and is not validated beyond structural presence.
pub type InputMap = HashMap<String, Value>;

/// Compiled circuit artifact as produced by the Noir toolchain.
///
/// The artifact is opaque to this service: it is validated structurally,
/// written to disk for the external tools, and never persisted beyond the
/// request that carried it. Unknown fields are preserved so the file the
/// prover reads matches what the caller compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    pub bytecode: String,
    pub abi: CircuitAbi,
    pub debug_symbols: String,
    pub file_map: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// ABI section of a compiled circuit: an ordered sequence of typed
/// parameter descriptors, kept opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitAbi {
    pub parameters: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Structural validation of a circuit value from a request body.
///
/// Checks presence and JSON types only; no semantic or cryptographic
/// validation happens here.
pub fn validate(circuit: &Value) -> Result<()> {
    let obj = match circuit.as_object() {
        Some(obj) => obj,
        None => return Err(Error::Validation("circuit must be an object".into())),
    };

    if !obj.get("bytecode").is_some_and(Value::is_string) {
        return Err(Error::Validation("circuit.bytecode must be a string".into()));
    }

    let abi = obj
        .get("abi")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::Validation("circuit.abi must be an object".into()))?;
    if !abi.get("parameters").is_some_and(Value::is_array) {
        return Err(Error::Validation(
            "circuit.abi.parameters must be an array".into(),
        ));
    }

    if !obj.get("debug_symbols").is_some_and(Value::is_string) {
        return Err(Error::Validation(
            "circuit.debug_symbols must be a string".into(),
        ));
    }

    if !obj.get("file_map").is_some_and(Value::is_object) {
        return Err(Error::Validation("circuit.file_map must be an object".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_circuit() -> Value {
        json!({
            "bytecode": "b",
            "abi": { "parameters": [] },
            "debug_symbols": "d",
            "file_map": {}
        })
    }

    #[test]
    fn test_minimal_circuit_valid() {
        assert!(validate(&minimal_circuit()).is_ok());
    }

    #[test]
    fn test_each_missing_field_rejected() {
        for field in ["bytecode", "abi", "debug_symbols", "file_map"] {
            let mut circuit = minimal_circuit();
            circuit.as_object_mut().unwrap().remove(field);
            assert!(validate(&circuit).is_err(), "missing {field} accepted");
        }
    }

    #[test]
    fn test_each_mistyped_field_rejected() {
        for (field, bad) in [
            ("bytecode", json!(42)),
            ("abi", json!("not an object")),
            ("debug_symbols", json!([])),
            ("file_map", json!("not a map")),
        ] {
            let mut circuit = minimal_circuit();
            circuit[field] = bad;
            assert!(validate(&circuit).is_err(), "mistyped {field} accepted");
        }
    }

    #[test]
    fn test_missing_abi_parameters_rejected() {
        let mut circuit = minimal_circuit();
        circuit["abi"] = json!({ "parameters": "not an array" });
        assert!(validate(&circuit).is_err());

        circuit["abi"] = json!({});
        assert!(validate(&circuit).is_err());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let mut value = minimal_circuit();
        value["hash"] = json!(12345);
        value["abi"]["return_type"] = json!(null);

        let circuit: Circuit = serde_json::from_value(value.clone()).unwrap();
        let round_tripped = serde_json::to_value(&circuit).unwrap();
        assert_eq!(round_tripped["hash"], json!(12345));
        assert!(round_tripped["abi"].as_object().unwrap().contains_key("return_type"));
    }

    #[test]
    fn test_non_object_circuit_rejected() {
        assert!(validate(&json!("nope")).is_err());
        assert!(validate(&json!(null)).is_err());
    }
}
