pub mod circuit;
pub mod error;
pub mod wire;

pub use circuit::{Circuit, CircuitAbi, InputMap};
pub use error::{Error, Result};
pub use wire::{ProofData, WireBytes};
