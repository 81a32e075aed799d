//! Wire representation of proof artifacts.
//!
//! Proof and public-input payloads cross the JSON boundary as arrays of
//! integers 0-255. Internally they are opaque binary buffers: no
//! compression, no checksum. Integrity is established by the downstream
//! cryptographic verification step, not here.

use std::fmt;
use std::ops::Deref;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary buffer that serializes as a JSON array of integers.
///
/// Deserialization also accepts an already-binary value, so a proof that
/// traversed the wire once (prove response) decodes identically when it
/// comes back (verify request).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireBytes(Vec<u8>);

impl WireBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        WireBytes(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for WireBytes {
    fn from(bytes: Vec<u8>) -> Self {
        WireBytes(bytes)
    }
}

impl Deref for WireBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for WireBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

struct WireBytesVisitor;

impl<'de> Visitor<'de> for WireBytesVisitor {
    type Value = WireBytes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte buffer or a sequence of integers 0-255")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireBytes, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<u64>()? {
            let byte = u8::try_from(value).map_err(|_| {
                de::Error::invalid_value(
                    de::Unexpected::Unsigned(value),
                    &"an integer between 0 and 255",
                )
            })?;
            bytes.push(byte);
        }
        Ok(WireBytes(bytes))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<WireBytes, E> {
        Ok(WireBytes(v.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<WireBytes, E> {
        Ok(WireBytes(v))
    }
}

impl<'de> Deserialize<'de> for WireBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<WireBytes, D::Error> {
        deserializer.deserialize_any(WireBytesVisitor)
    }
}

/// Proof artifact as it appears on the wire.
///
/// The bb CLI mode does not separate public inputs from the serialized
/// proof blob, so `publicInputs` is empty on proofs generated by this
/// service. The field is kept so proofs produced elsewhere still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofData {
    pub proof: WireBytes,
    #[serde(rename = "publicInputs", default)]
    pub public_inputs: WireBytes,
}
