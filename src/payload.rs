// src/payload.rs
//! The sealed payload, the only persisted artifact
//!
//! On the wire it is a JSON object with base64 byte fields:
//!
//! ```json
//! {"v":1,"salt":"…","iv":"…","data":"…","algo":"AES-256-CBC","padding":"PKCS7"}
//! ```
//!
//! [`Payload`] is the decoded form. Every constructor checks the version, the
//! algorithm and padding literals, and the byte lengths, so a value of this
//! type is always safe to hand to the cipher.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::consts::{BLOCK_SIZE, IV_LEN, PAYLOAD_VERSION, SALT_LEN};
use crate::enums::{CipherAlgorithm, PaddingScheme};
use crate::error::CodecError;

/// Field-for-field image of the JSON object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePayload {
    pub v: u32,
    pub salt: String,
    pub iv: String,
    pub data: String,
    pub algo: CipherAlgorithm,
    pub padding: PaddingScheme,
}

/// A validated, decoded payload. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WirePayload", into = "WirePayload")]
pub struct Payload {
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
    data: Vec<u8>,
}

impl Payload {
    /// Assemble a v1 payload from raw parts.
    ///
    /// Fails if `data` is empty or not a whole number of AES blocks.
    pub fn new(
        salt: [u8; SALT_LEN],
        iv: [u8; IV_LEN],
        data: Vec<u8>,
    ) -> Result<Self, CodecError> {
        if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
            return Err(CodecError::malformed(format!(
                "data is {} bytes, expected a non-zero multiple of {BLOCK_SIZE}",
                data.len()
            )));
        }
        Ok(Self { salt, iv, data })
    }

    pub fn version(&self) -> u32 {
        PAYLOAD_VERSION
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes256Cbc
    }

    pub fn padding(&self) -> PaddingScheme {
        PaddingScheme::Pkcs7
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    /// Ciphertext bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parse and validate serialized payload text.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let wire: WirePayload =
            serde_json::from_str(text).map_err(|e| CodecError::malformed(e.to_string()))?;
        Self::try_from(wire)
    }

    /// Parse and validate serialized payload bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let wire: WirePayload =
            serde_json::from_slice(bytes).map_err(|e| CodecError::malformed(e.to_string()))?;
        Self::try_from(wire)
    }

    /// Validate an already-parsed JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CodecError> {
        let wire =
            WirePayload::deserialize(value).map_err(|e| CodecError::malformed(e.to_string()))?;
        Self::try_from(wire)
    }

    /// Compact JSON, as the generator writes it.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_wire())
    }

    /// Indented JSON, as the file helper writes it.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_wire())
    }

    pub fn to_wire(&self) -> WirePayload {
        WirePayload {
            v: PAYLOAD_VERSION,
            salt: STANDARD.encode(self.salt),
            iv: STANDARD.encode(self.iv),
            data: STANDARD.encode(&self.data),
            algo: CipherAlgorithm::Aes256Cbc,
            padding: PaddingScheme::Pkcs7,
        }
    }
}

impl TryFrom<WirePayload> for Payload {
    type Error = CodecError;

    fn try_from(wire: WirePayload) -> Result<Self, Self::Error> {
        // algo and padding are already pinned by their single-variant enums
        if wire.v != PAYLOAD_VERSION {
            return Err(CodecError::malformed(format!(
                "unsupported version {}, expected {PAYLOAD_VERSION}",
                wire.v
            )));
        }

        let salt = decode_fixed::<SALT_LEN>("salt", &wire.salt)?;
        let iv = decode_fixed::<IV_LEN>("iv", &wire.iv)?;
        let data = decode_field("data", &wire.data)?;
        Payload::new(salt, iv, data)
    }
}

impl From<Payload> for WirePayload {
    fn from(payload: Payload) -> Self {
        payload.to_wire()
    }
}

fn decode_field(name: &str, encoded: &str) -> Result<Vec<u8>, CodecError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CodecError::malformed(format!("{name} is not valid base64: {e}")))
}

fn decode_fixed<const N: usize>(name: &str, encoded: &str) -> Result<[u8; N], CodecError> {
    let bytes = decode_field(name, encoded)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CodecError::malformed(format!("{name} is {len} bytes, expected {N}")))
}
