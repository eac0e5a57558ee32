// src/enums.rs
//! Self-describing protocol tags carried in every payload
//!
//! Each enum has a single variant. Deserializing anything other than its
//! literal fails, so foreign or upgraded payloads are rejected before any
//! cryptographic work happens.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ALGO_NAME, PADDING_NAME};

/// Block cipher + mode named in the `algo` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CipherAlgorithm {
    #[default]
    #[serde(rename = "AES-256-CBC")]
    Aes256Cbc,
}

impl CipherAlgorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes256Cbc => ALGO_NAME,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding scheme named in the `padding` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaddingScheme {
    #[default]
    #[serde(rename = "PKCS7")]
    Pkcs7,
}

impl PaddingScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaddingScheme::Pkcs7 => PADDING_NAME,
        }
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
