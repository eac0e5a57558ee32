// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Failures of the sealed payload protocol itself.
///
/// None of these are transient: retrying with the same payload and password
/// always reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Structure, version, algorithm, padding name or base64 is wrong.
    /// Raised before any key derivation or decryption.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// PKCS7 check failed after decryption. Almost always a wrong password.
    #[error("invalid PKCS7 padding")]
    InvalidPadding,

    /// Padding was valid but the plaintext is not UTF-8.
    #[error("decrypted data is not valid UTF-8: {0}")]
    DecodeError(#[source] Utf8Error),
}

impl CodecError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CodecError::MalformedPayload(reason.into())
    }
}

/// Errors from the file layer around the codec
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid public key {0:?}: must name a single file")]
    InvalidPublicKey(String),

    #[error("no payload for {public_key:?} in {}", .dir.display())]
    PayloadNotFound { dir: PathBuf, public_key: String },
}

/// Message shown for every decryption or report-shape failure.
///
/// Wrong password, corrupted file and foreign format all look the same to
/// the person holding the link.
pub const GENERIC_LOAD_FAILURE: &str =
    "Could not open the report: wrong credentials or corrupted data.";

pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "The link is incomplete: both a public key and a private key are required.";

pub const NOT_FOUND_MESSAGE: &str = "No report exists for this link.";

/// Errors surfaced by the dashboard loader
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("public key and private key are both required")]
    MissingCredentials,

    #[error("report not found for public key {public_key:?}")]
    NotFound { public_key: String },

    #[error("report could not be opened: {0}")]
    Unreadable(#[source] CoreError),

    #[error("report has an invalid structure: {0}")]
    InvalidReport(String),
}

impl LoadError {
    /// The only text that should reach the end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::MissingCredentials => MISSING_CREDENTIALS_MESSAGE,
            LoadError::NotFound { .. } => NOT_FOUND_MESSAGE,
            LoadError::Unreadable(_) | LoadError::InvalidReport(_) => GENERIC_LOAD_FAILURE,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
