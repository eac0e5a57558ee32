// src/loader.rs
//! Dashboard loader: public key + private key → validated report
//!
//! Internally every failure keeps its kind for logs and tests. Callers that
//! face the end user show [`LoadError::user_message`], which says the same
//! thing for a wrong password, a corrupted file and a foreign format.

use std::path::Path;

use tracing::{debug, warn};

use crate::aliases::Password;
use crate::error::{CoreError, LoadError};
use crate::file_ops::{decrypt_file, resolve_payload_path};
use crate::report::StudentReport;

/// The two halves of a dashboard link
pub struct Credentials {
    public_key: String,
    private_key: Password,
}

impl Credentials {
    /// Both keys must be present and non-empty.
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let public_key = public_key.into();
        let private_key = private_key.into();
        if public_key.is_empty() || private_key.is_empty() {
            return Err(LoadError::MissingCredentials);
        }
        Ok(Self {
            public_key,
            private_key: Password::new(private_key),
        })
    }

    /// Build from optional link parameters, as they arrive from a query string.
    pub fn from_parts(
        public_key: Option<&str>,
        private_key: Option<&str>,
    ) -> Result<Self, LoadError> {
        match (public_key, private_key) {
            (Some(public_key), Some(private_key)) => Self::new(public_key, private_key),
            _ => Err(LoadError::MissingCredentials),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

/// Locate, open, parse and check the report for `credentials`.
pub fn load_report<P: AsRef<Path>>(
    analysis_dir: P,
    credentials: &Credentials,
) -> Result<StudentReport, LoadError> {
    let public_key = credentials.public_key();

    let path = resolve_payload_path(analysis_dir, public_key).map_err(|e| match e {
        CoreError::InvalidPublicKey(_) | CoreError::PayloadNotFound { .. } => {
            debug!(error = %e, "payload lookup failed");
            LoadError::NotFound {
                public_key: public_key.to_owned(),
            }
        }
        other => LoadError::Unreadable(other),
    })?;

    let plaintext =
        decrypt_file(&path, credentials.private_key.expose_secret()).map_err(|e| {
            warn!(path = %path.display(), error = %e, "report failed to open");
            LoadError::Unreadable(e)
        })?;

    let report = StudentReport::from_json(&plaintext).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "decrypted report rejected");
    })?;
    debug!(subjects = report.subjects.len(), "report loaded");
    Ok(report)
}
