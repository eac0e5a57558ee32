// src/file_ops.rs
//! File-level seal/open operations
//!
//! This module reads and writes sealed payload files, building on the pure
//! codec in codec.rs. It also maps a public key to its payload file inside
//! an analysis directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{open_slice, seal};
use crate::consts::PAYLOAD_FALLBACK_EXTENSION;
use crate::error::CoreError;
use crate::payload::Payload;

/// Read a sealed payload file and open it.
pub fn decrypt_file<P: AsRef<Path>>(path: P, password: &str) -> Result<String, CoreError> {
    let raw = fs::read(path.as_ref())?;
    debug!(path = %path.as_ref().display(), bytes = raw.len(), "read payload file");
    Ok(open_slice(&raw, password)?)
}

/// Seal `plaintext` and write the payload as indented JSON.
///
/// Parent directories are created as needed. Returns the payload written.
pub fn save_encrypted_file<P: AsRef<Path>>(
    path: P,
    plaintext: &str,
    password: &str,
) -> Result<Payload, CoreError> {
    let payload = seal(plaintext, password)?;
    write_json(path.as_ref(), &payload.to_json_pretty()?)?;
    Ok(payload)
}

/// Write an existing payload as compact JSON.
pub fn write_payload<P: AsRef<Path>>(path: P, payload: &Payload) -> Result<(), CoreError> {
    write_json(path.as_ref(), &payload.to_json()?)
}

fn write_json(path: &Path, json: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    debug!(path = %path.display(), bytes = json.len(), "wrote payload file");
    Ok(())
}

/// Find the payload for `public_key` in `dir`.
///
/// Tries `<dir>/<public_key>` first, then `<dir>/<public_key>.json`.
pub fn resolve_payload_path<P: AsRef<Path>>(dir: P, public_key: &str) -> Result<PathBuf, CoreError> {
    validate_public_key(public_key)?;
    let dir = dir.as_ref();

    let exact = dir.join(public_key);
    if exact.is_file() {
        return Ok(exact);
    }

    let fallback = dir.join(format!("{public_key}.{PAYLOAD_FALLBACK_EXTENSION}"));
    if fallback.is_file() {
        return Ok(fallback);
    }

    Err(CoreError::PayloadNotFound {
        dir: dir.to_path_buf(),
        public_key: public_key.to_owned(),
    })
}

/// A public key names one file directly inside the analysis directory.
pub fn validate_public_key(public_key: &str) -> Result<(), CoreError> {
    let bad = public_key.is_empty()
        || public_key == "."
        || public_key == ".."
        || public_key.contains(['/', '\\', '\0']);
    if bad {
        return Err(CoreError::InvalidPublicKey(public_key.to_owned()));
    }
    Ok(())
}
