// src/codec.rs
//! Seal and open: the producer and consumer halves of the protocol
//!
//! `seal` is used by the offline data-preparation step, `open` by the
//! dashboard at load time. Both are stateless: every call derives its own key
//! and touches no shared memory.
//!
//! Open runs validate → decode → derive → decrypt → unpad → UTF-8, and the
//! first failing step ends the call.
//!
//! The protocol carries no integrity tag (neither HMAC nor AEAD). A tampered
//! ciphertext is only caught if it breaks the padding or the UTF-8 check.
//! Adding a tag would make every existing payload unreadable, so the
//! weakness is kept.

use rand::RngCore;
use tracing::{debug, trace};

use crate::consts::{IV_LEN, SALT_LEN};
use crate::crypto::{decrypt, derive_key, encrypt};
use crate::error::CodecError;
use crate::payload::Payload;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Encrypt `plaintext` under `password` with a fresh salt and IV.
pub fn seal(plaintext: &str, password: &str) -> Result<Payload> {
    let mut rng = rand::rng();
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut iv);

    seal_with(plaintext, password, salt, iv)
}

/// Deterministic form of [`seal`] for fixtures and cross-implementation
/// vectors. Reusing a salt or IV across payloads is a security defect;
/// production callers want [`seal`].
pub fn seal_with(
    plaintext: &str,
    password: &str,
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
) -> Result<Payload> {
    let key = derive_key(password, &salt);
    let data = encrypt(plaintext, &key, &iv);
    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = data.len(),
        "sealed payload"
    );
    Payload::new(salt, iv, data)
}

/// Decrypt a validated payload.
pub fn open(payload: &Payload, password: &str) -> Result<String> {
    let key = derive_key(password, payload.salt());
    trace!("key derived, decrypting {} bytes", payload.data().len());

    let plaintext = decrypt(payload.data(), &key, payload.iv()).inspect_err(|e| {
        debug!(error = %e, "payload failed to open");
    })?;
    debug!(plaintext_len = plaintext.len(), "opened payload");
    Ok(plaintext)
}

/// Parse serialized payload text, then [`open`] it.
pub fn open_str(text: &str, password: &str) -> Result<String> {
    open(&Payload::from_json(text)?, password)
}

/// Parse serialized payload bytes (e.g. a file body), then [`open`] it.
pub fn open_slice(bytes: &[u8], password: &str) -> Result<String> {
    open(&Payload::from_slice(bytes)?, password)
}

/// Validate an already-parsed JSON object, then [`open`] it.
pub fn open_value(value: &serde_json::Value, password: &str) -> Result<String> {
    open(&Payload::from_value(value)?, password)
}

impl Payload {
    /// Shorthand for [`open`].
    pub fn open(&self, password: &str) -> Result<String> {
        open(self, password)
    }
}
