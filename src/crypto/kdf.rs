// src/crypto/kdf.rs
use sha2::{Digest, Sha256};

use crate::aliases::{AesKey32, KdfInput};
use crate::consts::{KDF_ROUNDS, KEY_LEN, SALT_LEN};

/// Stretch `password` into an AES-256 key.
///
/// `SHA-256(password || salt)` once, then `SHA-256` of the previous digest
/// until [`KDF_ROUNDS`] hashes have been computed in total. The password is
/// never mixed in again after the first round.
///
/// This is not PBKDF2 and must not become PBKDF2: the external encryptor
/// derives keys exactly this way.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> AesKey32 {
    let mut input = Vec::with_capacity(password.len() + SALT_LEN);
    input.extend_from_slice(password.as_bytes());
    input.extend_from_slice(salt);
    let input = KdfInput::new(input);

    let mut hash: [u8; KEY_LEN] = Sha256::digest(input.expose_secret()).into();
    for _ in 1..KDF_ROUNDS {
        hash = Sha256::digest(hash).into();
    }

    AesKey32::new(hash)
}
