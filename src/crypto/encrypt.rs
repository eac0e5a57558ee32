// src/crypto/encrypt.rs
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};

use super::padding::pad;
use super::Aes256CbcEnc;
use crate::aliases::AesKey32;
use crate::consts::{BLOCK_SIZE, IV_LEN};

/// UTF-8 plaintext → PKCS7 → AES-256-CBC ciphertext (in-memory)
///
/// No authentication tag is produced; the payload format has nowhere to
/// store one.
pub fn encrypt(plaintext: &str, key: &AesKey32, iv: &[u8; IV_LEN]) -> Vec<u8> {
    let padded = pad(plaintext.as_bytes(), BLOCK_SIZE);
    Aes256CbcEnc::new(&(*key.expose_secret()).into(), &(*iv).into())
        .encrypt_padded_vec_mut::<NoPadding>(&padded)
}
