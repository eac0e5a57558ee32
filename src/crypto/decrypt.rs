// src/crypto/decrypt.rs
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use super::padding::unpad;
use super::Aes256CbcDec;
use crate::aliases::AesKey32;
use crate::consts::{BLOCK_SIZE, IV_LEN};
use crate::error::CodecError;

/// AES-256-CBC ciphertext → strip PKCS7 → UTF-8 plaintext (in-memory)
///
/// A padding failure is returned as-is; the raw decrypted bytes are never
/// handed back.
pub fn decrypt(ciphertext: &[u8], key: &AesKey32, iv: &[u8; IV_LEN]) -> Result<String, CodecError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CodecError::malformed(format!(
            "ciphertext length {} is not a non-zero multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let decrypted = Aes256CbcDec::new(&(*key.expose_secret()).into(), &(*iv).into())
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| CodecError::malformed("ciphertext is not block aligned"))?;

    let plaintext = unpad(&decrypted, BLOCK_SIZE)?;
    let text = std::str::from_utf8(plaintext).map_err(CodecError::DecodeError)?;
    Ok(text.to_owned())
}
