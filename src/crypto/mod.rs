// src/crypto/mod.rs
//! Pure cryptographic operations. No I/O, no JSON.
//!
//! All functions work exclusively on in-memory buffers. Encryption and
//! decryption mirror each other and share key derivation and padding.
mod decrypt;
mod encrypt;
mod kdf;
mod padding;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use kdf::derive_key;
pub use padding::{pad, unpad};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
