// src/lib.rs
//! grade-vault: sealed per-student grade reports
//!
//! Features:
//! - Password-sealed JSON payloads (AES-256-CBC + PKCS7)
//! - Iterated SHA-256 key stretching, byte-compatible with the external encryptor
//! - Analysis-directory lookup by public key
//! - Report loader with a single user-facing failure message

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod loader;
pub mod payload;
pub mod report;

// Re-export everything users need at the crate root
pub use aliases::{AesKey32, Password};
pub use codec::{open, open_slice, open_str, open_value, seal};
pub use config::load as load_config;
pub use crypto::derive_key;
pub use error::{CodecError, CoreError, LoadError};
pub use file_ops::{decrypt_file, resolve_payload_path, save_encrypted_file};
pub use loader::{load_report, Credentials};
pub use payload::Payload;
pub use report::{StudentReport, Subject};
