// src/consts.rs
//! Shared constants: protocol literals and defaults

/// Only payload version this crate reads or writes
pub const PAYLOAD_VERSION: u32 = 1;

/// Wire literal for the `algo` field
pub const ALGO_NAME: &str = "AES-256-CBC";

/// Wire literal for the `padding` field
pub const PADDING_NAME: &str = "PKCS7";

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

pub const SALT_LEN: usize = 16;
pub const IV_LEN: usize = 16;

/// AES-256 key length, equal to one SHA-256 digest
pub const KEY_LEN: usize = 32;

/// Total SHA-256 invocations in the key stretching loop.
// Fixed by the external encryptor. Changing it breaks every existing payload.
pub const KDF_ROUNDS: u32 = 10_000;

/// Where sealed reports live, relative to the dashboard root
pub const DEFAULT_ANALYSIS_DIR: &str = "assets/analysis";

/// Fallback extension tried when `<dir>/<public_key>` does not exist
pub const PAYLOAD_FALLBACK_EXTENSION: &str = "json";

/// Config file read when `GRADE_VAULT_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "grade-vault.toml";

pub const DEFAULT_LOG_FILTER: &str = "info";
