// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout grade-vault.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(AesKey32, 32); // AES-256 key produced by the iterated SHA-256 stretch

// Dynamic secrets
dynamic_alias!(Password, String); // private key as carried in the dashboard link
dynamic_alias!(KdfInput, Vec<u8>); // password bytes || salt, hashed once then dropped
