// src/config/mod.rs
//! Configuration system for grade-vault
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, resolve, Config, Logging, Paths};

mod app;
mod defaults;

/// Names the TOML file to read instead of `grade-vault.toml`
pub const CONFIG_ENV: &str = "GRADE_VAULT_CONFIG";

/// Overrides `paths.analysis_dir`
pub const ANALYSIS_DIR_ENV: &str = "GRADE_VAULT_ANALYSIS_DIR";
