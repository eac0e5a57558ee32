// tests/common.rs
//! Shared test utilities: test-friendly logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging that plays well with `cargo test` output capture.
/// Idempotent, safe to call at the start of every test.
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok();
}
