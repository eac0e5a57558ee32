// tests/support.rs
//! Test utilities: scratch analysis directories and fixtures

use std::fs;
use std::path::{Path, PathBuf};

use grade_vault::file_ops::write_payload;
use grade_vault::seal;
use serde_json::json;
use tempfile::TempDir;

/// Payload written by an independent AES-256-CBC implementation with a fixed
/// salt (00..0f) and IV (10..1f).
#[allow(dead_code)]
pub const INTEROP_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/interop_v1.json");
#[allow(dead_code)]
pub const INTEROP_PASSWORD: &str = "my_secret_password_123";
#[allow(dead_code)]
pub const INTEROP_PLAINTEXT: &str = r#"{"student_name":"Alex Doe","rank":5}"#;

/// A throwaway analysis directory, deleted on drop
#[allow(dead_code)]
pub struct AnalysisDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl AnalysisDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp analysis dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Seal `plaintext` and store it under `file_name`.
    pub fn seal_as(&self, file_name: &str, plaintext: &str, password: &str) -> PathBuf {
        let path = self.path().join(file_name);
        let payload = seal(plaintext, password).expect("seal");
        write_payload(&path, &payload).expect("write payload");
        path
    }

    pub fn write_raw(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(file_name);
        fs::write(&path, contents).expect("write raw file");
        path
    }
}

impl Default for AnalysisDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal report that passes the dashboard's structural check
#[allow(dead_code)]
pub fn report_json(name: &str) -> String {
    json!({
        "student_name": name,
        "is_male": "true",
        "rank": 2,
        "total_degree": 410,
        "full_degree": 500,
        "subjects": [
            { "name": "Mathematics", "full_degree": 100, "rank": 1, "degree": 97, "average_degree": 71 },
            { "name": "History", "full_degree": 100, "rank": 0, "degree": 64, "average_degree": 66 }
        ]
    })
    .to_string()
}
