// tests/file_ops_tests.rs
mod support;
use support::AnalysisDir;

use grade_vault::error::{CodecError, CoreError};
use grade_vault::file_ops::{
    decrypt_file, resolve_payload_path, save_encrypted_file, validate_public_key, write_payload,
};
use grade_vault::payload::Payload;
use grade_vault::seal;
use std::fs;

#[test]
fn save_and_decrypt_file_roundtrip() {
    let dir = AnalysisDir::new();
    let path = dir.path().join("nested/deeper/report");

    let payload = save_encrypted_file(&path, "The quick brown fox", "pw").unwrap();
    assert!(path.is_file());

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains('\n'), "file helper writes indented JSON");
    assert_eq!(Payload::from_json(&on_disk).unwrap(), payload);

    assert_eq!(decrypt_file(&path, "pw").unwrap(), "The quick brown fox");
}

#[test]
fn write_payload_is_compact() {
    let dir = AnalysisDir::new();
    let path = dir.path().join("student_a");
    write_payload(&path, &seal("a", "pw").unwrap()).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains('\n'));
    assert_eq!(decrypt_file(&path, "pw").unwrap(), "a");
}

#[test]
fn decrypt_file_propagates_codec_errors() {
    let dir = AnalysisDir::new();
    let path = dir.seal_as("s1", "secret", "right");

    match decrypt_file(&path, "wrong") {
        Err(CoreError::Codec(CodecError::InvalidPadding))
        | Err(CoreError::Codec(CodecError::DecodeError(_))) => {}
        other => panic!("expected padding/decode failure, got {other:?}"),
    }

    let garbage = dir.write_raw("garbage", "{\"v\":1}");
    assert!(matches!(
        decrypt_file(&garbage, "pw"),
        Err(CoreError::Codec(CodecError::MalformedPayload(_)))
    ));
}

#[test]
fn decrypt_file_missing_is_io_error() {
    let dir = AnalysisDir::new();
    assert!(matches!(
        decrypt_file(dir.path().join("nope"), "pw"),
        Err(CoreError::Io(_))
    ));
}

#[test]
fn resolve_prefers_exact_name() {
    let dir = AnalysisDir::new();
    let exact = dir.seal_as("student_test", "x", "pw");
    dir.seal_as("student_test.json", "y", "pw");

    assert_eq!(resolve_payload_path(dir.path(), "student_test").unwrap(), exact);
}

#[test]
fn resolve_falls_back_to_json_extension() {
    let dir = AnalysisDir::new();
    let with_ext = dir.seal_as("student_test.json", "y", "pw");

    assert_eq!(
        resolve_payload_path(dir.path(), "student_test").unwrap(),
        with_ext
    );
}

#[test]
fn resolve_ignores_directories() {
    let dir = AnalysisDir::new();
    fs::create_dir(dir.path().join("student_test")).unwrap();

    assert!(matches!(
        resolve_payload_path(dir.path(), "student_test"),
        Err(CoreError::PayloadNotFound { .. })
    ));
}

#[test]
fn resolve_reports_missing_payload() {
    let dir = AnalysisDir::new();
    match resolve_payload_path(dir.path(), "ghost") {
        Err(CoreError::PayloadNotFound { public_key, dir: d }) => {
            assert_eq!(public_key, "ghost");
            assert_eq!(d, dir.path());
        }
        other => panic!("expected PayloadNotFound, got {other:?}"),
    }
}

#[test]
fn public_keys_cannot_escape_the_directory() {
    for bad in ["", ".", "..", "../secret", "a/b", "a\\b", "nul\0byte"] {
        assert!(
            matches!(validate_public_key(bad), Err(CoreError::InvalidPublicKey(_))),
            "{bad:?} should be rejected"
        );
    }
    for good in ["student_test", "a..b", "Ahmed-2024", "٣٢١"] {
        assert!(validate_public_key(good).is_ok(), "{good:?} should pass");
    }
}
