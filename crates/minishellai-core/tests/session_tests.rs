#![cfg(unix)]

use minishellai_core::*;
use tempfile::TempDir;

// ========================================================================
// SessionRecorder Tests (session/recorder.rs)
// ========================================================================

#[tokio::test]
async fn test_session_end_removes_capture_file() {
    let temp_dir = TempDir::new().unwrap();
    let captured = temp_dir.path().join("output.txt");
    std::fs::write(&captured, "$ ls\n").unwrap();

    // `true` ignores its arguments and exits immediately, like a session the
    // user closed right away.
    SessionRecorder::new()
        .with_program("true")
        .start(&captured)
        .await
        .unwrap();

    assert!(!captured.exists());
}

#[tokio::test]
async fn test_session_without_capture_file_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let captured = temp_dir.path().join("never-written.txt");

    SessionRecorder::new()
        .with_program("true")
        .start(&captured)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_failing_recorder_still_resets_capture() {
    let temp_dir = TempDir::new().unwrap();
    let captured = temp_dir.path().join("output.txt");
    std::fs::write(&captured, "stale").unwrap();

    SessionRecorder::new()
        .with_program("false")
        .start(&captured)
        .await
        .unwrap();

    assert!(!captured.exists());
}

#[tokio::test]
async fn test_missing_recorder_is_session_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = SessionRecorder::new()
        .with_program("minishellai-no-such-recorder")
        .start(&temp_dir.path().join("output.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ShellAiError::Session(_)));
}
