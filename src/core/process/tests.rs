// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ProcessBuilder;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_process_success() {
    let output = ProcessBuilder::new("true")
        .run()
        .await
        .expect("true should succeed");
    assert!(output.success());
    assert_eq!(output.exit_code(), 0);
    assert!(!output.is_interrupted());
}

#[tokio::test]
async fn test_process_exit_code() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "exit 42"])
        .allow_failure()
        .run()
        .await
        .expect("process should complete");
    assert_eq!(output.exit_code(), 42);
}

#[tokio::test]
async fn test_process_nonzero_fails_by_default() {
    let result = ProcessBuilder::new("false").run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_process_missing_executable() {
    let result = ProcessBuilder::new("relkit-no-such-program").run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let output = ProcessBuilder::new("sh")
        .args(["-c", "test -d ."])
        .cwd(dir.path())
        .run()
        .await
        .expect("process should succeed");
    assert!(output.success());
}

#[tokio::test]
async fn test_process_cancellation() {
    let token = CancellationToken::new();
    token.cancel();

    let output = ProcessBuilder::new("sleep")
        .args(["30"])
        .run_with_cancellation(&token)
        .await
        .expect("cancelled run still returns output");
    assert!(output.is_interrupted());
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("make").args(["dist", "a b"]);
    assert_eq!(builder.command_line(), "make dist \"a b\"");
}

#[test]
fn test_display_name_from_program() {
    let builder = ProcessBuilder::new("/usr/bin/make");
    assert_eq!(builder.display_name(), "make");

    let named = ProcessBuilder::new("/usr/bin/make").name("core build");
    assert_eq!(named.display_name(), "core build");
}
