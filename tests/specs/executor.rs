// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor acceptance specs: transcript contract and failure signaling.

use std::time::Duration;

use termchat_exec::{CommandExecutor, ExecError};

#[tokio::test]
async fn success_transcript_ends_with_zero_exit_line() {
    let mut blocks: Vec<String> = Vec::new();
    CommandExecutor::new()
        .execute("echo spec", &mut blocks)
        .await
        .unwrap();

    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert!(block.contains("spec"), "block = {block}");
    assert!(block.contains("✅ Exit code: 0"), "block = {block}");
}

#[tokio::test]
async fn nonzero_exit_transcript_uses_failure_glyph() {
    let mut blocks: Vec<String> = Vec::new();
    CommandExecutor::new()
        .execute("exit 42", &mut blocks)
        .await
        .unwrap();

    assert!(blocks[0].contains("❌ Exit code: 42"), "block = {}", blocks[0]);
}

#[tokio::test]
async fn not_found_surfaces_remediation_then_fails() {
    let mut blocks: Vec<String> = Vec::new();
    let err = CommandExecutor::new()
        .execute("no_such_program_qqq_9876", &mut blocks)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::NotFound { .. }), "err = {err:?}");
    let block = &blocks[0];
    assert!(block.contains("not found"), "block = {block}");
    assert!(block.contains("Suggestion"), "block = {block}");
}

#[tokio::test]
async fn timeout_surfaces_indicator_without_exit_code() {
    let mut blocks: Vec<String> = Vec::new();
    let err = CommandExecutor::new()
        .timeout(Duration::from_millis(250))
        .execute("sleep 10", &mut blocks)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Timeout { .. }), "err = {err:?}");
    let block = &blocks[0];
    assert!(block.contains('⏰'), "block = {block}");
    assert!(!block.contains("Exit code"), "block = {block}");
}

#[tokio::test]
async fn combined_output_contains_both_streams() {
    let mut blocks: Vec<String> = Vec::new();
    CommandExecutor::new()
        .execute("echo to-out; echo to-err 1>&2; exit 0", &mut blocks)
        .await
        .unwrap();

    // Interleaving order across the pipes is platform timing; membership only.
    let block = &blocks[0];
    assert!(block.contains("to-out"), "block = {block}");
    assert!(block.contains("to-err"), "block = {block}");
}

#[tokio::test]
async fn cwd_override_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let mut blocks: Vec<String> = Vec::new();
    CommandExecutor::new()
        .cwd(dir.path())
        .execute("pwd", &mut blocks)
        .await
        .unwrap();

    let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(blocks[0].contains(&name), "block = {}", blocks[0]);
}
