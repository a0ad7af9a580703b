// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for failure paths: not found, timeout, partial output.

use std::time::Duration;

use super::{executor, sink};
use crate::ExecError;

// ---------------------------------------------------------------------------
// Command not found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_executable_renders_not_found_and_fails() {
    let mut blocks = sink();
    let err = executor()
        .execute("definitely_missing_cmd_xyz_12345 --flag", &mut blocks)
        .await
        .unwrap_err();

    match err {
        ExecError::NotFound { program } => {
            assert_eq!(program, "definitely_missing_cmd_xyz_12345");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }

    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert!(
        block.contains("Command 'definitely_missing_cmd_xyz_12345' not found."),
        "block = {block}"
    );
    assert!(block.contains("💡 **Suggestion:**"), "block = {block}");
}

// ---------------------------------------------------------------------------
// Timeout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_renders_indicator_and_fails() {
    let mut blocks = sink();
    let err = executor()
        .timeout(Duration::from_millis(200))
        .execute("sleep 5", &mut blocks)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Timeout { .. }), "err = {err:?}");
    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert!(block.contains('⏰'), "block = {block}");
    assert!(block.contains("timed out"), "block = {block}");
    assert!(!block.contains("Exit code"), "block = {block}");
}

#[tokio::test]
async fn timeout_preserves_partial_output() {
    let mut blocks = sink();
    let err = executor()
        .timeout(Duration::from_millis(500))
        .execute("echo started; sleep 5", &mut blocks)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Timeout { .. }));
    assert!(blocks[0].contains("started"), "block = {}", blocks[0]);
}

// ---------------------------------------------------------------------------
// Write-before-signal contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_failure_path_writes_exactly_once() {
    for command in ["definitely_missing_cmd_xyz_12345", "sleep 5"] {
        let mut blocks = sink();
        let result = executor()
            .timeout(Duration::from_millis(200))
            .execute(command, &mut blocks)
            .await;
        assert!(result.is_err(), "command = {command}");
        assert_eq!(blocks.len(), 1, "command = {command}");
    }
}
