// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for clean-termination transcripts.

use super::{executor, sink};

#[tokio::test]
async fn echo_renders_success_transcript() {
    let mut blocks = sink();
    executor().execute("echo hello", &mut blocks).await.unwrap();

    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert!(block.starts_with("```bash\n"), "block = {block}");
    assert!(block.contains("$ echo hello\n"), "block = {block}");
    assert!(block.contains("hello\n"), "block = {block}");
    assert!(block.contains("✅ Exit code: 0"), "block = {block}");
}

#[tokio::test]
async fn nonzero_exit_still_resolves() {
    let mut blocks = sink();
    // Clean termination with a nonzero code is not an executor error.
    executor().execute("exit 3", &mut blocks).await.unwrap();

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("❌ Exit code: 3"), "block = {}", blocks[0]);
}

#[tokio::test]
async fn stderr_is_captured_in_combined_output() {
    let mut blocks = sink();
    executor()
        .execute("echo out; echo err 1>&2", &mut blocks)
        .await
        .unwrap();

    // Interleaving across the two pipes is unspecified; assert membership only.
    let block = &blocks[0];
    assert!(block.contains("out"), "block = {block}");
    assert!(block.contains("err"), "block = {block}");
    assert!(block.contains("✅ Exit code: 0"), "block = {block}");
}

#[tokio::test]
async fn shell_semantics_are_delegated() {
    let mut blocks = sink();
    executor()
        .execute("printf 'a\\nb\\nc\\n' | wc -l | tr -d ' '", &mut blocks)
        .await
        .unwrap();

    assert!(blocks[0].contains('3'), "block = {}", blocks[0]);
}

#[tokio::test]
async fn cwd_applies_to_spawn_and_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let name = dir
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    let mut blocks = sink();
    executor()
        .cwd(dir.path())
        .execute("pwd", &mut blocks)
        .await
        .unwrap();

    let block = &blocks[0];
    assert!(block.contains(&name), "block = {block}");
    assert!(block.contains(&format!("{name}$ pwd")), "block = {block}");
}

#[tokio::test]
async fn concurrent_invocations_do_not_interfere() {
    let (left, right) = tokio::join!(
        async {
            let mut blocks = sink();
            executor().execute("echo left", &mut blocks).await.unwrap();
            blocks
        },
        async {
            let mut blocks = sink();
            executor().execute("echo right", &mut blocks).await.unwrap();
            blocks
        },
    );

    assert!(left[0].contains("left") && !left[0].contains("right"));
    assert!(right[0].contains("right") && !right[0].contains("left"));
}
