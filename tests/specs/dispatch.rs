// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end routing specs: classify, then execute or defer.

use termchat_exec::{handle_prompt, CommandExecutor, Dispatch};

#[tokio::test]
async fn shell_like_prompt_round_trips_to_transcript() {
    let executor = CommandExecutor::new();
    let mut blocks: Vec<String> = Vec::new();

    let routed = handle_prompt(&executor, "echo end-to-end", &mut blocks).await.unwrap();

    assert_eq!(routed, Dispatch::Executed);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("end-to-end"), "block = {}", blocks[0]);
    assert!(blocks[0].contains("✅ Exit code: 0"), "block = {}", blocks[0]);
}

#[yare::parameterized(
    question = { "why is the build failing" },
    request = { "please show me the test output" },
    long_prose = { "I would like to understand what happened in the last deploy and whether anything needs fixing" },
)]
fn conversational_prompts_defer_silently(input: &str) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let executor = CommandExecutor::new();
        let mut blocks: Vec<String> = Vec::new();

        let routed = handle_prompt(&executor, input, &mut blocks).await.unwrap();

        assert_eq!(routed, Dispatch::Deferred, "input = {input:?}");
        assert!(blocks.is_empty(), "input = {input:?}");
    });
}
