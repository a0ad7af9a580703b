// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt routing: execute shell-like prompts, defer everything else.

use termchat_classify::is_terminal_command;

use crate::error::ExecError;
use crate::run::CommandExecutor;
use crate::sink::TranscriptSink;

/// How a prompt was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The prompt was executed and its transcript written to the sink.
    Executed,
    /// The prompt reads as natural language; nothing was written. The
    /// embedder hands it to its next handler.
    Deferred,
}

/// Route one chat prompt.
///
/// Deferral never touches the sink. On an execution error the transcript
/// has already been written; the error propagates so the embedder can tag
/// its response metadata.
pub async fn handle_prompt(
    executor: &CommandExecutor,
    input: &str,
    sink: &mut dyn TranscriptSink,
) -> Result<Dispatch, ExecError> {
    let command = input.trim();
    if !is_terminal_command(command) {
        return Ok(Dispatch::Deferred);
    }
    executor.execute(command, sink).await?;
    Ok(Dispatch::Executed)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
