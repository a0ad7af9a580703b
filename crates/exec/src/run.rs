// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with combined output capture and a timeout bound.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

use crate::context::PromptContext;
use crate::error::ExecError;
use crate::sink::TranscriptSink;
use crate::transcript::Transcript;

/// Fixed upper bound on wall-clock execution time.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Exit status POSIX shells report when the command cannot be found.
const EXIT_NOT_FOUND: i32 = 127;

/// Runs one command per invocation and writes one transcript per invocation.
///
/// Each call owns its own subprocess and output buffer, so concurrent calls
/// on clones (or independent executors) are safe by construction.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    context: PromptContext,
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            context: PromptContext::resolve(None),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the working directory (used for spawning and the prompt line).
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.context = PromptContext::resolve(Some(dir.into()));
        self
    }

    /// Override the execution-time bound.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = limit;
        self
    }

    /// Execute `command` through a shell and write the rendered transcript
    /// to `sink`.
    ///
    /// Exactly one block is written per call, on every path. Failure
    /// outcomes (not found, timeout, other runtime errors) return an error
    /// *after* the write, so callers can record the failure without
    /// rendering anything themselves.
    pub async fn execute(
        &self,
        command: &str,
        sink: &mut dyn TranscriptSink,
    ) -> Result<(), ExecError> {
        let span = tracing::info_span!(
            "exec.cmd",
            cmd = %command,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let start = Instant::now();
        let transcript = Transcript::new(self.context.prompt(), command);

        let mut child = match self.spawn(command) {
            Ok(child) => child,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                let program = first_token(command);
                sink.append_block(&transcript.not_found(&program));
                return Err(ExecError::NotFound { program });
            }
            Err(source) => {
                sink.append_block(&transcript.runtime_error("", &source.to_string()));
                return Err(ExecError::Runtime {
                    command: command.to_string(),
                    source,
                });
            }
        };

        // The buffer lives outside the drain future so partial output
        // survives timeout cancellation.
        let mut combined = Vec::new();
        let waited = tokio::time::timeout(self.timeout, drain(&mut child, &mut combined)).await;

        match waited {
            Err(_elapsed) => {
                let _ = child.kill().await;
                tracing::warn!(parent: &span, timeout_secs = self.timeout.as_secs(), "command timed out");
                let output = String::from_utf8_lossy(&combined);
                sink.append_block(&transcript.timed_out(&output, self.timeout));
                Err(ExecError::Timeout {
                    limit: self.timeout,
                })
            }
            Ok(Err(source)) => {
                let output = String::from_utf8_lossy(&combined);
                sink.append_block(&transcript.runtime_error(&output, &source.to_string()));
                Err(ExecError::Runtime {
                    command: command.to_string(),
                    source,
                })
            }
            Ok(Ok(status)) => {
                let exit_code = status.code().unwrap_or(-1);
                span.record("exit_code", exit_code);
                span.record("duration_ms", start.elapsed().as_millis() as u64);

                // Shell-mediated spawn: a missing executable comes back as
                // exit 127 rather than a spawn error.
                if exit_code == EXIT_NOT_FOUND {
                    let program = first_token(command);
                    sink.append_block(&transcript.not_found(&program));
                    return Err(ExecError::NotFound { program });
                }

                let output = String::from_utf8_lossy(&combined);
                sink.append_block(&transcript.completed(&output, exit_code));
                Ok(())
            }
        }
    }

    fn spawn(&self, command: &str) -> std::io::Result<Child> {
        let mut process = Command::new("sh");
        process
            .arg("-c")
            .arg(command)
            .current_dir(self.context.cwd())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        process.spawn()
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy stdout and stderr into one buffer in arrival order, then reap the
/// child. No reordering beyond what the pipes themselves deliver.
async fn drain(child: &mut Child, combined: &mut Vec<u8>) -> std::io::Result<ExitStatus> {
    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();
    let mut out_buf = [0u8; 8192];
    let mut err_buf = [0u8; 8192];

    while stdout.is_some() || stderr.is_some() {
        tokio::select! {
            read = read_chunk(&mut stdout, &mut out_buf), if stdout.is_some() => {
                match read? {
                    0 => stdout = None,
                    n => combined.extend_from_slice(&out_buf[..n]),
                }
            }
            read = read_chunk(&mut stderr, &mut err_buf), if stderr.is_some() => {
                match read? {
                    0 => stderr = None,
                    n => combined.extend_from_slice(&err_buf[..n]),
                }
            }
        }
    }

    child.wait().await
}

async fn read_chunk<R: AsyncRead + Unpin>(
    reader: &mut Option<R>,
    buf: &mut [u8],
) -> std::io::Result<usize> {
    match reader {
        Some(r) => r.read(buf).await,
        None => Ok(0),
    }
}

fn first_token(command: &str) -> String {
    command.split_whitespace().next().unwrap_or(command).to_string()
}

#[cfg(test)]
#[path = "exec_tests/mod.rs"]
mod tests;
