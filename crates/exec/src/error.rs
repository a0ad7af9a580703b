// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.
//!
//! Every variant is surfaced to the user as a rendered transcript *before*
//! the error is returned; callers never need to re-render these.

use std::time::Duration;

/// Errors produced by [`CommandExecutor::execute`](crate::CommandExecutor::execute).
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The requested executable does not exist on the PATH.
    #[error("command `{program}` not found")]
    NotFound { program: String },

    /// Execution exceeded the wall-clock bound.
    #[error("command timed out after {} seconds", .limit.as_secs())]
    Timeout { limit: Duration },

    /// Any other subprocess-layer failure (permission denied, signal, ...).
    #[error("failed to run `{command}`: {source}")]
    Runtime {
        command: String,
        source: std::io::Error,
    },
}
