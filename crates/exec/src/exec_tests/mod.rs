// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the command executor.

use super::*;

mod basic;
mod errors;

/// Create a default executor for tests.
pub(crate) fn executor() -> CommandExecutor {
    CommandExecutor::new()
}

/// Sink double: collected blocks, in write order.
pub(crate) fn sink() -> Vec<String> {
    Vec::new()
}
