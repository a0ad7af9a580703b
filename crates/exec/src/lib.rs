// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! termchat-exec: runs a chat prompt as a shell command and renders the
//! session as a single markdown transcript block.
//!
//! [`CommandExecutor`] owns one invocation end to end: it spawns the
//! command through `sh -c`, accumulates combined stdout/stderr in arrival
//! order, enforces a wall-clock timeout, and writes exactly one formatted
//! transcript to the injected [`TranscriptSink`] -- on success and on every
//! failure path alike. Failures are signaled to the caller only after the
//! transcript has been written, so embedders can tag metadata without
//! re-rendering anything.
//!
//! [`handle_prompt`] is the routing entry point: classify the prompt with
//! `termchat-classify`, execute it when it reads like a command, defer
//! otherwise.

mod context;
mod dispatch;
mod error;
mod run;
mod sink;
mod transcript;

pub use context::PromptContext;
pub use dispatch::{handle_prompt, Dispatch};
pub use error::ExecError;
pub use run::{CommandExecutor, DEFAULT_TIMEOUT};
pub use sink::TranscriptSink;
