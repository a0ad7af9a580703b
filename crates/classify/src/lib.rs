// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! termchat-classify: decides whether a chat prompt reads like a shell
//! command or like conversational language.
//!
//! The heuristic is an ordered rule list -- first matching rule wins.
//! Shell-syntax evidence overrides conversational cues, and explicit
//! conversational phrasing overrides everything that would otherwise look
//! command-like. The classifier is deterministic, total, and performs no
//! I/O, so callers may invoke it freely on every prompt.

pub mod rules;

mod words;

pub use rules::{classify, is_terminal_command, Classification, Rule, Verdict};
