// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered classification rules: command line or conversational language.
//!
//! Each [`Rule`] is independently evaluable against a trimmed prompt and
//! either produces a [`Verdict`] or abstains. [`classify`] walks [`RULES`]
//! top to bottom and the first rule that decides, decides -- the order is
//! part of the contract. [`LengthFallback`](Rule::LengthFallback) always
//! decides, so classification is total.

use crate::words::{contains_bounded, CONVERSATIONAL_PHRASES, FILLER_WORDS, LEAD_WORDS};

/// Classification outcome for one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The prompt reads like a shell command and should be executed.
    Command,
    /// The prompt reads like natural language and should be deferred.
    Conversational,
}

/// One step of the ordered heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Empty or whitespace-only input is never a command.
    EmptyInput,
    /// First token is an interrogative/request lead word ("what", "can", ...).
    InterrogativeLead,
    /// Prompt contains a conversational phrase ("can you", "i want", ...).
    ConversationalPhrase,
    /// Shell metacharacters (pipe, redirect, `;`, `$(`, backtick, `/`, ...)
    /// are definitive command evidence.
    ShellSyntax,
    /// First token is a plausible executable name and the prompt carries at
    /// most a handful of arguments.
    BareCommandWord,
    /// First token is path-shaped (`./`, `/`, `~/`, or embedded `/`).
    PathCommand,
    /// Short input with no sentence filler words reads as a terse command.
    ShortTerse,
    /// Length/punctuation fallback; the only rule that can decide either way.
    LengthFallback,
}

/// Evaluation order. First match wins.
pub const RULES: [Rule; 8] = [
    Rule::EmptyInput,
    Rule::InterrogativeLead,
    Rule::ConversationalPhrase,
    Rule::ShellSyntax,
    Rule::BareCommandWord,
    Rule::PathCommand,
    Rule::ShortTerse,
    Rule::LengthFallback,
];

/// Maximum number of space characters for [`Rule::BareCommandWord`].
const MAX_ARG_SPACES: usize = 5;
/// Maximum word count for [`Rule::ShortTerse`].
const MAX_TERSE_WORDS: usize = 8;
/// Maximum prompt length, in characters, for [`Rule::LengthFallback`] to
/// say command.
const MAX_FALLBACK_LEN: usize = 100;

/// A verdict together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub rule: Rule,
}

impl Rule {
    /// Apply this rule to a trimmed prompt. `None` means the rule abstains
    /// and the next rule in [`RULES`] is consulted.
    pub fn evaluate(self, input: &str) -> Option<Verdict> {
        match self {
            Rule::EmptyInput => input.is_empty().then_some(Verdict::Conversational),
            Rule::InterrogativeLead => {
                let lead = first_token(input).to_lowercase();
                LEAD_WORDS.contains(&lead.as_str()).then_some(Verdict::Conversational)
            }
            Rule::ConversationalPhrase => {
                let lower = input.to_lowercase();
                CONVERSATIONAL_PHRASES
                    .iter()
                    .any(|phrase| contains_bounded(&lower, phrase))
                    .then_some(Verdict::Conversational)
            }
            Rule::ShellSyntax => has_shell_syntax(input).then_some(Verdict::Command),
            Rule::BareCommandWord => {
                let first = first_token(input);
                let plausible = !first.is_empty() && first.chars().all(is_command_char);
                let spaces = input.chars().filter(|&c| c == ' ').count();
                (plausible && spaces <= MAX_ARG_SPACES).then_some(Verdict::Command)
            }
            Rule::PathCommand => {
                let first = first_token(input);
                let pathy = first.starts_with("./")
                    || first.starts_with('/')
                    || first.starts_with("~/")
                    || first.contains('/');
                pathy.then_some(Verdict::Command)
            }
            Rule::ShortTerse => {
                let words = input.split_whitespace().count();
                if words > MAX_TERSE_WORDS {
                    return None;
                }
                let lower = input.to_lowercase();
                FILLER_WORDS
                    .iter()
                    .all(|word| !contains_bounded(&lower, word))
                    .then_some(Verdict::Command)
            }
            Rule::LengthFallback => {
                let terse = input.chars().count() <= MAX_FALLBACK_LEN
                    && !input.contains('?')
                    && !input.contains('!');
                Some(if terse { Verdict::Command } else { Verdict::Conversational })
            }
        }
    }
}

/// Classify a prompt. Trims the input first; deterministic and total.
pub fn classify(input: &str) -> Classification {
    let trimmed = input.trim();
    RULES
        .iter()
        .find_map(|&rule| rule.evaluate(trimmed).map(|verdict| Classification { verdict, rule }))
        // LengthFallback always decides, so the walk never comes up empty.
        .unwrap_or(Classification {
            verdict: Verdict::Conversational,
            rule: Rule::LengthFallback,
        })
}

/// Boolean convenience wrapper over [`classify`].
pub fn is_terminal_command(input: &str) -> bool {
    classify(input).verdict == Verdict::Command
}

fn first_token(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or("")
}

/// Shell metacharacters that mark the input as a command regardless of how
/// sentence-like the rest of it looks.
fn has_shell_syntax(input: &str) -> bool {
    input.contains("$(")
        || input
            .chars()
            .any(|c| matches!(c, '|' | '>' | '<' | '&' | ';' | '`' | '/'))
}

/// Characters allowed in a bare executable name: `[a-zA-Z0-9._/-]`.
fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '/' | '-')
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
