// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed word lists and word-boundary matching for the rule heuristics.

/// Interrogative and request-style lead words. A prompt whose first token
/// is one of these is natural language, full stop.
pub(crate) const LEAD_WORDS: &[&str] = &[
    "what", "how", "can", "is", "do", "please", "help", "tell", "show", "explain", "why", "when",
    "where", "who", "which", "should", "would", "could", "may", "might", "shall", "will", "did",
    "does", "are", "were", "was", "have", "has", "had",
];

/// Conversational phrases that veto command classification wherever they
/// appear in the prompt.
pub(crate) const CONVERSATIONAL_PHRASES: &[&str] = &[
    "i want",
    "i need",
    "i would like",
    "can you",
    "could you",
    "please",
    "let me",
    "give me",
    "show me",
    "tell me",
];

/// Prepositions, conjunctions, and interrogative fillers that mark a short
/// input as prose rather than a terse command line.
pub(crate) const FILLER_WORDS: &[&str] = &[
    "the", "a", "an", "to", "for", "with", "from", "by", "at", "in", "on", "of", "and", "or",
    "but", "so", "because", "although", "while", "if", "then", "else", "when", "where", "how",
    "why", "what", "which", "who", "that", "this", "these", "those",
];

/// Word characters for boundary checks: `[A-Za-z0-9_]`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `needle` occurs in `haystack` delimited by word boundaries on
/// both sides. `needle` may contain spaces ("can you") and both arguments
/// must already be lowercase.
pub(crate) fn contains_bounded(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let open = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let close = haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        if open && close {
            return true;
        }
        from = start + 1;
    }
    false
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
