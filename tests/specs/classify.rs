// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classifier acceptance table over the published API.

use termchat_classify::{classify, is_terminal_command, Rule, Verdict};

#[yare::parameterized(
    list = { "ls -la" },
    vcs = { "git status" },
    package_manager = { "npm install" },
    pipe = { "cat file.txt | grep \"error\"" },
    relative_script = { "./run.sh" },
    absolute_binary = { "/usr/bin/node --version" },
)]
fn commands_execute(input: &str) {
    assert!(is_terminal_command(input), "input = {input:?}");
}

#[yare::parameterized(
    empty = { "" },
    blank = { "   " },
    question = { "what is the current directory?" },
    polite_request = { "can you list the files for me" },
    how_to = { "how to install npm" },
)]
fn conversation_defers(input: &str) {
    assert!(!is_terminal_command(input), "input = {input:?}");
}

#[test]
fn veto_is_absolute_over_shell_evidence() {
    // Conversational phrasing decides before the metacharacter rule runs,
    // even when the input carries pipes and slashes.
    let result = classify("could you run cat /etc/hosts | wc -l");
    assert_eq!(result.verdict, Verdict::Conversational);
    assert!(
        matches!(result.rule, Rule::InterrogativeLead | Rule::ConversationalPhrase),
        "rule = {:?}",
        result.rule
    );
}

#[test]
fn classification_is_pure() {
    let input = "git log --oneline";
    assert_eq!(classify(input), classify(input));
    assert_eq!(is_terminal_command(input), is_terminal_command(input));
}
