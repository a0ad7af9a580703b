// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal-session transcript rendering.
//!
//! One transcript is built per invocation: prompt line, echoed command,
//! captured output, and a status line. The glyphs are stable literals the
//! host UI and the tests both rely on.

use std::time::Duration;

pub(crate) const SUCCESS_GLYPH: &str = "✅";
pub(crate) const FAILURE_GLYPH: &str = "❌";
pub(crate) const TIMEOUT_GLYPH: &str = "⏰";

/// Renders the markdown block for one simulated terminal session.
pub(crate) struct Transcript {
    prompt: String,
    command: String,
}

impl Transcript {
    pub(crate) fn new(prompt: String, command: &str) -> Self {
        Self {
            prompt,
            command: command.to_string(),
        }
    }

    /// Prompt line with the command echoed after it.
    fn header(&self) -> String {
        format!("{}{}\n", self.prompt, self.command)
    }

    /// Clean termination: captured output plus glyph and literal exit code.
    pub(crate) fn completed(&self, output: &str, exit_code: i32) -> String {
        let glyph = if exit_code == 0 {
            SUCCESS_GLYPH
        } else {
            FAILURE_GLYPH
        };
        fenced(&format!(
            "{}{}{} Exit code: {}",
            self.header(),
            output,
            glyph,
            exit_code
        ))
    }

    /// Missing executable: canonical not-found line plus an install hint
    /// appended after the fence.
    pub(crate) fn not_found(&self, program: &str) -> String {
        let body = fenced(&format!("{}Command '{}' not found.", self.header(), program));
        format!("{}\n{}", body, install_hint(program))
    }

    /// Timeout: partial output plus the bound. No exit-code line.
    pub(crate) fn timed_out(&self, output: &str, limit: Duration) -> String {
        fenced(&format!(
            "{}{}{} Command timed out after {} seconds",
            self.header(),
            output,
            TIMEOUT_GLYPH,
            limit.as_secs()
        ))
    }

    /// Any other runtime failure: partial output plus the error message.
    pub(crate) fn runtime_error(&self, output: &str, message: &str) -> String {
        fenced(&format!(
            "{}{}{} Error: {}",
            self.header(),
            output,
            FAILURE_GLYPH,
            message
        ))
    }
}

fn fenced(body: &str) -> String {
    format!("```bash\n{}\n```", body)
}

/// Package-manager hint for the host OS family.
fn install_hint(program: &str) -> String {
    if cfg!(target_os = "macos") {
        format!("💡 **Suggestion:** Try `brew install {program}`")
    } else if cfg!(target_os = "linux") {
        format!("💡 **Suggestion:** Try `sudo apt install {program}`")
    } else {
        format!("💡 **Suggestion:** Install `{program}` with your system package manager")
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
