// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working directory and shell-prompt resolution for one execution.

use std::path::{Path, PathBuf};

/// Where a command runs and how its prompt line reads.
#[derive(Debug, Clone)]
pub struct PromptContext {
    cwd: PathBuf,
    user: String,
    host: String,
}

impl PromptContext {
    /// Resolve a context. The working directory is the given workspace root
    /// when present, else the user's home directory, else a literal `~`.
    pub fn resolve(workspace_root: Option<PathBuf>) -> Self {
        let cwd = workspace_root
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("~"));
        Self {
            cwd,
            user: whoami::username(),
            host: short_hostname(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Synthesized prompt line: `user@host dirname$ `.
    ///
    /// Only the final path segment of the working directory appears, the
    /// way an interactive shell with a default PS1 would show it.
    pub fn prompt(&self) -> String {
        let dir = self
            .cwd
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.cwd.display().to_string());
        format!("{}@{} {}$ ", self.user, self.host, dir)
    }
}

/// Hostname with any domain suffix stripped.
fn short_hostname() -> String {
    let host = whoami::fallible::hostname().unwrap_or_else(|_| "localhost".to_string());
    host.split('.').next().unwrap_or(&host).to_string()
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
