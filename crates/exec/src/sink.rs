// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output seam between the executor and its host integration.

/// Destination for rendered transcript blocks -- injected by the embedder.
///
/// The executor calls [`append_block`](TranscriptSink::append_block) exactly
/// once per invocation, on every outcome path.
pub trait TranscriptSink {
    /// Append one rendered markdown block.
    fn append_block(&mut self, markdown: &str);
}

/// Collects blocks in memory. Backs tests and simple embedders.
impl TranscriptSink for Vec<String> {
    fn append_block(&mut self, markdown: &str) {
        self.push(markdown.to_string());
    }
}
