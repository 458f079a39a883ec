//! Response channel attachment.
//!
//! The response channel belongs to the calling context and is
//! append-only: the pipeline attaches exactly one logical result per
//! invocation, either structured (full tool) or as text (degenerate
//! variant), never both.

use std::path::PathBuf;

use serde::Serialize;

use crate::summary::AuditSummary;

/// One attached audit result: structured summary plus artifact paths
/// in request order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachedResult {
    /// Structured audit summary
    pub summary: AuditSummary,
    /// Paths to the written report artifacts, ordered as requested
    pub reports: Vec<PathBuf>,
}

/// The caller's response channel
pub trait ResponseChannel: Send {
    /// Attach a structured audit result
    fn attach_audit_result(&mut self, result: AttachedResult);

    /// Append a human-readable line to the response
    fn append_text_line(&mut self, line: String);
}

/// In-memory response channel for embedding and tests
#[derive(Debug, Default)]
pub struct CollectingResponse {
    /// Structured results attached so far
    pub attached: Vec<AttachedResult>,
    /// Text lines appended so far
    pub lines: Vec<String>,
}

impl CollectingResponse {
    /// Create an empty response
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseChannel for CollectingResponse {
    fn attach_audit_result(&mut self, result: AttachedResult) {
        self.attached.push(result);
    }

    fn append_text_line(&mut self, line: String) {
        self.lines.push(line);
    }
}
