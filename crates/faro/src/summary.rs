//! Structured audit summaries.
//!
//! Pure derivations over a [`RawReport`]: the compact summary attached
//! by the full tool, and the per-category breakdown serialized by the
//! single-category variant. Audits are classified three ways (failed,
//! passed, not applicable) and a null score belongs to neither count.

use serde::{Deserialize, Serialize};

use crate::report::RawReport;
use crate::request::{AuditMode, Category, Device};

/// Aggregate score for one category, in report order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Aggregate score in [0, 1], or None when not computed
    pub score: Option<f64>,
}

/// Pass/fail audit tallies
///
/// Audits with a null score are not applicable and count in neither
/// bucket, so `failed + passed` can be less than the total audit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditCounts {
    /// Audits with a non-null score strictly below 1
    pub failed: usize,
    /// Audits with a score of exactly 1
    pub passed: usize,
}

/// Engine timing totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Total engine run time in milliseconds
    pub total: f64,
}

/// Compact structured summary of one audit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Mode the audit ran in
    pub mode: AuditMode,
    /// Device class that was emulated
    pub device: Device,
    /// URL of the audited main document
    pub url: String,
    /// Category scores in report order
    pub scores: Vec<CategoryScore>,
    /// Pass/fail audit tallies
    pub audits: AuditCounts,
    /// Engine timing totals
    pub timing: Timing,
}

/// Three-way audit classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditVerdict {
    /// Non-null score strictly below 1
    Failed,
    /// Score of exactly 1
    Passed,
    /// Null score; the audit did not apply to this page
    NotApplicable,
}

/// Classify one audit score
#[must_use]
pub fn classify(score: Option<f64>) -> AuditVerdict {
    match score {
        None => AuditVerdict::NotApplicable,
        Some(score) if score < 1.0 => AuditVerdict::Failed,
        Some(_) => AuditVerdict::Passed,
    }
}

/// Derive the structured summary from a raw report
///
/// Pure and idempotent; category order follows the report.
#[must_use]
pub fn summarize(report: &RawReport, mode: AuditMode, device: Device) -> AuditSummary {
    let scores = report
        .categories
        .iter()
        .map(|c| CategoryScore {
            id: c.id.clone(),
            title: c.title.clone(),
            score: c.score,
        })
        .collect();

    let mut failed = 0;
    let mut passed = 0;
    for audit in &report.audits {
        match classify(audit.score) {
            AuditVerdict::Failed => failed += 1,
            AuditVerdict::Passed => passed += 1,
            AuditVerdict::NotApplicable => {}
        }
    }

    AuditSummary {
        mode,
        device,
        url: report.main_document_url.clone(),
        scores,
        audits: AuditCounts { failed, passed },
        timing: Timing {
            total: report.timing_total_ms,
        },
    }
}

/// Per-category breakdown used by the single-category text variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Aggregate category score, or None when not computed
    pub score: Option<f64>,
    /// Ids of audits with a non-null score strictly below 1
    pub failed_audits: Vec<String>,
    /// Ids of audits with a score of exactly 1
    pub passed_audits: Vec<String>,
}

/// Collect the breakdown for one category: disjoint id lists covering
/// every audit with a non-null score
#[must_use]
pub fn breakdown(report: &RawReport, category: Category) -> CategoryBreakdown {
    let score = report
        .categories
        .iter()
        .find(|c| c.id == category.id())
        .and_then(|c| c.score);

    let mut failed_audits = Vec::new();
    let mut passed_audits = Vec::new();
    for audit in &report.audits {
        match classify(audit.score) {
            AuditVerdict::Failed => failed_audits.push(audit.id.clone()),
            AuditVerdict::Passed => passed_audits.push(audit.id.clone()),
            AuditVerdict::NotApplicable => {}
        }
    }

    CategoryBreakdown {
        score,
        failed_audits,
        passed_audits,
    }
}
