//! Consumed-fields contract over the auditing engine's report.
//!
//! The engine's report is an opaque external artifact; the pipeline
//! consumes only a narrow slice of it (category results, audit
//! outcomes, the main-document URL, and the total timing) and
//! validates that slice defensively at the boundary instead of
//! depending on the engine's full schema. Category and audit order
//! match the engine's document order throughout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::result::{FaroError, FaroResult};

/// Aggregate result for one audit category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category identifier
    pub id: String,
    /// Display title as the engine reports it
    pub title: String,
    /// Aggregate score in [0, 1], or None when not computed
    pub score: Option<f64>,
}

impl CategoryResult {
    /// Create a category result
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            score,
        }
    }
}

/// Outcome of a single audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditOutcome {
    /// Audit identifier
    pub id: String,
    /// Score in [0, 1]; None means the audit was not applicable
    pub score: Option<f64>,
}

impl AuditOutcome {
    /// Create an audit outcome
    #[must_use]
    pub fn new(id: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// The slice of the engine's report that the pipeline consumes,
/// plus the full report document for artifact rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RawReport {
    /// Category results in document order
    pub categories: Vec<CategoryResult>,
    /// Audit outcomes in document order
    pub audits: Vec<AuditOutcome>,
    /// URL of the audited main document
    pub main_document_url: String,
    /// Total engine run time in milliseconds
    pub timing_total_ms: f64,
    /// Full report document, kept verbatim for artifact rendering
    document: Value,
}

impl RawReport {
    /// Build a report from already-typed parts, synthesizing the
    /// backing document from them
    #[must_use]
    pub fn new(
        categories: Vec<CategoryResult>,
        audits: Vec<AuditOutcome>,
        url: impl Into<String>,
        timing_total_ms: f64,
    ) -> Self {
        let main_document_url = url.into();
        let categories_doc: Map<String, Value> = categories
            .iter()
            .map(|c| {
                (
                    c.id.clone(),
                    serde_json::json!({ "id": c.id, "title": c.title, "score": c.score }),
                )
            })
            .collect();
        let audits_doc: Map<String, Value> = audits
            .iter()
            .map(|a| (a.id.clone(), serde_json::json!({ "id": a.id, "score": a.score })))
            .collect();
        let document = serde_json::json!({
            "categories": categories_doc,
            "audits": audits_doc,
            "mainDocumentUrl": main_document_url,
            "timing": { "total": timing_total_ms },
        });
        Self {
            categories,
            audits,
            main_document_url,
            timing_total_ms,
            document,
        }
    }

    /// Validate and extract the consumed fields from a full engine
    /// report document
    ///
    /// # Errors
    ///
    /// Returns [`FaroError::ReportShape`] when a required field is
    /// missing, mistyped, or a score falls outside [0, 1].
    pub fn from_value(value: &Value) -> FaroResult<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| FaroError::shape("report is not an object"))?;

        let categories_map = field_object(root, "categories")?;
        let mut categories = Vec::with_capacity(categories_map.len());
        for (key, entry) in categories_map {
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or(key.as_str())
                .to_string();
            let title = entry
                .get("title")
                .and_then(Value::as_str)
                .ok_or_else(|| FaroError::shape(format!("category {key} has no title")))?
                .to_string();
            let score = score_field(entry.get("score"), &format!("category {key}"))?;
            categories.push(CategoryResult { id, title, score });
        }

        let audits_map = field_object(root, "audits")?;
        let mut audits = Vec::with_capacity(audits_map.len());
        for (key, entry) in audits_map {
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or(key.as_str())
                .to_string();
            let score = score_field(entry.get("score"), &format!("audit {key}"))?;
            audits.push(AuditOutcome { id, score });
        }

        let main_document_url = root
            .get("mainDocumentUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| FaroError::shape("missing mainDocumentUrl"))?
            .to_string();

        let timing_total_ms = root
            .get("timing")
            .and_then(|t| t.get("total"))
            .and_then(Value::as_f64)
            .ok_or_else(|| FaroError::shape("missing timing.total"))?;

        Ok(Self {
            categories,
            audits,
            main_document_url,
            timing_total_ms,
            document: value.clone(),
        })
    }

    /// Full report document as produced by the engine
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }
}

fn field_object<'a>(root: &'a Map<String, Value>, name: &str) -> FaroResult<&'a Map<String, Value>> {
    root.get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| FaroError::shape(format!("missing {name} map")))
}

fn score_field(value: Option<&Value>, context: &str) -> FaroResult<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let score = n
                .as_f64()
                .ok_or_else(|| FaroError::shape(format!("{context} score is not a number")))?;
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(FaroError::shape(format!(
                    "{context} score {score} is outside [0, 1]"
                )));
            }
            Ok(Some(score))
        }
        Some(other) => Err(FaroError::shape(format!(
            "{context} score has unexpected type {other}"
        ))),
    }
}
