//! Audit tool entry points.
//!
//! Two tools share one pipeline: the full audit with configurable
//! categories, devices, and report files, and a degenerate
//! accessibility-only variant with no file output. Each invocation
//! runs as a single suspend-capable sequence (resolve profile, invoke
//! engine, materialize artifacts, summarize, attach) with no state
//! shared across invocations.

use tracing::{debug, info};

use crate::artifact::{materialize, Storage};
use crate::browser::Page;
use crate::emulation::EmulationProfile;
use crate::engine::{invoke, AuditEngine, EngineFlags};
use crate::request::{AuditMode, AuditRequest, Category, Device};
use crate::response::{AttachedResult, ResponseChannel};
use crate::result::FaroResult;
use crate::summary::{breakdown, summarize};

/// Static description of a tool surfaced to the calling agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Tool name as registered with the agent
    pub name: &'static str,
    /// One-line description shown to the agent
    pub description: &'static str,
    /// The tool reads page state without mutating the caller's session
    pub read_only: bool,
}

/// Full audit tool
pub const PAGE_AUDIT: ToolDescriptor = ToolDescriptor {
    name: "page_audit",
    description: "Runs a quality audit on the currently selected page.",
    read_only: true,
};

/// Degenerate variant: accessibility only, no report files
pub const ACCESSIBILITY_CHECK: ToolDescriptor = ToolDescriptor {
    name: "accessibility_check",
    description: "Checks accessibility of the currently selected page.",
    read_only: true,
};

/// Run the full audit pipeline and attach the structured result
///
/// # Errors
///
/// Returns [`FaroError::EngineFailure`](crate::FaroError::EngineFailure)
/// when the engine yields no report, and
/// [`FaroError::ArtifactWriteFailure`](crate::FaroError::ArtifactWriteFailure)
/// for the first format whose write fails; artifacts already written
/// stay in place.
pub async fn run_page_audit(
    page: &dyn Page,
    request: &AuditRequest,
    engine: &dyn AuditEngine,
    storage: &dyn Storage,
    response: &mut dyn ResponseChannel,
) -> FaroResult<()> {
    info!(
        tool = PAGE_AUDIT.name,
        mode = request.mode.as_str(),
        device = request.device.as_str(),
        "starting audit"
    );

    let profile = EmulationProfile::resolve(request.device);
    let flags = EngineFlags::new(
        request.categories.clone(),
        request.formats.clone(),
        profile,
    );

    let report = invoke(engine, page, request.mode, &flags).await?;

    let artifacts = materialize(
        &report,
        &request.formats,
        request.output_dir.as_deref(),
        storage,
    )
    .await?;
    let summary = summarize(&report, request.mode, request.device);

    debug!(
        failed = summary.audits.failed,
        passed = summary.audits.passed,
        url = %summary.url,
        "audit summarized"
    );

    response.attach_audit_result(AttachedResult {
        summary,
        reports: artifacts.into_iter().map(|a| a.path).collect(),
    });
    Ok(())
}

/// Run the accessibility-only variant and append its breakdown as text
///
/// Uses the full tool's parameter defaults (navigation mode, desktop
/// profile) and produces no report files.
///
/// # Errors
///
/// Returns [`FaroError::EngineFailure`](crate::FaroError::EngineFailure)
/// when the engine yields no report.
pub async fn run_accessibility_check(
    page: &dyn Page,
    engine: &dyn AuditEngine,
    response: &mut dyn ResponseChannel,
) -> FaroResult<()> {
    info!(tool = ACCESSIBILITY_CHECK.name, "starting accessibility check");

    let profile = EmulationProfile::resolve(Device::Desktop);
    let flags = EngineFlags::new(vec![Category::Accessibility], Vec::new(), profile);

    let report = invoke(engine, page, AuditMode::Navigation, &flags).await?;
    let detail = breakdown(&report, Category::Accessibility);

    let mut payload = serde_json::Map::new();
    payload.insert(
        Category::Accessibility.title().to_string(),
        serde_json::to_value(&detail)?,
    );
    response.append_text_line(serde_json::to_string_pretty(&serde_json::Value::Object(
        payload,
    ))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_are_read_only() {
        assert!(PAGE_AUDIT.read_only);
        assert!(ACCESSIBILITY_CHECK.read_only);
    }

    #[test]
    fn test_descriptor_names_are_distinct() {
        assert_ne!(PAGE_AUDIT.name, ACCESSIBILITY_CHECK.name);
    }
}
