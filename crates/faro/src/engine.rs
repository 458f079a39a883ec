//! Audit engine invocation.
//!
//! The auditing engine is an external collaborator behind the
//! [`AuditEngine`] trait; its scoring heuristics are never
//! reimplemented here. [`invoke`] selects the entry point for the
//! requested mode and turns a missing result into a hard
//! [`EngineFailure`](crate::FaroError::EngineFailure). Audits are
//! expensive and a retried navigation run may observe different page
//! state, so nothing here retries.

use async_trait::async_trait;
use tracing::debug;

use crate::browser::Page;
use crate::emulation::EmulationProfile;
use crate::report::RawReport;
use crate::request::{AuditMode, Category, ReportFormat};
use crate::result::{FaroError, FaroResult};

/// Flags handed to the auditing engine for one run
///
/// Constructed fresh per invocation; never shared across calls.
#[derive(Debug, Clone)]
pub struct EngineFlags {
    /// Categories the engine should audit
    pub only_categories: Vec<Category>,
    /// Report formats the engine should be prepared to render
    pub output: Vec<ReportFormat>,
    /// Device emulation for the run
    pub emulation: EmulationProfile,
}

impl EngineFlags {
    /// Create flags for one engine run
    #[must_use]
    pub const fn new(
        only_categories: Vec<Category>,
        output: Vec<ReportFormat>,
        emulation: EmulationProfile,
    ) -> Self {
        Self {
            only_categories,
            output,
            emulation,
        }
    }
}

/// External auditing engine with navigation and snapshot entry points
#[async_trait]
pub trait AuditEngine: Send + Sync {
    /// Reload `page` at `url` and audit the fresh load
    ///
    /// # Errors
    ///
    /// Returns an error when the engine transport fails; `Ok(None)`
    /// when the engine ran but produced no report.
    async fn run_navigation(
        &self,
        page: &dyn Page,
        url: &str,
        flags: &EngineFlags,
    ) -> FaroResult<Option<RawReport>>;

    /// Audit the page in its current state without navigating
    ///
    /// # Errors
    ///
    /// Returns an error when the engine transport fails; `Ok(None)`
    /// when the engine ran but produced no report.
    async fn run_snapshot(
        &self,
        page: &dyn Page,
        flags: &EngineFlags,
    ) -> FaroResult<Option<RawReport>>;
}

/// Run the engine once in the requested mode
///
/// # Errors
///
/// Returns [`FaroError::EngineFailure`] when the engine yields no
/// report; engine transport errors propagate unchanged.
pub async fn invoke(
    engine: &dyn AuditEngine,
    page: &dyn Page,
    mode: AuditMode,
    flags: &EngineFlags,
) -> FaroResult<RawReport> {
    debug!(mode = mode.as_str(), "invoking audit engine");
    let result = match mode {
        AuditMode::Navigation => {
            let url = page.current_url().to_string();
            engine.run_navigation(page, &url, flags).await?
        }
        AuditMode::Snapshot => engine.run_snapshot(page, flags).await?,
    };
    result.ok_or_else(|| FaroError::engine("engine returned no report"))
}
