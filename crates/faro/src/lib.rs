//! Faro: page-quality audit orchestration for agent-driven browser
//! sessions.
//!
//! Faro (Spanish: "lighthouse") exposes an automated audit capability
//! to a tool-calling agent that controls a browser session: resolve a
//! device emulation profile, invoke an external auditing engine in
//! navigation or snapshot mode, persist report artifacts, derive a
//! structured summary, and attach both to the caller's response
//! channel.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     FARO Pipeline                             │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────┐   ┌─────────────┐   ┌─────────┐  │
//! │  │ Profile  │──►│  Audit   │──►│ Materialize │──►│ Attach  │  │
//! │  │ Resolver │   │ Invoker  │   │ + Summarize │   │ Result  │  │
//! │  └──────────┘   └──────────┘   └─────────────┘   └─────────┘  │
//! │                       │                                       │
//! │                       ▼                                       │
//! │               external engine (navigation / snapshot)         │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine, page handle, storage, and response channel are all
//! caller-owned collaborators behind traits; Faro never reimplements
//! the engine's scoring heuristics and treats its report as an opaque
//! value validated only at the shape boundaries it consumes.

#![warn(missing_docs)]

mod artifact;
mod browser;
mod emulation;
mod engine;
mod report;
mod request;
mod response;
mod result;
mod summary;
mod tool;

pub use artifact::{materialize, render, DiskStorage, ReportArtifact, SavedFile, Storage, TempFile};
#[cfg(feature = "browser")]
pub use browser::BrowserPage;
pub use browser::{Page, StaticPage};
pub use emulation::{EmulationProfile, NetworkThrottling, ScreenEmulation};
pub use engine::{invoke, AuditEngine, EngineFlags};
pub use report::{AuditOutcome, CategoryResult, RawReport};
pub use request::{AuditMode, AuditRequest, Category, Device, ReportFormat};
pub use response::{AttachedResult, CollectingResponse, ResponseChannel};
pub use result::{FaroError, FaroResult};
pub use summary::{
    breakdown, classify, summarize, AuditCounts, AuditSummary, AuditVerdict, CategoryBreakdown,
    CategoryScore, Timing,
};
pub use tool::{run_accessibility_check, run_page_audit, ToolDescriptor, ACCESSIBILITY_CHECK, PAGE_AUDIT};
