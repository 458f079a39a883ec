//! Audit request parameters.
//!
//! One [`AuditRequest`] is built per tool invocation from the caller's
//! parameters, with defaults substituted for omitted fields, and never
//! mutated afterwards. The enums guarantee by construction that only
//! valid modes, devices, categories, and formats reach the pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Execution mode for an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    /// Reload the page at its current URL and audit the fresh load
    #[default]
    Navigation,
    /// Audit the page in its current state without navigating
    Snapshot,
}

impl AuditMode {
    /// Wire identifier for this mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Snapshot => "snapshot",
        }
    }
}

/// Device class to emulate during the audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Desktop viewport with near-zero throttling
    #[default]
    Desktop,
    /// Mobile viewport with cellular-class throttling
    Mobile,
}

impl Device {
    /// Wire identifier for this device class
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Audit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Accessibility checks
    Accessibility,
    /// Search-engine optimization checks
    Seo,
    /// General best-practice checks
    BestPractices,
}

impl Category {
    /// Every available category, in default request order
    pub const ALL: [Self; 3] = [Self::Accessibility, Self::Seo, Self::BestPractices];

    /// Wire identifier as the engine knows it
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Seo => "seo",
            Self::BestPractices => "best-practices",
        }
    }

    /// Display title as the engine reports it
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Accessibility => "Accessibility",
            Self::Seo => "SEO",
            Self::BestPractices => "Best Practices",
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Machine-readable JSON report
    Json,
    /// Self-contained HTML report
    Html,
}

impl ReportFormat {
    /// Every available format, in default request order
    pub const ALL: [Self; 2] = [Self::Json, Self::Html];

    /// Wire identifier for this format
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// File extension for artifacts in this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.id()
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Parameters for one audit invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRequest {
    /// Execution mode
    pub mode: AuditMode,
    /// Device class to emulate
    pub device: Device,
    /// Categories to audit; non-empty
    pub categories: Vec<Category>,
    /// Directory to write reports into; engine-managed temp files when None
    pub output_dir: Option<PathBuf>,
    /// Report formats to produce; non-empty
    pub formats: Vec<ReportFormat>,
}

impl Default for AuditRequest {
    fn default() -> Self {
        Self {
            mode: AuditMode::Navigation,
            device: Device::Desktop,
            categories: Category::ALL.to_vec(),
            output_dir: None,
            formats: ReportFormat::ALL.to_vec(),
        }
    }
}

impl AuditRequest {
    /// Create a request with every default substituted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    #[must_use]
    pub const fn with_mode(mut self, mode: AuditMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the emulated device
    #[must_use]
    pub const fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Set the audited categories
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the report output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the produced report formats
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<ReportFormat>) -> Self {
        self.formats = formats;
        self
    }
}
