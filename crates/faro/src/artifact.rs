//! Report rendering and artifact persistence.
//!
//! Each requested format is rendered and written independently, in
//! request order; the returned sequence matches that order because
//! callers index it positionally. Writes are best-effort across
//! formats: a failure for one format surfaces as an
//! [`ArtifactWriteFailure`](crate::FaroError::ArtifactWriteFailure)
//! and does not roll back artifacts already written.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::report::RawReport;
use crate::request::ReportFormat;
use crate::result::{FaroError, FaroResult};

/// A persisted rendering of the report in one output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    /// Output format of the artifact
    pub format: ReportFormat,
    /// Where the artifact was written
    pub path: PathBuf,
}

/// Outcome of a write to a caller-specified destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Path the file was written to
    pub filename: PathBuf,
}

/// Outcome of a write to an engine-managed temporary destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempFile {
    /// Unique path chosen for the file
    pub filepath: PathBuf,
}

/// Durable storage for report artifacts
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` to a caller-specified destination
    ///
    /// # Errors
    ///
    /// Returns an error when the destination cannot be written.
    async fn save_file(&self, data: &[u8], path: &Path) -> FaroResult<SavedFile>;

    /// Write `data` to a new uniquely-named temporary file
    ///
    /// # Errors
    ///
    /// Returns an error when no temporary file can be created or
    /// written.
    async fn save_temporary_file(&self, data: &[u8], suggested_name: &str) -> FaroResult<TempFile>;
}

/// Filesystem-backed storage
///
/// Temporary files are uniquely named after the suggested name's stem
/// and persisted past drop; their lifetime is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStorage;

impl DiskStorage {
    /// Create a filesystem-backed storage
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storage for DiskStorage {
    async fn save_file(&self, data: &[u8], path: &Path) -> FaroResult<SavedFile> {
        tokio::fs::write(path, data).await?;
        Ok(SavedFile {
            filename: path.to_path_buf(),
        })
    }

    async fn save_temporary_file(&self, data: &[u8], suggested_name: &str) -> FaroResult<TempFile> {
        let suggested = Path::new(suggested_name);
        let stem = suggested
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");
        let suffix = suggested
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let file = tempfile::Builder::new()
            .prefix(&format!("{stem}-"))
            .suffix(&suffix)
            .tempfile()?;
        let filepath = file
            .into_temp_path()
            .keep()
            .map_err(|e| FaroError::Io(e.error))?;
        tokio::fs::write(&filepath, data).await?;
        Ok(TempFile { filepath })
    }
}

/// Render the report into one format's serialization
///
/// JSON is the engine's report document verbatim; HTML is a
/// self-contained styled page over the consumed fields.
///
/// # Errors
///
/// Returns [`FaroError::Json`] if JSON serialization fails.
pub fn render(report: &RawReport, format: ReportFormat) -> FaroResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report.document())?),
        ReportFormat::Html => Ok(render_html(report)),
    }
}

/// Render and persist the report once per requested format
///
/// # Errors
///
/// Returns [`FaroError::ArtifactWriteFailure`] identifying the format
/// and destination of the write that failed; earlier artifacts stay in
/// place.
pub async fn materialize(
    report: &RawReport,
    formats: &[ReportFormat],
    output_dir: Option<&Path>,
    storage: &dyn Storage,
) -> FaroResult<Vec<ReportArtifact>> {
    let mut artifacts = Vec::with_capacity(formats.len());
    for &format in formats {
        let rendered = render(report, format)?;
        let data = rendered.as_bytes();
        let filename = format!("report.{}", format.extension());

        let path = if let Some(dir) = output_dir {
            let destination = dir.join(&filename);
            let saved = storage
                .save_file(data, &destination)
                .await
                .map_err(|err| write_failure(format, destination.clone(), err))?;
            saved.filename
        } else {
            let tmp = storage
                .save_temporary_file(data, &filename)
                .await
                .map_err(|err| write_failure(format, PathBuf::from(&filename), err))?;
            tmp.filepath
        };

        debug!(format = format.id(), path = %path.display(), "report artifact written");
        artifacts.push(ReportArtifact { format, path });
    }
    Ok(artifacts)
}

fn write_failure(format: ReportFormat, destination: PathBuf, err: FaroError) -> FaroError {
    match err {
        FaroError::Io(source) => FaroError::ArtifactWriteFailure {
            format,
            destination,
            source,
        },
        other => other,
    }
}

fn render_html(report: &RawReport) -> String {
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Page Audit Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 20px; }
        .summary { background: #f5f5f5; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
        .category { padding: 10px; margin: 5px 0; border-radius: 4px; }
        .category.good { background: #e8f5e9; border-left: 4px solid #4caf50; }
        .category.poor { background: #ffebee; border-left: 4px solid #f44336; }
        .category.na { background: #fff3e0; border-left: 4px solid #ff9800; }
        .url { font-family: monospace; }
    </style>
</head>
<body>
"#,
    );

    html.push_str(&format!(
        r#"<div class="summary">
    <h1>Page Audit Report</h1>
    <p class="url">{}</p>
    <p>Engine time: {:.0}ms</p>
</div>
"#,
        escape_html(&report.main_document_url),
        report.timing_total_ms
    ));

    html.push_str("<h2>Categories</h2>\n");
    for category in &report.categories {
        let (class, label) = match category.score {
            Some(score) if score >= 0.9 => ("good", format!("{:.0}%", score * 100.0)),
            Some(score) => ("poor", format!("{:.0}%", score * 100.0)),
            None => ("na", "n/a".to_string()),
        };
        html.push_str(&format!(
            r#"<div class="category {}">
    <strong>{}</strong> - {}
</div>
"#,
            class,
            escape_html(&category.title),
            label
        ));
    }

    html.push_str(
        r#"
<footer>
    <p>Generated by Faro</p>
</footer>
</body>
</html>
"#,
    );

    html
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{AuditOutcome, CategoryResult};

    fn sample_report() -> RawReport {
        RawReport::new(
            vec![
                CategoryResult::new("accessibility", "Accessibility", Some(0.95)),
                CategoryResult::new("seo", "SEO", Some(0.4)),
                CategoryResult::new("best-practices", "Best Practices", None),
            ],
            vec![AuditOutcome::new("color-contrast", Some(0.0))],
            "https://example.com/",
            321.0,
        )
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_json_is_engine_document() {
            let report = sample_report();
            let rendered = render(&report, ReportFormat::Json).unwrap();
            let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
            assert_eq!(&value, report.document());
        }

        #[test]
        fn test_html_contains_url_and_categories() {
            let html = render(&sample_report(), ReportFormat::Html).unwrap();
            assert!(html.contains("https://example.com/"));
            assert!(html.contains("Accessibility"));
            assert!(html.contains("Best Practices"));
            assert!(html.contains("n/a"));
        }

        #[test]
        fn test_html_escapes_url() {
            let report = RawReport::new(
                Vec::new(),
                Vec::new(),
                "https://example.com/?a=<b>&c=d",
                1.0,
            );
            let html = render(&report, ReportFormat::Html).unwrap();
            assert!(html.contains("&lt;b&gt;"));
            assert!(!html.contains("?a=<b>"));
        }
    }

    mod disk_storage_tests {
        use super::*;

        #[tokio::test]
        async fn test_save_file_writes_destination() {
            let dir = tempfile::tempdir().unwrap();
            let destination = dir.path().join("report.json");

            let saved = DiskStorage::new()
                .save_file(b"{}", &destination)
                .await
                .unwrap();

            assert_eq!(saved.filename, destination);
            assert_eq!(std::fs::read(&destination).unwrap(), b"{}");
        }

        #[tokio::test]
        async fn test_save_temporary_file_is_unique_and_persisted() {
            let storage = DiskStorage::new();
            let first = storage
                .save_temporary_file(b"a", "report.json")
                .await
                .unwrap();
            let second = storage
                .save_temporary_file(b"b", "report.json")
                .await
                .unwrap();

            assert_ne!(first.filepath, second.filepath);
            assert!(first.filepath.exists());
            assert_eq!(
                first.filepath.extension().and_then(|e| e.to_str()),
                Some("json")
            );

            std::fs::remove_file(&first.filepath).unwrap();
            std::fs::remove_file(&second.filepath).unwrap();
        }
    }

    mod materialize_tests {
        use super::*;
        use std::sync::Mutex;

        /// Storage that fails every write for one format's destination
        struct FailingStorage {
            fail_suffix: &'static str,
            written: Mutex<Vec<PathBuf>>,
        }

        #[async_trait]
        impl Storage for FailingStorage {
            async fn save_file(&self, _data: &[u8], path: &Path) -> FaroResult<SavedFile> {
                if path.to_string_lossy().ends_with(self.fail_suffix) {
                    return Err(FaroError::Io(std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        "denied",
                    )));
                }
                self.written.lock().unwrap().push(path.to_path_buf());
                Ok(SavedFile {
                    filename: path.to_path_buf(),
                })
            }

            async fn save_temporary_file(
                &self,
                _data: &[u8],
                suggested_name: &str,
            ) -> FaroResult<TempFile> {
                let path = PathBuf::from(format!("/tmp/unique-{suggested_name}"));
                self.written.lock().unwrap().push(path.clone());
                Ok(TempFile { filepath: path })
            }
        }

        #[tokio::test]
        async fn test_order_and_count_match_request() {
            let storage = FailingStorage {
                fail_suffix: "never",
                written: Mutex::new(Vec::new()),
            };
            let formats = [ReportFormat::Html, ReportFormat::Json];

            let artifacts = materialize(&sample_report(), &formats, None, &storage)
                .await
                .unwrap();

            assert_eq!(artifacts.len(), 2);
            assert_eq!(artifacts[0].format, ReportFormat::Html);
            assert_eq!(artifacts[1].format, ReportFormat::Json);
        }

        #[tokio::test]
        async fn test_output_dir_naming() {
            let storage = FailingStorage {
                fail_suffix: "never",
                written: Mutex::new(Vec::new()),
            };
            let formats = [ReportFormat::Json, ReportFormat::Html];

            let artifacts = materialize(
                &sample_report(),
                &formats,
                Some(Path::new("/tmp/X")),
                &storage,
            )
            .await
            .unwrap();

            assert_eq!(artifacts[0].path, PathBuf::from("/tmp/X/report.json"));
            assert_eq!(artifacts[1].path, PathBuf::from("/tmp/X/report.html"));
        }

        #[tokio::test]
        async fn test_write_failure_identifies_format_and_keeps_earlier_artifacts() {
            let storage = FailingStorage {
                fail_suffix: "report.html",
                written: Mutex::new(Vec::new()),
            };
            let formats = [ReportFormat::Json, ReportFormat::Html];

            let err = materialize(
                &sample_report(),
                &formats,
                Some(Path::new("/tmp/X")),
                &storage,
            )
            .await
            .unwrap_err();

            match err {
                FaroError::ArtifactWriteFailure {
                    format,
                    destination,
                    ..
                } => {
                    assert_eq!(format, ReportFormat::Html);
                    assert_eq!(destination, PathBuf::from("/tmp/X/report.html"));
                }
                other => panic!("unexpected error: {other}"),
            }

            // The json artifact written before the failure is not rolled back.
            assert_eq!(
                storage.written.lock().unwrap().as_slice(),
                [PathBuf::from("/tmp/X/report.json")]
            );
        }
    }
}
