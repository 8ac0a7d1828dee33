//! One-shot report export.
//!
//! Calls `POST /api/export-report` and writes the `report` field, pretty
//! printed, to `fraud-report-<YYYY-MM-DD>.json` in the export directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{fetch, EndpointClient, EndpointError, ExportReport, ExportedReport};
use crate::config::ExportConfig;
use crate::model::{DateRange, ReportRequest};

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Report request failed: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for a report generated on `date`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("fraud-report-{}.json", date.format("%Y-%m-%d"))
}

/// Builds export requests from config and writes the results to disk.
#[derive(Clone)]
pub struct ReportExporter {
    client: Arc<dyn EndpointClient>,
    config: ExportConfig,
}

impl ReportExporter {
    pub fn new(client: Arc<dyn EndpointClient>, config: ExportConfig) -> Self {
        Self { client, config }
    }

    pub fn report_request(&self) -> ReportRequest {
        ReportRequest {
            report_type: self.config.report_type.clone(),
            date_range: DateRange {
                start: self.config.range_start.clone(),
                end: self.config.range_end.clone(),
            },
        }
    }

    /// Fetch the report and write it. Returns the written path.
    pub async fn export(&self, today: NaiveDate) -> Result<PathBuf, ExportError> {
        let endpoint = ExportReport {
            request: self.report_request(),
        };
        let exported = fetch(self.client.as_ref(), &endpoint).await?;
        let path = Path::new(&self.config.directory).join(report_file_name(today));
        write_report(&path, &exported)?;

        tracing::info!(
            path = %path.display(),
            fraud_detected = exported.report.summary.fraud_detected,
            "Report exported"
        );
        Ok(path)
    }
}

fn write_report(path: &Path, exported: &ExportedReport) -> Result<(), ExportError> {
    let content = serde_json::to_string_pretty(&exported.raw)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
