//! Runs generation work items, concurrently or one after another.

use aggtest_generator::derive_seed;
use aggtest_populate::{data_row_count, PopulateMetrics, TaskTimer};
use aggtest_populate_csv::{CSVPopulator, CSVPopulatorError};
use aggtest_populate_xml::{XMLPopulator, XMLPopulatorError};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Errors raised by a single generation task.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("CSV generation failed: {0}")]
    Csv(#[from] CSVPopulatorError),

    #[error("XML generation failed: {0}")]
    Xml(#[from] XMLPopulatorError),

    /// The worker running the task panicked or was aborted.
    #[error("Generation task did not complete: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Xml => f.write_str("xml"),
        }
    }
}

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub format: OutputFormat,
    pub path: PathBuf,
    /// Requested row count; the file holds one fewer record.
    pub rows: u64,
    /// Indent nested output (XML only).
    pub indent: bool,
}

impl WorkItem {
    pub fn csv(path: impl Into<PathBuf>, rows: u64) -> Self {
        Self {
            format: OutputFormat::Csv,
            path: path.into(),
            rows,
            indent: false,
        }
    }

    pub fn xml(path: impl Into<PathBuf>, rows: u64) -> Self {
        Self {
            format: OutputFormat::Xml,
            path: path.into(),
            rows,
            indent: false,
        }
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    fn task_name(&self) -> String {
        format!("generate_{}({})", self.format, self.path.display())
    }
}

/// Result of one work item.
#[derive(Debug)]
pub struct TaskOutcome {
    pub item: WorkItem,
    pub result: Result<PopulateMetrics, DriverError>,
}

/// Serializable summary of one work item, written by `--emit-metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub requested_rows: u64,
    pub expected_rows: u64,
    pub rows_written: u64,
    pub file_size_bytes: u64,
    pub duration_secs: f64,
    pub rows_per_second: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&TaskOutcome> for TaskSummary {
    fn from(outcome: &TaskOutcome) -> Self {
        let (metrics, error) = match &outcome.result {
            Ok(metrics) => (metrics.clone(), None),
            Err(e) => (PopulateMetrics::default(), Some(e.to_string())),
        };
        Self {
            format: outcome.item.format,
            path: outcome.item.path.clone(),
            requested_rows: outcome.item.rows,
            expected_rows: data_row_count(outcome.item.rows),
            rows_written: metrics.rows_written,
            file_size_bytes: metrics.file_size_bytes,
            duration_secs: metrics.total_duration.as_secs_f64(),
            rows_per_second: metrics.rows_per_second(),
            error,
        }
    }
}

/// Outcomes of every dispatched work item, in submission order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Outcomes whose task failed.
    pub fn failures(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.outcomes.iter().map(TaskSummary::from).collect()
    }

    /// Write the task summaries as pretty-printed JSON.
    pub fn write_metrics(&self, path: &Path) -> Result<(), DriverError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.summaries())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Run one work item to completion on the current thread.
pub fn run_work_item(item: &WorkItem, seed: u64) -> Result<PopulateMetrics, DriverError> {
    let _timer = TaskTimer::start(item.task_name());

    let metrics = match item.format {
        OutputFormat::Csv => CSVPopulator::new(seed).populate(&item.path, item.rows)?,
        OutputFormat::Xml => XMLPopulator::new(seed)
            .with_indent(item.indent)
            .populate(&item.path, item.rows)?,
    };
    Ok(metrics)
}

/// Run every work item on its own blocking worker and wait for all of them.
///
/// Items share nothing. Each gets a seed derived from `seed` and its
/// position, and a failing item does not affect the others.
pub async fn dispatch(items: Vec<WorkItem>, seed: u64) -> DispatchReport {
    let handles: Vec<_> = items
        .into_iter()
        .enumerate()
        .map(|(stream, item)| {
            let task_seed = derive_seed(seed, stream as u64);
            let task_item = item.clone();
            let handle =
                tokio::task::spawn_blocking(move || run_work_item(&task_item, task_seed));
            (item, handle)
        })
        .collect();

    let mut report = DispatchReport::default();
    for (item, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(DriverError::TaskFailed(e.to_string())),
        };
        report.outcomes.push(log_outcome(item, result));
    }
    report
}

/// Run every work item one after another with the same seeds as [`dispatch`].
pub fn dispatch_sequential(items: Vec<WorkItem>, seed: u64) -> DispatchReport {
    let outcomes = items
        .into_iter()
        .enumerate()
        .map(|(stream, item)| {
            let result = run_work_item(&item, derive_seed(seed, stream as u64));
            log_outcome(item, result)
        })
        .collect();
    DispatchReport { outcomes }
}

fn log_outcome(item: WorkItem, result: Result<PopulateMetrics, DriverError>) -> TaskOutcome {
    match &result {
        Ok(metrics) => info!(
            "Generated {:?}: {} rows in {:?}",
            item.path, metrics.rows_written, metrics.total_duration
        ),
        Err(e) => error!("Failed to generate {:?}: {}", item.path, e),
    }
    TaskOutcome { item, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_work_item_csv() {
        let temp_dir = TempDir::new().unwrap();
        let item = WorkItem::csv(temp_dir.path().join("a.csv"), 10);

        let metrics = run_work_item(&item, 42).unwrap();
        assert_eq!(metrics.rows_written, 9);
    }

    #[test]
    fn test_run_work_item_xml() {
        let temp_dir = TempDir::new().unwrap();
        let item = WorkItem::xml(temp_dir.path().join("a.xml"), 10).with_indent(true);

        let metrics = run_work_item(&item, 42).unwrap();
        assert_eq!(metrics.rows_written, 9);
        let content = std::fs::read_to_string(&item.path).unwrap();
        assert!(content.contains("\n  <row>"));
    }

    #[test]
    fn test_sequential_report_keeps_failures_separate() {
        let temp_dir = TempDir::new().unwrap();
        let items = vec![
            WorkItem::csv(temp_dir.path().join("missing").join("a.csv"), 10),
            WorkItem::xml(temp_dir.path().join("b.xml"), 10),
        ];

        let report = dispatch_sequential(items, 42);
        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
        assert!(matches!(
            report.outcomes[0].result,
            Err(DriverError::Csv(CSVPopulatorError::Io(_)))
        ));
        assert_eq!(report.outcomes[1].result.as_ref().unwrap().rows_written, 9);
    }

    #[test]
    fn test_summaries_serialize() {
        let temp_dir = TempDir::new().unwrap();
        let items = vec![
            WorkItem::csv(temp_dir.path().join("a.csv"), 3),
            WorkItem::xml(temp_dir.path().join("missing").join("b.xml"), 3),
        ];
        let report = dispatch_sequential(items, 1);

        let metrics_path = temp_dir.path().join("metrics.json");
        report.write_metrics(&metrics_path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&metrics_path).unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["format"], "csv");
        assert_eq!(entries[0]["requested_rows"], 3);
        assert_eq!(entries[0]["rows_written"], 2);
        assert!(entries[0].get("error").is_none());
        assert_eq!(entries[1]["format"], "xml");
        assert!(entries[1]["error"].as_str().unwrap().starts_with("XML generation failed"));
    }
}
