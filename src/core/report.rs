use crate::domain::model::{Item, ListKind, OperationOutcome, OutcomeStatus};
use crate::domain::ports::{CustomList, Storage};
use crate::utils::error::{ListError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 3] = ["json", "csv", "tsv"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub implementation: ListKind,
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<OperationOutcome>,
    pub final_contents: Vec<Item>,
}

impl ScenarioReport {
    pub fn new<L: CustomList<Item>>(
        scenario: &str,
        implementation: ListKind,
        outcomes: Vec<OperationOutcome>,
        list: &L,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            implementation,
            generated_at: Utc::now(),
            outcomes,
            final_contents: list.to_vec(),
        }
    }

    pub fn failed_steps(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == OutcomeStatus::Failed)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
    Tsv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Tsv => "tsv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            _ => Err(ListError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            }),
        }
    }
}

fn render_delimited(report: &ScenarioReport, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for outcome in &report.outcomes {
        writer.serialize(outcome)?;
    }
    writer
        .into_inner()
        .map_err(|e| ListError::IoError(e.into_error()))
}

pub fn render(report: &ScenarioReport, format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(report)?),
        ReportFormat::Csv => render_delimited(report, b','),
        ReportFormat::Tsv => render_delimited(report, b'\t'),
    }
}

fn file_stem(report: &ScenarioReport) -> String {
    let scenario: String = report
        .scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}_{}", scenario, report.implementation)
}

pub struct ReportWriter<S: Storage> {
    storage: S,
    formats: Vec<ReportFormat>,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S, formats: Vec<ReportFormat>) -> Self {
        Self { storage, formats }
    }

    /// Writes `report` once per configured format and returns the paths written.
    pub fn write(&self, report: &ScenarioReport) -> Result<Vec<String>> {
        let stem = file_stem(report);
        let mut written = Vec::with_capacity(self.formats.len());

        for format in &self.formats {
            let data = render(report, *format)?;
            let path = self
                .storage
                .write_file(&format!("{}.{}", stem, format.extension()), &data)?;
            tracing::debug!("Wrote {} report to {}", format.extension(), path);
            written.push(path);
        }

        Ok(written)
    }
}
