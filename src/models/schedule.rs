//! Work-schedule records and JSON fixture parsing.
//!
//! Parsing deserializes with Serde, validates the hourly invariants, and
//! computes a checksum over the raw JSON so a loaded dataset can be pinned in
//! tests. Malformed records fail here, at fixture-construction time, never at
//! render time.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::api::{CellValue, Column};
use crate::services::table::TableRow;

/// Hourly profiles always cover one day, hour 0 through 23.
pub const HOURS_PER_DAY: usize = 24;

/// Validation errors raised while building records from fixture input.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record {id}: '{field}' must have 24 hourly entries, got {got}")]
    WrongLength {
        id: i64,
        field: &'static str,
        got: usize,
    },
    #[error("record {id}: '{field}' hour {hour} is {value}, expected a non-negative finite number")]
    InvalidValue {
        id: i64,
        field: &'static str,
        hour: usize,
        value: f64,
    },
    #[error("duplicate record id {id}")]
    DuplicateId { id: i64 },
}

/// Parallel planned/actual per-hour sequences, exactly 24 entries each.
///
/// The arrays are private so the length and non-negativity invariants hold
/// for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyProfile {
    planned: [f64; HOURS_PER_DAY],
    actual: [f64; HOURS_PER_DAY],
}

impl HourlyProfile {
    /// Validate and build a profile for record `id`.
    pub fn new(id: i64, planned: Vec<f64>, actual: Vec<f64>) -> Result<Self, RecordError> {
        Ok(Self {
            planned: validate_hours(id, "planned", planned)?,
            actual: validate_hours(id, "actual", actual)?,
        })
    }

    pub fn planned(&self) -> &[f64; HOURS_PER_DAY] {
        &self.planned
    }

    pub fn actual(&self) -> &[f64; HOURS_PER_DAY] {
        &self.actual
    }
}

fn validate_hours(
    id: i64,
    field: &'static str,
    values: Vec<f64>,
) -> Result<[f64; HOURS_PER_DAY], RecordError> {
    if values.len() != HOURS_PER_DAY {
        return Err(RecordError::WrongLength {
            id,
            field,
            got: values.len(),
        });
    }
    for (hour, &value) in values.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(RecordError::InvalidValue {
                id,
                field,
                hour,
                value,
            });
        }
    }
    let mut hours = [0.0; HOURS_PER_DAY];
    hours.copy_from_slice(&values);
    Ok(hours)
}

/// One row of work-schedule data. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub project: String,
    pub assignee: String,
    pub status: String,
    pub hourly: HourlyProfile,
}

const SCHEDULE_COLUMNS: &[Column] = &[
    Column { id: "id", label: "ID" },
    Column { id: "date", label: "Date" },
    Column { id: "project", label: "Project" },
    Column { id: "assignee", label: "Assignee" },
    Column { id: "status", label: "Status" },
];

impl TableRow for ScheduleRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [Column] {
        SCHEDULE_COLUMNS
    }

    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => CellValue::Number(self.id as f64),
            "date" => CellValue::Date(self.date),
            "project" => CellValue::Text(self.project.clone()),
            "assignee" => CellValue::Text(self.assignee.clone()),
            "status" => CellValue::Text(self.status.clone()),
            _ => CellValue::Text(String::new()),
        }
    }
}

/// A loaded, validated set of schedule records plus the checksum of the JSON
/// it came from.
#[derive(Debug, Clone)]
pub struct ScheduleSet {
    pub records: Vec<ScheduleRecord>,
    pub checksum: String,
}

#[derive(Deserialize)]
struct ScheduleFile {
    records: Vec<RecordInput>,
}

#[derive(Deserialize)]
struct RecordInput {
    id: i64,
    date: NaiveDate,
    project: String,
    assignee: String,
    status: String,
    hourly: HourlyInput,
}

#[derive(Deserialize)]
struct HourlyInput {
    planned: Vec<f64>,
    actual: Vec<f64>,
}

/// Parse schedule records from a JSON string.
///
/// Deserializes the `{"records": [...]}` fixture shape, validates every
/// record (24 hourly entries, non-negative values, unique ids), and records
/// the SHA-256 checksum of the raw input.
pub fn parse_schedule_json_str(json: &str) -> Result<ScheduleSet> {
    let file: ScheduleFile =
        serde_json::from_str(json).context("Failed to deserialize schedule JSON")?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(file.records.len());
    for input in file.records {
        if !seen.insert(input.id) {
            return Err(RecordError::DuplicateId { id: input.id }).context("Invalid schedule fixture");
        }
        let hourly = HourlyProfile::new(input.id, input.hourly.planned, input.hourly.actual)
            .context("Invalid schedule fixture")?;
        records.push(ScheduleRecord {
            id: input.id,
            date: input.date,
            project: input.project,
            assignee: input.assignee,
            status: input.status,
            hourly,
        });
    }

    log::debug!("Parsed {} schedule records", records.len());

    Ok(ScheduleSet {
        records,
        checksum: compute_fixture_checksum(json),
    })
}

/// Parse schedule records from a JSON file on disk.
pub fn load_schedule_file(path: &std::path::Path) -> Result<ScheduleSet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule fixture {}", path.display()))?;
    parse_schedule_json_str(&json)
}

/// SHA-256 checksum (hex) of a raw fixture string.
pub fn compute_fixture_checksum(json: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}
