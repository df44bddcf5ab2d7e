//! In-memory read-only row store.
//!
//! All rows are loaded once at startup and never change afterwards, so the
//! store is a cheaply cloneable handle over shared immutable data — no locks,
//! no interior mutability. Table and chart instances each hold their own view
//! state on top of the same store.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::models::employee::{generate_employees, EmployeeRecord};
use crate::models::schedule::{parse_schedule_json_str, ScheduleRecord};

/// Embedded default fixture, the dataset the dashboard ships with.
const SAMPLE_SCHEDULE_JSON: &str = include_str!("../data/work_schedule.json");

/// Row count and seed for the generated employee dataset.
const SAMPLE_EMPLOYEE_COUNT: usize = 100;
const SAMPLE_EMPLOYEE_SEED: u64 = 42;

/// Cloneable handle over the immutable row data.
#[derive(Debug, Clone)]
pub struct LocalStore {
    inner: Arc<StoreData>,
}

#[derive(Debug)]
struct StoreData {
    schedules: Vec<ScheduleRecord>,
    employees: Vec<EmployeeRecord>,
    checksum: String,
}

impl LocalStore {
    /// Build a store from already-validated rows.
    pub fn new(schedules: Vec<ScheduleRecord>, employees: Vec<EmployeeRecord>) -> Self {
        Self {
            inner: Arc::new(StoreData {
                schedules,
                employees,
                checksum: String::new(),
            }),
        }
    }

    /// Build the store from the embedded sample fixture plus a seeded
    /// employee dataset.
    pub fn with_sample_data() -> Result<Self> {
        let set = parse_schedule_json_str(SAMPLE_SCHEDULE_JSON)
            .context("Failed to load embedded schedule fixture")?;
        log::info!(
            "Loaded sample dataset: {} schedule records, checksum {}",
            set.records.len(),
            set.checksum
        );
        Ok(Self {
            inner: Arc::new(StoreData {
                schedules: set.records,
                employees: generate_employees(SAMPLE_EMPLOYEE_COUNT, SAMPLE_EMPLOYEE_SEED),
                checksum: set.checksum,
            }),
        })
    }

    pub fn schedules(&self) -> &[ScheduleRecord] {
        &self.inner.schedules
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.inner.employees
    }

    pub fn schedule_by_id(&self, id: i64) -> Option<&ScheduleRecord> {
        self.inner.schedules.iter().find(|r| r.id == id)
    }

    /// Checksum of the fixture JSON this store was loaded from, empty for
    /// stores built directly from rows.
    pub fn checksum(&self) -> &str {
        &self.inner.checksum
    }
}
