//! Domain records and fixture parsing.
//!
//! Records are constructed once at startup (from the embedded JSON fixture or
//! the seeded generator) and validated at that point; everything downstream
//! may rely on the invariants without re-checking.

pub mod employee;
pub mod schedule;

pub use employee::{generate_employees, EmployeeRecord};
pub use schedule::{
    load_schedule_file, parse_schedule_json_str, HourlyProfile, RecordError, ScheduleRecord,
    ScheduleSet, HOURS_PER_DAY,
};
