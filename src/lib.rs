//! # Workdash Analytics Core
//!
//! Computational core for a work-schedule dashboard that renders a schedule
//! table next to interchangeable charting widgets. The rendering layer lives
//! in the frontend; this crate owns everything underneath it:
//!
//! - **Cumulative series transform**: per-hour planned/actual deltas become
//!   running totals, restricted to user-chosen axis ranges
//!   ([`services::series`])
//! - **Tabular query engine**: debounced free-text search, stable
//!   single-column sort, column visibility, and row selection over an
//!   immutable row set ([`services::table`])
//! - **Dashboard wiring**: row activation drives chart recomputation and
//!   notifies rendering adapters ([`services::dashboard`], [`adapters`])
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: shared value types consumed by services and adapters
//! - [`models`]: domain records and fixture parsing
//! - [`store`]: in-memory read-only row store
//! - [`services`]: view-derivation logic (series, table, debounce, session)
//! - [`adapters`]: the rendering seam ([`adapters::ChartAdapter`])
//!
//! All rows are loaded once at startup and never mutated; every view is a
//! pure function of explicit per-instance state plus that immutable data, so
//! no locking discipline is needed outside the resize listener registry.

pub mod adapters;
pub mod api;
pub mod models;
pub mod services;
pub mod store;

pub use adapters::{AdapterError, ChartAdapter};
pub use api::{AxisRange, CellValue, ChartAxes, ChartFrame, Column, SortDirection};
pub use models::{EmployeeRecord, HourlyProfile, RecordError, ScheduleRecord};
pub use store::LocalStore;
