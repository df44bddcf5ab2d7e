//! Service layer: pure view-derivation logic over the immutable row data.
//!
//! Services own no rendering concerns. They turn per-instance state (axis
//! ranges, table view state, selection) plus the read-only store into the
//! derived shapes the rendering adapters consume.

pub mod dashboard;
pub mod debounce;
pub mod series;
pub mod table;

#[cfg(test)]
mod series_tests;

pub use dashboard::{DashboardSession, ResizeHub};
pub use debounce::{debounced_channel, Debouncer};
pub use series::{chart_frame, cumulative_sum, filter_by_range, resolve_range};
pub use table::{TableRow, TableView, TableViewState};
