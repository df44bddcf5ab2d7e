//! Shared value types consumed by the service layer and rendering adapters.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One chart axis range. `None` on either side means "auto-compute from the
/// currently plotted values".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    /// Both bounds auto.
    pub const AUTO: AxisRange = AxisRange { min: None, max: None };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Build a range from raw text inputs.
    ///
    /// Empty or non-numeric text is treated as "auto" rather than an error:
    /// an axis bound box the user typed garbage into must never take the
    /// dashboard down.
    pub fn from_input(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Per-chart-instance axis configuration. Every chart widget owns its own
/// copy; ranges are never shared across instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartAxes {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// The one shape every rendering adapter consumes: hour labels plus the two
/// cumulative series restricted to the x-range, and the resolved y-range.
///
/// `categories`, `planned` and `actual` are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    /// Caption shown above the chart, e.g. `"2026-01-09 (Database Migration)"`.
    pub caption: String,
    /// Hour-of-day labels (`"9:00"`, `"10:00"`, ...) for the plotted points.
    pub categories: Vec<String>,
    /// Cumulative planned hours at each plotted point.
    pub planned: Vec<f64>,
    /// Cumulative actual hours at each plotted point.
    pub actual: Vec<f64>,
    /// Resolved y-axis bounds (explicit bounds win, otherwise auto-scaled).
    pub y_min: f64,
    pub y_max: f64,
}

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The direction a repeated click on the same column header switches to.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Static column metadata for a table row type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Stable identifier used for sort and visibility state.
    pub id: &'static str,
    /// Header label shown to the user.
    pub label: &'static str,
}

/// A single table cell, typed so sorting can use the natural ordering of the
/// column's value type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// Natural ordering within a variant: lexicographic for text, numeric for
    /// numbers, chronological for dates.
    ///
    /// Columns are assumed homogeneous; if two cells ever hold different
    /// variants they compare equal, so a stable sort leaves such rows in
    /// their original relative order.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d),
        }
    }
}
