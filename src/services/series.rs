//! Cumulative series transform and range-filtered chart input.
//!
//! Every chart widget in the dashboard plots the same thing: the running
//! total of per-hour planned/actual deltas, restricted to a user-chosen axis
//! range. This module is the single implementation all adapters share.

use crate::api::{AxisRange, ChartAxes, ChartFrame};
use crate::models::schedule::{ScheduleRecord, HOURS_PER_DAY};

/// Axis bounds used when auto-scaling an empty point set: `(0.0, 1.0)`.
///
/// An empty filtered range is a valid terminal state; the default keeps the
/// axis drawable and non-degenerate instead of producing NaN.
pub const EMPTY_SET_RANGE: (f64, f64) = (0.0, 1.0);

/// Running totals of `values`, summed strictly left to right.
///
/// `out[0] = in[0]`, `out[i] = out[i-1] + in[i]`. The summation order is part
/// of the contract: floating-point rounding is reproducible and identical
/// across every chart variant.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|&v| {
            total += v;
            total
        })
        .collect()
}

/// Points of `values` whose index lies in `[x_min, x_max]`, original order.
///
/// An inverted range (`x_min > x_max`) yields an empty result, never an
/// error.
pub fn filter_by_range(values: &[f64], x_min: f64, x_max: f64) -> Vec<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| {
            let i = i as f64;
            i >= x_min && i <= x_max
        })
        .collect()
}

/// Resolve an axis range against the plotted values.
///
/// Explicit bounds win; absent bounds auto-scale from the min/max of
/// `values`. When `values` is empty, absent bounds fall back to
/// [`EMPTY_SET_RANGE`].
pub fn resolve_range(values: &[f64], range: AxisRange) -> (f64, f64) {
    let auto = |pick: fn(f64, f64) -> f64, seed: f64, default: f64| {
        if values.is_empty() {
            default
        } else {
            values.iter().copied().fold(seed, pick)
        }
    };
    let min = range
        .min
        .unwrap_or_else(|| auto(f64::min, f64::INFINITY, EMPTY_SET_RANGE.0));
    let max = range
        .max
        .unwrap_or_else(|| auto(f64::max, f64::NEG_INFINITY, EMPTY_SET_RANGE.1));
    (min, max)
}

/// Hour-of-day label, `9` → `"9:00"`.
pub fn hour_label(hour: usize) -> String {
    format!("{}:00", hour)
}

/// Build the chart input for a record under the given axis configuration.
///
/// Both series are cumulated over the full day first, then restricted to the
/// x-range, so a window like `[8, 17]` shows the running totals accumulated
/// since hour 0, exactly as the full-day chart does.
pub fn chart_frame(record: &ScheduleRecord, axes: &ChartAxes) -> ChartFrame {
    let planned = cumulative_sum(record.hourly.planned());
    let actual = cumulative_sum(record.hourly.actual());

    let x_min = axes.x.min.unwrap_or(0.0);
    let x_max = axes.x.max.unwrap_or((HOURS_PER_DAY - 1) as f64);
    let planned_points = filter_by_range(&planned, x_min, x_max);
    let actual_points = filter_by_range(&actual, x_min, x_max);

    // Auto y-bounds consider every plotted value from both series.
    let mut y_values: Vec<f64> = planned_points.iter().map(|&(_, v)| v).collect();
    y_values.extend(actual_points.iter().map(|&(_, v)| v));
    let (y_min, y_max) = resolve_range(&y_values, axes.y);

    log::debug!(
        "chart_frame: record={} x=[{}, {}] points={}",
        record.id,
        x_min,
        x_max,
        planned_points.len()
    );

    ChartFrame {
        caption: format!("{} ({})", record.date, record.project),
        categories: planned_points.iter().map(|&(i, _)| hour_label(i)).collect(),
        planned: planned_points.into_iter().map(|(_, v)| v).collect(),
        actual: actual_points.into_iter().map(|(_, v)| v).collect(),
        y_min,
        y_max,
    }
}

/// Frame rendered when no record is available at all: no points, default
/// y-range.
pub fn empty_frame() -> ChartFrame {
    ChartFrame {
        caption: String::new(),
        categories: Vec::new(),
        planned: Vec::new(),
        actual: Vec::new(),
        y_min: EMPTY_SET_RANGE.0,
        y_max: EMPTY_SET_RANGE.1,
    }
}
