//! Rendering adapter seam.
//!
//! The original dashboard draws the same cumulative series through half a
//! dozen charting libraries; the per-library code differs, the input never
//! does. [`ChartAdapter`] is that boundary: one implementation per rendering
//! backend, and the series core never depends on adapter internals.

use std::fmt::Write;

use crate::api::ChartFrame;

/// Errors an adapter can raise while drawing a frame.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("adapter '{adapter}' cannot draw frame: {reason}")]
    Unrenderable { adapter: String, reason: String },
}

/// A rendering backend for [`ChartFrame`]s.
pub trait ChartAdapter {
    /// Backend name, for diagnostics.
    fn name(&self) -> &str;

    /// Draw the frame. An empty frame is a valid input and must render as an
    /// empty chart, not an error.
    fn render(&mut self, frame: &ChartFrame) -> Result<(), AdapterError>;
}

/// Plain-text adapter used by tests and demos: one line per plotted hour.
#[derive(Debug, Default)]
pub struct TextChart {
    output: String,
}

impl TextChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame as text.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl ChartAdapter for TextChart {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&mut self, frame: &ChartFrame) -> Result<(), AdapterError> {
        let mut out = String::new();
        if !frame.caption.is_empty() {
            let _ = writeln!(out, "{}", frame.caption);
        }
        let _ = writeln!(out, "y: [{}, {}]", frame.y_min, frame.y_max);
        if frame.categories.is_empty() {
            let _ = writeln!(out, "(no points in range)");
        }
        for (i, label) in frame.categories.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>5}  planned={:<6} actual={}",
                label, frame.planned[i], frame.actual[i]
            );
        }
        self.output = out;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AxisRange, ChartAxes};
    use crate::services::series::{chart_frame, empty_frame};
    use crate::store::LocalStore;

    #[test]
    fn test_text_chart_renders_points() {
        let store = LocalStore::with_sample_data().unwrap();
        let record = store.schedule_by_id(1).unwrap();
        let axes = ChartAxes {
            x: AxisRange::new(Some(9.0), Some(11.0)),
            y: AxisRange::AUTO,
        };

        let mut chart = TextChart::new();
        chart.render(&chart_frame(record, &axes)).unwrap();

        let output = chart.output();
        assert!(output.contains("Website Redesign"));
        assert!(output.contains("9:00"));
        assert!(output.contains("11:00"));
        assert!(!output.contains("12:00"));
    }

    #[test]
    fn test_text_chart_renders_empty_frame() {
        let mut chart = TextChart::new();
        chart.render(&empty_frame()).unwrap();
        assert!(chart.output().contains("no points in range"));
    }
}
