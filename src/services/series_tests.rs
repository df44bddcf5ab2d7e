#[cfg(test)]
mod tests {
    use crate::api::{AxisRange, ChartAxes};
    use crate::services::series::{
        chart_frame, cumulative_sum, filter_by_range, hour_label, resolve_range, EMPTY_SET_RANGE,
    };
    use crate::store::LocalStore;
    use proptest::prelude::*;

    #[test]
    fn test_cumulative_sum_empty() {
        assert_eq!(cumulative_sum(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_cumulative_sum_single() {
        assert_eq!(cumulative_sum(&[2.5]), vec![2.5]);
    }

    #[test]
    fn test_cumulative_sum_is_order_sensitive() {
        // Running totals are not commutative over the input order: reversing
        // the input does not reverse the output.
        assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
        assert_eq!(cumulative_sum(&[3.0, 2.0, 1.0]), vec![3.0, 5.0, 6.0]);
    }

    #[test]
    fn test_cumulative_sum_fractional_hours() {
        let out = cumulative_sum(&[0.5, 1.5, 0.0, 2.0]);
        assert_eq!(out, vec![0.5, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_filter_by_range_window() {
        let series = [10.0, 11.0, 12.0, 13.0, 14.0];
        let points = filter_by_range(&series, 1.0, 3.0);
        assert_eq!(points, vec![(1, 11.0), (2, 12.0), (3, 13.0)]);
    }

    #[test]
    fn test_filter_by_range_inverted_is_empty() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(filter_by_range(&series, 5.0, 3.0).is_empty());
    }

    #[test]
    fn test_filter_by_range_fractional_bounds() {
        let series = [0.0, 1.0, 2.0, 3.0];
        // 0.5 <= i <= 2.5 keeps indices 1 and 2
        assert_eq!(filter_by_range(&series, 0.5, 2.5), vec![(1, 1.0), (2, 2.0)]);
    }

    #[test]
    fn test_resolve_range_explicit_bounds_win() {
        let values = [2.0, 8.0];
        let range = AxisRange::new(Some(0.0), Some(20.0));
        assert_eq!(resolve_range(&values, range), (0.0, 20.0));
    }

    #[test]
    fn test_resolve_range_auto_scales() {
        let values = [3.0, 1.0, 7.0];
        assert_eq!(resolve_range(&values, AxisRange::AUTO), (1.0, 7.0));

        // Mixed: explicit min, auto max
        let range = AxisRange::new(Some(0.0), None);
        assert_eq!(resolve_range(&values, range), (0.0, 7.0));
    }

    #[test]
    fn test_resolve_range_empty_set_default() {
        assert_eq!(resolve_range(&[], AxisRange::AUTO), EMPTY_SET_RANGE);
        // Explicit bound still wins over the default
        let range = AxisRange::new(Some(5.0), None);
        assert_eq!(resolve_range(&[], range), (5.0, 1.0));
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), "0:00");
        assert_eq!(hour_label(23), "23:00");
    }

    #[test]
    fn test_chart_frame_full_day() {
        let store = LocalStore::with_sample_data().unwrap();
        let record = store.schedule_by_id(2).unwrap();
        let frame = chart_frame(record, &ChartAxes::default());

        assert_eq!(frame.categories.len(), 24);
        assert_eq!(frame.planned.len(), 24);
        assert_eq!(frame.actual.len(), 24);
        assert!(frame.caption.contains("API Development"));

        // Cumulative series over non-negative deltas is non-decreasing.
        assert!(frame.planned.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frame.y_min, 0.0, "auto min of a series starting at 0");
    }

    #[test]
    fn test_chart_frame_window_keeps_accumulation() {
        let store = LocalStore::with_sample_data().unwrap();
        let record = store.schedule_by_id(1).unwrap();
        let axes = ChartAxes {
            x: AxisRange::new(Some(12.0), Some(17.0)),
            y: AxisRange::AUTO,
        };
        let frame = chart_frame(record, &axes);

        assert_eq!(frame.categories.first().map(String::as_str), Some("12:00"));
        assert_eq!(frame.categories.last().map(String::as_str), Some("17:00"));
        // Totals keep the accumulation from hours before the window: hours
        // 9..=12 of record 1 plan 1+2+2+1 = 6.
        assert_eq!(frame.planned[0], 6.0);
    }

    #[test]
    fn test_chart_frame_auto_y_covers_both_series() {
        let store = LocalStore::with_sample_data().unwrap();
        // Record 4: actual overshoots planned (13.5 vs 13 total).
        let record = store.schedule_by_id(4).unwrap();
        let frame = chart_frame(record, &ChartAxes::default());

        let planned_max: f64 = *frame
            .planned
            .last()
            .expect("full-day frame has points");
        let actual_max: f64 = *frame.actual.last().expect("full-day frame has points");
        assert_eq!(frame.y_max, planned_max.max(actual_max));
    }

    #[test]
    fn test_chart_frame_inverted_x_range_is_empty_not_error() {
        let store = LocalStore::with_sample_data().unwrap();
        let record = store.schedule_by_id(1).unwrap();
        let axes = ChartAxes {
            x: AxisRange::new(Some(5.0), Some(3.0)),
            y: AxisRange::AUTO,
        };
        let frame = chart_frame(record, &axes);

        assert!(frame.categories.is_empty());
        assert_eq!((frame.y_min, frame.y_max), EMPTY_SET_RANGE);
    }

    proptest! {
        #[test]
        fn prop_last_element_equals_total(values in prop::collection::vec(0.0f64..100.0, 1..48)) {
            let out = cumulative_sum(&values);
            // Iterator::sum also folds left to right, so equality is exact.
            let total: f64 = values.iter().sum();
            prop_assert_eq!(*out.last().unwrap(), total);
        }

        #[test]
        fn prop_length_preserved(values in prop::collection::vec(-100.0f64..100.0, 0..48)) {
            prop_assert_eq!(cumulative_sum(&values).len(), values.len());
        }

        #[test]
        fn prop_non_negative_input_is_monotone(values in prop::collection::vec(0.0f64..24.0, 1..48)) {
            let out = cumulative_sum(&values);
            prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_inverted_range_always_empty(
            values in prop::collection::vec(-10.0f64..10.0, 1..48),
            min in 1.0f64..100.0,
        ) {
            // Any min strictly above max yields nothing.
            prop_assert!(filter_by_range(&values, min, min - 1.0).is_empty());
        }
    }
}
