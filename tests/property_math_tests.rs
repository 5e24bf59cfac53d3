use indexmap::IndexMap;
use proptest::prelude::*;
use slider_chart::core::{
    HoverState, MIN_COLUMN_LEN, SelectionWindow, SeriesKind, SeriesSlice, compute_boundaries,
    compute_x_ratio, compute_y_ratio, is_mouse_over, to_coords, widen_flat_bounds,
};

fn line_types() -> IndexMap<String, SeriesKind> {
    IndexMap::from([
        ("x".to_owned(), SeriesKind::XAxis),
        ("a".to_owned(), SeriesKind::Line),
        ("b".to_owned(), SeriesKind::Line),
    ])
}

proptest! {
    #[test]
    fn boundaries_enclose_every_line_value(
        a in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64),
        b in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64),
        x in prop::collection::vec(-1.0e12f64..1.0e12, 1..64)
    ) {
        let columns = [
            SeriesSlice::new("x", &x),
            SeriesSlice::new("a", &a),
            SeriesSlice::new("b", &b),
        ];
        let (min, max) = compute_boundaries(&columns, &line_types()).expect("bounds");

        for &value in a.iter().chain(b.iter()) {
            prop_assert!(min <= value && value <= max);
        }
        prop_assert!(a.iter().chain(b.iter()).any(|&value| value == min));
        prop_assert!(a.iter().chain(b.iter()).any(|&value| value == max));
    }

    #[test]
    fn projection_keeps_sample_count_and_value_order(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 2..128),
        width in 100.0f64..4_000.0,
        height in 100.0f64..2_000.0
    ) {
        let padding = 40.0;
        let slice = [SeriesSlice::new("a", &values)];
        let types = IndexMap::from([("a".to_owned(), SeriesKind::Line)]);
        let (min, max) = widen_flat_bounds(compute_boundaries(&slice, &types).expect("bounds"));

        let x_ratio = compute_x_ratio(width, values.len() + 1);
        let y_ratio = compute_y_ratio(height - padding * 2.0, max, min);
        let points = to_coords(x_ratio, y_ratio, height, padding, min)(&values);

        prop_assert_eq!(points.len(), values.len());
        for pair in points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
        for (point, &value) in points.iter().zip(&values) {
            prop_assert!(point.y <= height - padding);
            prop_assert!(point.y >= padding - 1.0);
            prop_assert!(point.x <= width);
            if value == min {
                prop_assert_eq!(point.y, (height - padding).floor());
            }
        }
        for (i, &vi) in values.iter().enumerate() {
            for (j, &vj) in values.iter().enumerate() {
                if vi <= vj {
                    prop_assert!(points[i].y >= points[j].y);
                }
            }
        }
    }

    #[test]
    fn selection_always_spans_minimum_slice(
        left in -20.0f64..120.0,
        right in -20.0f64..120.0,
        column_len in MIN_COLUMN_LEN..512usize
    ) {
        let range = SelectionWindow::new(left, right).to_index_range(column_len);

        prop_assert!(range.start >= 1);
        prop_assert!(range.end <= column_len);
        prop_assert!(range.column_len() >= MIN_COLUMN_LEN);
    }

    #[test]
    fn sample_pixel_is_always_hovered(
        x in 0.0f64..4_000.0,
        length in 1usize..1_000,
        width in 1.0f64..8_000.0
    ) {
        prop_assert!(is_mouse_over(HoverState::at(x), x, length, width));
        prop_assert!(!is_mouse_over(HoverState::absent(), x, length, width));
    }
}
