// Property-based tests for the timeline window, layout and conflict rules
// Exercises the pure functions with random anchors and orders

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use work_order_board::models::view_mode::ViewMode;
use work_order_board::models::work_order::WorkOrder;
use work_order_board::services::timeline::{
    check_overlap, compute_columns, detect_conflicts, project_to_pixels, MIN_BAR_WIDTH_PX,
};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=31u32).prop_filter_map("valid date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

fn any_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![Just(ViewMode::Day), Just(ViewMode::Week), Just(ViewMode::Month)]
}

fn order(id: &str, wc: &str, start: NaiveDate, end: NaiveDate) -> WorkOrder {
    WorkOrder::new(id, wc, id, start.to_string(), end.to_string())
}

proptest! {
    /// Property: every mode yields a fixed-length, strictly increasing window
    #[test]
    fn prop_columns_fixed_length_and_increasing(anchor in any_date(), mode in any_mode()) {
        let columns = compute_columns(mode, anchor);
        prop_assert_eq!(columns.len(), mode.column_count());
        prop_assert!(columns.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: Day mode starts five days before the anchor
    #[test]
    fn prop_day_window_start(anchor in any_date()) {
        let columns = compute_columns(ViewMode::Day, anchor);
        prop_assert_eq!(columns[0], anchor - Duration::days(5));
        prop_assert_eq!(columns[19], anchor + Duration::days(14));
    }

    /// Property: Week mode starts on a Monday two weeks before the anchor's week
    #[test]
    fn prop_week_window_start(anchor in any_date()) {
        let columns = compute_columns(ViewMode::Week, anchor);
        let first = columns[0];
        prop_assert_eq!(first.weekday(), Weekday::Mon);

        let anchor_monday = first + Duration::days(14);
        let back = (anchor - anchor_monday).num_days();
        prop_assert!((0..7).contains(&back));
    }

    /// Property: Month mode is all month-starts, beginning two months back
    #[test]
    fn prop_month_window(anchor in any_date()) {
        let columns = compute_columns(ViewMode::Month, anchor);
        prop_assert!(columns.iter().all(|d| d.day() == 1));

        let index = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
        prop_assert_eq!(index(columns[0]), index(anchor) - 2);
        for pair in columns.windows(2) {
            prop_assert_eq!(index(pair[1]) - index(pair[0]), 1);
        }
    }

    /// Property: width never drops below the minimum, whatever the dates
    #[test]
    fn prop_width_floor(start in any_date(), end in any_date(), mode in any_mode()) {
        let columns = compute_columns(mode, start);
        let rect = project_to_pixels(&order("x", "wc1", start, end), &columns, mode).unwrap();
        prop_assert!(rect.width >= MIN_BAR_WIDTH_PX);
    }

    /// Property: attaching a time of day never moves a bar
    #[test]
    fn prop_layout_ignores_time_of_day(
        start in any_date(),
        length in 0..60i64,
        hour in 0..24u32,
        minute in 0..60u32,
        mode in any_mode(),
    ) {
        let end = start + Duration::days(length);
        let columns = compute_columns(mode, start);

        let plain = order("x", "wc1", start, end);
        let mut timed = plain.clone();
        timed.start_date = format!("{start}T{hour:02}:{minute:02}:00");
        timed.end_date = format!("{end}T{hour:02}:{minute:02}:00");

        prop_assert_eq!(
            project_to_pixels(&plain, &columns, mode),
            project_to_pixels(&timed, &columns, mode)
        );
    }

    /// Property: detection is symmetric and resource-scoped
    #[test]
    fn prop_conflicts_match_pairwise_rule(
        a_start in any_date(),
        a_len in 0..20i64,
        offset in -25..25i64,
        b_len in 0..20i64,
        same_center in any::<bool>(),
    ) {
        let a_end = a_start + Duration::days(a_len);
        let b_start = a_start + Duration::days(offset);
        let b_end = b_start + Duration::days(b_len);
        let b_center = if same_center { "wc1" } else { "wc2" };

        let a = order("A", "wc1", a_start, a_end);
        let b = order("B", b_center, b_start, b_end);

        let expected = same_center && a_start <= b_end && a_end >= b_start;
        let forward = detect_conflicts(&[a.clone(), b.clone()]);
        let backward = detect_conflicts(&[b.clone(), a.clone()]);

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.len(), if expected { 2 } else { 0 });
        prop_assert_eq!(check_overlap(&a, &[b.clone()]), expected);
        prop_assert_eq!(check_overlap(&b, &[a]), expected);
    }

    /// Property: an order never overlaps its own stored copy
    #[test]
    fn prop_no_self_overlap(start in any_date(), len in 0..30i64) {
        let stored = order("wo1", "wc1", start, start + Duration::days(len));
        let edited = order("wo1", "wc1", start, start + Duration::days(len + 1));
        prop_assert!(!check_overlap(&edited, &[stored.clone()]));
        prop_assert!(detect_conflicts(&[stored, edited]).is_empty());
    }
}
