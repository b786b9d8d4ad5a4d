// Unit tests for ViewMode scaling and the fixed window examples
// Parameterized over the three modes

use chrono::NaiveDate;
use test_case::test_case;

use work_order_board::models::view_mode::{ViewMode, COLUMN_WIDTH_PX};
use work_order_board::services::timeline::compute_columns;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(ViewMode::Day, 20; "day shows twenty columns")]
#[test_case(ViewMode::Week, 12; "week shows twelve columns")]
#[test_case(ViewMode::Month, 12; "month shows twelve columns")]
fn test_column_count(mode: ViewMode, expected: usize) {
    assert_eq!(mode.column_count(), expected);
    assert_eq!(compute_columns(mode, ymd(2024, 1, 10)).len(), expected);
}

#[test_case(ViewMode::Day, 1.0; "day column is one day")]
#[test_case(ViewMode::Week, 7.0; "week column is seven days")]
#[test_case(ViewMode::Month, 30.44; "month column is an average month")]
fn test_one_column_spans_its_days(mode: ViewMode, days: f64) {
    let width = days * mode.pixels_per_day();
    assert!((width - COLUMN_WIDTH_PX).abs() < 1e-9);
}

#[test_case(ViewMode::Day, ymd(2024, 1, 5); "day starts five days back")]
#[test_case(ViewMode::Week, ymd(2023, 12, 25); "week starts two mondays back")]
#[test_case(ViewMode::Month, ymd(2023, 11, 1); "month starts two months back")]
fn test_first_column_for_jan_10_2024(mode: ViewMode, expected: NaiveDate) {
    assert_eq!(compute_columns(mode, ymd(2024, 1, 10))[0], expected);
}

#[test_case("Day", ViewMode::Day)]
#[test_case("week", ViewMode::Week)]
#[test_case("MONTH", ViewMode::Month)]
fn test_parse_mode(input: &str, expected: ViewMode) {
    assert_eq!(input.parse::<ViewMode>().unwrap(), expected);
}
