//! Visible date window for each view mode.
//!
//! The window is calendar-aligned (Mondays, 1st of the month) and leans
//! forward: a little history, mostly upcoming work.

use chrono::{Days, NaiveDate};

use crate::models::view_mode::ViewMode;
use crate::utils::date::{first_of_month_offset, start_of_week};

/// Days shown before the anchor in Day mode.
pub const DAY_LOOKBACK: u64 = 5;
/// Weeks shown before the anchor's week in Week mode.
pub const WEEK_LOOKBACK: u64 = 2;
/// Months shown before the anchor's month in Month mode.
pub const MONTH_LOOKBACK: i32 = 2;

/// Column markers for `mode` around `anchor`, strictly increasing.
///
/// Always `mode.column_count()` long except at the very edge of the
/// representable calendar, where the sequence is cut short instead of
/// failing.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use work_order_board::models::view_mode::ViewMode;
/// use work_order_board::services::timeline::compute_columns;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let columns = compute_columns(ViewMode::Week, anchor);
/// assert_eq!(columns.len(), 12);
/// assert_eq!(columns[0], NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
/// ```
pub fn compute_columns(mode: ViewMode, anchor: NaiveDate) -> Vec<NaiveDate> {
    let count = mode.column_count();

    match mode {
        ViewMode::Day => {
            let start = anchor.checked_sub_days(Days::new(DAY_LOOKBACK));
            stepped(start, count, |start, i| start.checked_add_days(Days::new(i)))
        }
        ViewMode::Week => {
            let start = start_of_week(anchor)
                .and_then(|monday| monday.checked_sub_days(Days::new(WEEK_LOOKBACK * 7)));
            stepped(start, count, |start, i| start.checked_add_days(Days::new(i * 7)))
        }
        ViewMode::Month => {
            let start = first_of_month_offset(anchor, -MONTH_LOOKBACK);
            stepped(start, count, |start, i| {
                first_of_month_offset(start, i32::try_from(i).ok()?)
            })
        }
    }
}

fn stepped(
    start: Option<NaiveDate>,
    count: usize,
    step: impl Fn(NaiveDate, u64) -> Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let Some(start) = start else {
        log::warn!("Timeline window start is outside the supported calendar range");
        return Vec::new();
    };

    (0..count as u64).map_while(|i| step(start, i)).collect()
}
