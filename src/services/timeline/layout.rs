//! Projection of work orders onto the pixel timeline.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::view_mode::ViewMode;
use crate::models::work_order::WorkOrder;

/// Bars never shrink below this width, so zero-length orders stay clickable.
pub const MIN_BAR_WIDTH_PX: f64 = 5.0;

/// Horizontal placement of a bar, in pixels from the first column's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    /// May be negative when the order starts before the window
    pub left: f64,
    pub width: f64,
}

impl BarRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether any part of the bar falls inside `[0, total_width)`.
    pub fn intersects(&self, total_width: f64) -> bool {
        self.right() > 0.0 && self.left < total_width
    }
}

/// Place `order` on a timeline whose first column is `columns[0]`.
///
/// Returns `None` (draw nothing) when there are no columns or either date is
/// empty or unparseable. Reversed dates are not rejected; the width floor
/// keeps such bars visible.
pub fn project_to_pixels(
    order: &WorkOrder,
    columns: &[NaiveDate],
    mode: ViewMode,
) -> Option<BarRect> {
    let first = *columns.first()?;
    let Some((start, end)) = order.date_range() else {
        if !order.start_date.is_empty() && !order.end_date.is_empty() {
            log::warn!(
                "Work order '{}' has unreadable dates ({:?} - {:?}); skipping layout",
                order.id,
                order.start_date,
                order.end_date
            );
        }
        return None;
    };

    let pixels_per_day = mode.pixels_per_day();
    let offset_days = (start - first).num_days() as f64;
    let duration_days = (end - start).num_days() as f64;

    Some(BarRect {
        left: offset_days * pixels_per_day,
        width: (duration_days * pixels_per_day).max(MIN_BAR_WIDTH_PX),
    })
}
