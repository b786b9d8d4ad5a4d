//! One-shot recomputation of everything the board draws.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::{compute_columns, detect_conflicts, project_to_pixels, BarRect, TimelineService};
use crate::models::view_mode::{ViewMode, COLUMN_WIDTH_PX};
use crate::models::work_center::WorkCenter;
use crate::models::work_order::WorkOrder;
use crate::services::storage::OrderStore;

/// An order with its bar placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order: WorkOrder,
    pub rect: BarRect,
    pub in_conflict: bool,
}

/// One work center row and the bars on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    pub work_center: WorkCenter,
    pub bars: Vec<PlacedOrder>,
}

/// Derived board state for one view mode, anchor and order list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub view_mode: ViewMode,
    pub columns: Vec<NaiveDate>,
    pub rows: Vec<BoardRow>,
    pub conflicts: HashSet<String>,
}

impl BoardSnapshot {
    /// Full width of the column area in pixels.
    pub fn total_width(&self) -> f64 {
        self.columns.len() as f64 * COLUMN_WIDTH_PX
    }

    /// Conflicting ids in a stable order, for display.
    pub fn sorted_conflicts(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.conflicts.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Build a snapshot from explicit inputs. Rows follow `work_centers` order;
/// bars within a row follow `orders` order. Orders without a layout are left out.
pub fn build_snapshot(
    mode: ViewMode,
    anchor: NaiveDate,
    work_centers: &[&WorkCenter],
    orders: &[WorkOrder],
) -> BoardSnapshot {
    let columns = compute_columns(mode, anchor);
    let conflicts = detect_conflicts(orders);

    let rows = work_centers
        .iter()
        .map(|wc| BoardRow {
            work_center: (*wc).clone(),
            bars: orders
                .iter()
                .filter(|o| o.work_center_id == wc.id)
                .filter_map(|o| {
                    project_to_pixels(o, &columns, mode).map(|rect| PlacedOrder {
                        order: o.clone(),
                        rect,
                        in_conflict: conflicts.contains(&o.id),
                    })
                })
                .collect(),
        })
        .collect();

    log::debug!(
        "Built {} snapshot at {}: {} columns, {} conflicts",
        mode,
        anchor,
        columns.len(),
        conflicts.len()
    );

    BoardSnapshot {
        view_mode: mode,
        columns,
        rows,
        conflicts,
    }
}

impl<S: OrderStore> TimelineService<S> {
    /// Recompute columns, bars and conflicts for the current state.
    /// Rows are the filtered, group-sorted work centers.
    pub fn snapshot(&self) -> BoardSnapshot {
        build_snapshot(
            self.view_mode(),
            self.current_date(),
            &self.filtered_work_centers(),
            &self.work_orders,
        )
    }
}
