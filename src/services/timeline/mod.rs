//! Timeline service entry point.
//! Pure window/layout/conflict functions live in focused submodules;
//! `TimelineService` holds the current board snapshot and view state and
//! recomputes derived values on request.

use anyhow::{Context, Result};
use chrono::{Days, Months, NaiveDate};
use std::collections::HashSet;

use crate::models::view_mode::ViewMode;
use crate::models::work_center::WorkCenter;
use crate::models::work_order::WorkOrder;
use crate::services::ids::{IdGenerator, UuidIdGenerator};
use crate::services::storage::OrderStore;
use crate::utils::date::today;

pub mod columns;
pub mod conflicts;
pub mod layout;
mod orders;
pub mod snapshot;

pub use columns::compute_columns;
pub use conflicts::{check_overlap, detect_conflicts, find_overlaps, overlap_warning};
pub use layout::{project_to_pixels, BarRect, MIN_BAR_WIDTH_PX};
pub use snapshot::{BoardRow, BoardSnapshot, PlacedOrder};

/// Board state: the loaded snapshot plus what the user is looking at.
pub struct TimelineService<S: OrderStore> {
    pub(crate) store: S,
    pub(crate) ids: Box<dyn IdGenerator>,
    pub(crate) work_centers: Vec<WorkCenter>,
    pub(crate) work_orders: Vec<WorkOrder>,
    view_mode: ViewMode,
    current_date: NaiveDate,
    search_term: String,
}

impl<S: OrderStore> TimelineService<S> {
    /// Load work centers and orders from `store`. Starts in Day mode on today.
    pub fn new(store: S) -> Result<Self> {
        let work_centers: Vec<WorkCenter> = store
            .load_work_centers()
            .context("Failed to load work centers")?
            .into_iter()
            .filter(|wc| match wc.validate() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Skipping work center '{}': {}", wc.id, e);
                    false
                }
            })
            .collect();
        let work_orders = store
            .load_work_orders()
            .context("Failed to load work orders")?;

        log::info!(
            "Timeline loaded {} work centers and {} work orders",
            work_centers.len(),
            work_orders.len()
        );

        Ok(Self {
            store,
            ids: Box::new(UuidIdGenerator),
            work_centers,
            work_orders,
            view_mode: ViewMode::default(),
            current_date: today(),
            search_term: String::new(),
        })
    }

    /// Replace the identifier source for new orders.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn work_centers(&self) -> &[WorkCenter] {
        &self.work_centers
    }

    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        log::debug!("View mode {} -> {}", self.view_mode, mode);
        self.view_mode = mode;
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn go_to_today(&mut self) {
        self.current_date = today();
    }

    /// Move the anchor by whole columns of the current mode (negative = back).
    /// Leaves the anchor alone if the move would leave the calendar.
    pub fn navigate(&mut self, steps: i32) {
        let magnitude = steps.unsigned_abs();
        let moved = match (self.view_mode, steps >= 0) {
            (ViewMode::Day, true) => self.current_date.checked_add_days(Days::new(magnitude as u64)),
            (ViewMode::Day, false) => self.current_date.checked_sub_days(Days::new(magnitude as u64)),
            (ViewMode::Week, true) => self
                .current_date
                .checked_add_days(Days::new(magnitude as u64 * 7)),
            (ViewMode::Week, false) => self
                .current_date
                .checked_sub_days(Days::new(magnitude as u64 * 7)),
            (ViewMode::Month, true) => self.current_date.checked_add_months(Months::new(magnitude)),
            (ViewMode::Month, false) => self.current_date.checked_sub_months(Months::new(magnitude)),
        };

        match moved {
            Some(date) => self.current_date = date,
            None => log::warn!(
                "Cannot move {} {} column(s) from {}",
                steps,
                self.view_mode,
                self.current_date
            ),
        }
    }

    /// Column markers for the current mode and anchor.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        compute_columns(self.view_mode, self.current_date)
    }

    /// Ids of all orders that double-book a work center.
    pub fn conflicting_order_ids(&self) -> HashSet<String> {
        detect_conflicts(&self.work_orders)
    }

    /// Work centers matching the search term, ordered by group.
    ///
    /// Centers without a group come last; ties keep their loaded order.
    pub fn filtered_work_centers(&self) -> Vec<&WorkCenter> {
        let mut centers: Vec<&WorkCenter> = self
            .work_centers
            .iter()
            .filter(|wc| wc.matches_search(&self.search_term))
            .collect();

        centers.sort_by(|a, b| match (&a.group, &b.group) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        centers
    }

    /// Orders on one work center, earliest start first (unreadable dates last).
    pub fn orders_for(&self, work_center_id: &str) -> Vec<&WorkOrder> {
        let mut orders: Vec<&WorkOrder> = self
            .work_orders
            .iter()
            .filter(|o| o.work_center_id == work_center_id)
            .collect();
        orders.sort_by_key(|o| (o.start().is_none(), o.start()));
        orders
    }

    /// Bar placement for `order` in the current window.
    pub fn order_bar(&self, order: &WorkOrder) -> Option<BarRect> {
        project_to_pixels(order, &self.visible_dates(), self.view_mode)
    }

    /// Whether `candidate` would double-book against the current orders.
    pub fn check_overlap(&self, candidate: &WorkOrder) -> bool {
        check_overlap(candidate, &self.work_orders)
    }

    /// Overlap warning for the edit form, if any.
    pub fn overlap_warning(&self, candidate: &WorkOrder) -> Option<String> {
        overlap_warning(candidate, &self.work_orders)
    }
}
