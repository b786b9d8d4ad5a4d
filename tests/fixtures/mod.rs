// Test fixtures - reusable test data
// Provides consistent boards and dates across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use work_order_board::models::work_center::WorkCenter;
use work_order_board::models::work_order::{WorkOrder, WorkOrderStatus};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 10, 2024
    pub fn wednesday_jan_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    /// Sunday, Jan 14, 2024
    pub fn sunday_jan_14_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample boards for testing
pub mod boards {
    use super::*;

    /// Three work centers across two factories
    pub fn work_centers() -> Vec<WorkCenter> {
        vec![
            WorkCenter::new("wc1", "Assembly A").with_group("Factory 1"),
            WorkCenter::new("wc2", "Assembly B").with_group("Factory 1"),
            WorkCenter::new("wc3", "Packaging").with_group("Factory 2"),
        ]
    }

    /// A on wc1 overlaps B on wc1; C mirrors A on wc2
    pub fn overlapping_orders() -> Vec<WorkOrder> {
        vec![
            WorkOrder::new("A", "wc1", "Order A", "2026-02-10", "2026-02-14"),
            WorkOrder::new("B", "wc1", "Order B", "2026-02-12", "2026-02-16")
                .with_status(WorkOrderStatus::InProgress),
            WorkOrder::new("C", "wc2", "Order C", "2026-02-10", "2026-02-14"),
        ]
    }

    /// One order per work center, no overlaps
    pub fn clean_orders() -> Vec<WorkOrder> {
        vec![
            WorkOrder::new("wo1", "wc1", "Order 1", "2024-01-01", "2024-01-05"),
            WorkOrder::new("wo2", "wc2", "Order 2", "2024-01-08", "2024-01-09"),
            WorkOrder::new("wo3", "wc3", "Order 3", "2024-01-15", "2024-01-20"),
        ]
    }
}
