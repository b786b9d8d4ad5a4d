//! Work order model.
//!
//! A work order is a named job booked on exactly one work center for a span of
//! calendar days. Dates are kept as text, the way they arrive from forms and
//! storage, and are parsed on demand; time-of-day is never significant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::date::parse_calendar_date;

mod draft;

pub use draft::{WorkOrderDraft, WorkOrderValidationError};

/// Lifecycle state of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    Complete,
    Blocked,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Complete,
        WorkOrderStatus::Blocked,
    ];

    /// Wire/storage value (`open`, `in-progress`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::InProgress => "in-progress",
            WorkOrderStatus::Complete => "complete",
            WorkOrderStatus::Blocked => "blocked",
        }
    }

    /// Human-readable label for badges.
    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "Open",
            WorkOrderStatus::InProgress => "In progress",
            WorkOrderStatus::Complete => "Complete",
            WorkOrderStatus::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown work order status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for WorkOrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A scheduled job on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkOrderDocument", into = "WorkOrderDocument")]
pub struct WorkOrder {
    /// Identifier; empty until the order has been saved
    pub id: String,
    /// Owning work center
    pub work_center_id: String,
    pub name: String,
    pub status: WorkOrderStatus,
    /// Start date, `YYYY-MM-DD` or a full timestamp
    pub start_date: String,
    /// End date (inclusive), same formats as `start_date`
    pub end_date: String,
}

impl WorkOrder {
    /// Create an open work order.
    ///
    /// # Examples
    /// ```
    /// use work_order_board::models::work_order::{WorkOrder, WorkOrderStatus};
    ///
    /// let order = WorkOrder::new("wo1", "wc1", "Order #101", "2025-02-10", "2025-02-12");
    /// assert_eq!(order.status, WorkOrderStatus::Open);
    /// assert_eq!(order.duration_days(), Some(2));
    /// ```
    pub fn new(
        id: impl Into<String>,
        work_center_id: impl Into<String>,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            work_center_id: work_center_id.into(),
            name: name.into(),
            status: WorkOrderStatus::Open,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the order has been assigned an identifier yet.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Parsed start date, `None` if empty or malformed.
    pub fn start(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.start_date)
    }

    /// Parsed end date, `None` if empty or malformed.
    pub fn end(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.end_date)
    }

    /// Both dates, or `None` if either cannot be parsed.
    /// The pair is returned as stored; start after end is not corrected.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start()?, self.end()?))
    }

    /// Whole days from start to end. Negative when the dates are reversed.
    pub fn duration_days(&self) -> Option<i64> {
        self.date_range().map(|(start, end)| (end - start).num_days())
    }
}

/// Stored document shape: `{ docId, docType, data: { ... } }`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkOrderDocument {
    doc_id: String,
    #[serde(default = "work_order_doc_type")]
    doc_type: String,
    data: WorkOrderData,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkOrderData {
    name: String,
    work_center_id: String,
    #[serde(default)]
    status: WorkOrderStatus,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
}

fn work_order_doc_type() -> String {
    "workOrder".to_string()
}

impl From<WorkOrderDocument> for WorkOrder {
    fn from(doc: WorkOrderDocument) -> Self {
        Self {
            id: doc.doc_id,
            work_center_id: doc.data.work_center_id,
            name: doc.data.name,
            status: doc.data.status,
            start_date: doc.data.start_date,
            end_date: doc.data.end_date,
        }
    }
}

impl From<WorkOrder> for WorkOrderDocument {
    fn from(order: WorkOrder) -> Self {
        Self {
            doc_id: order.id,
            doc_type: work_order_doc_type(),
            data: WorkOrderData {
                name: order.name,
                work_center_id: order.work_center_id,
                status: order.status,
                start_date: order.start_date,
                end_date: order.end_date,
            },
        }
    }
}

/// Sample orders that ship with a fresh board, spread over the default work centers.
pub fn default_work_orders() -> Vec<WorkOrder> {
    use WorkOrderStatus::*;

    vec![
        WorkOrder::new("wo1", "wc1", "Order #101", "2025-02-10", "2025-02-12").with_status(Complete),
        WorkOrder::new("wo2", "wc1", "Order #102", "2025-02-13", "2025-02-16").with_status(InProgress),
        WorkOrder::new("wo3", "wc2", "Order #205", "2025-02-11", "2025-02-15").with_status(Blocked),
        WorkOrder::new("wo4", "wc3", "Order #300", "2025-02-10", "2025-02-18").with_status(Open),
        WorkOrder::new("wo5", "wc4", "Order #401", "2025-02-09", "2025-02-11").with_status(Complete),
        WorkOrder::new("wo6", "wc4", "Order #402", "2025-02-12", "2025-02-14").with_status(InProgress),
        WorkOrder::new("wo7", "wc5", "Order #500", "2025-02-14", "2025-02-20").with_status(Open),
        WorkOrder::new("wo8", "wc5", "Order #501", "2025-02-08", "2025-02-10").with_status(Open),
    ]
}
