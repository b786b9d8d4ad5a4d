use super::{WorkOrder, WorkOrderStatus};
use crate::utils::date::parse_calendar_date;

/// Editable copy of a work order, owned by the edit form.
///
/// A draft never aliases the order it was made from: edits only reach the
/// board once `into_order` succeeds and the result is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderDraft {
    pub id: String,
    pub work_center_id: String,
    pub name: String,
    pub status: WorkOrderStatus,
    pub start_date: String,
    pub end_date: String,
}

/// Form-level validation failures, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkOrderValidationError {
    #[error("Order Name is required.")]
    MissingName,
    #[error("Work Center is required.")]
    MissingWorkCenter,
    #[error("Start Date is required.")]
    MissingStartDate,
    #[error("End Date is required.")]
    MissingEndDate,
    #[error("Start Date is not a valid date.")]
    InvalidStartDate,
    #[error("End Date is not a valid date.")]
    InvalidEndDate,
    #[error("End Date cannot be before Start Date.")]
    EndBeforeStart,
}

impl WorkOrderDraft {
    /// Draft for a brand-new order on the given work center.
    pub fn new_for(work_center_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            work_center_id: work_center_id.into(),
            name: String::new(),
            status: WorkOrderStatus::Open,
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    /// Deep copy of an existing order.
    pub fn from_order(order: &WorkOrder) -> Self {
        Self {
            id: order.id.clone(),
            work_center_id: order.work_center_id.clone(),
            name: order.name.clone(),
            status: order.status,
            start_date: order.start_date.clone(),
            end_date: order.end_date.clone(),
        }
    }

    /// Editing an existing order rather than creating one.
    pub fn is_edit_mode(&self) -> bool {
        !self.id.is_empty()
    }

    /// Check required fields and date ordering. Stops at the first problem.
    pub fn validate(&self) -> Result<(), WorkOrderValidationError> {
        if self.name.trim().is_empty() {
            return Err(WorkOrderValidationError::MissingName);
        }
        if self.work_center_id.trim().is_empty() {
            return Err(WorkOrderValidationError::MissingWorkCenter);
        }
        if self.start_date.trim().is_empty() {
            return Err(WorkOrderValidationError::MissingStartDate);
        }
        if self.end_date.trim().is_empty() {
            return Err(WorkOrderValidationError::MissingEndDate);
        }

        let start = parse_calendar_date(&self.start_date)
            .ok_or(WorkOrderValidationError::InvalidStartDate)?;
        let end =
            parse_calendar_date(&self.end_date).ok_or(WorkOrderValidationError::InvalidEndDate)?;

        if end < start {
            return Err(WorkOrderValidationError::EndBeforeStart);
        }

        Ok(())
    }

    /// Validate and convert into an order ready to save.
    pub fn into_order(self) -> Result<WorkOrder, WorkOrderValidationError> {
        self.validate()?;
        Ok(WorkOrder {
            id: self.id,
            work_center_id: self.work_center_id,
            name: self.name.trim().to_string(),
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}
