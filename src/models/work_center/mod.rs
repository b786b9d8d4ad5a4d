//! Work center model.
//!
//! Work centers are the rows of the board. They carry no dates of their own;
//! orders reference them by id and only orders on the same work center can
//! conflict with each other.

use serde::{Deserialize, Serialize};

/// A schedulable resource (machine, line, station).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WorkCenterDocument", into = "WorkCenterDocument")]
pub struct WorkCenter {
    /// Unique identifier referenced by work orders
    pub id: String,
    /// Display name shown in the row header
    pub name: String,
    /// Optional grouping label used to sort rows (e.g. "Factory 1")
    pub group: Option<String>,
}

impl WorkCenter {
    /// Create a work center without a group.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
        }
    }

    /// Attach a group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Validate the work center data.
    pub fn validate(&self) -> Result<(), WorkCenterValidationError> {
        if self.id.trim().is_empty() {
            return Err(WorkCenterValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(WorkCenterValidationError::EmptyName);
        }
        Ok(())
    }

    /// Case-insensitive substring match against the name.
    /// An empty (or all-whitespace) term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Validation errors for WorkCenter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkCenterValidationError {
    #[error("Work center id cannot be empty")]
    EmptyId,
    #[error("Work center name cannot be empty")]
    EmptyName,
}

/// Stored document shape: `{ docId, docType, data: { name, group } }`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkCenterDocument {
    doc_id: String,
    #[serde(default = "work_center_doc_type")]
    doc_type: String,
    data: WorkCenterData,
}

#[derive(Serialize, Deserialize)]
struct WorkCenterData {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
}

fn work_center_doc_type() -> String {
    "workCenter".to_string()
}

impl From<WorkCenterDocument> for WorkCenter {
    fn from(doc: WorkCenterDocument) -> Self {
        Self {
            id: doc.doc_id,
            name: doc.data.name,
            group: doc.data.group,
        }
    }
}

impl From<WorkCenter> for WorkCenterDocument {
    fn from(center: WorkCenter) -> Self {
        Self {
            doc_id: center.id,
            doc_type: work_center_doc_type(),
            data: WorkCenterData {
                name: center.name,
                group: center.group,
            },
        }
    }
}

/// Work centers that ship with a fresh board.
pub fn default_work_centers() -> Vec<WorkCenter> {
    vec![
        WorkCenter::new("wc1", "Extrusion Line A").with_group("Fabrication"),
        WorkCenter::new("wc2", "CNC Machine 1").with_group("Fabrication"),
        WorkCenter::new("wc3", "Assembly Station").with_group("Assembly"),
        WorkCenter::new("wc4", "Quality Control").with_group("Finishing"),
        WorkCenter::new("wc5", "Packaging Line").with_group("Finishing"),
    ]
}
