//! Persistence collaborators for the board.
//!
//! The timeline never reads or writes storage mid-computation. A store hands
//! out the initial snapshot and receives the complete order list after every
//! create, update or delete.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::work_center::{default_work_centers, WorkCenter};
use crate::models::work_order::{default_work_orders, WorkOrder};

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Snapshot source and sink for work centers and work orders.
pub trait OrderStore {
    fn load_work_centers(&self) -> Result<Vec<WorkCenter>>;

    fn load_work_orders(&self) -> Result<Vec<WorkOrder>>;

    /// Replace the stored order list with `orders`.
    fn save_work_orders(&mut self, orders: &[WorkOrder]) -> Result<()>;
}

/// Everything a board persists, as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    #[serde(default)]
    pub work_centers: Vec<WorkCenter>,
    #[serde(default)]
    pub work_orders: Vec<WorkOrder>,
}

impl BoardDocument {
    /// The sample board used when nothing has been saved yet.
    pub fn seeded() -> Self {
        Self {
            work_centers: default_work_centers(),
            work_orders: default_work_orders(),
        }
    }
}
