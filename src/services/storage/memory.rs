use anyhow::Result;

use super::{BoardDocument, OrderStore};
use crate::models::work_center::WorkCenter;
use crate::models::work_order::WorkOrder;

/// Keeps the board in memory. Used by tests and as a scratch board.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: BoardDocument,
    saves: usize,
}

impl MemoryStore {
    pub fn new(work_centers: Vec<WorkCenter>, work_orders: Vec<WorkOrder>) -> Self {
        Self {
            document: BoardDocument {
                work_centers,
                work_orders,
            },
            saves: 0,
        }
    }

    /// Store pre-filled with the sample board.
    pub fn seeded() -> Self {
        Self {
            document: BoardDocument::seeded(),
            saves: 0,
        }
    }

    /// Orders as of the last save (or the initial list).
    pub fn saved_orders(&self) -> &[WorkOrder] {
        &self.document.work_orders
    }

    /// Number of `save_work_orders` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl OrderStore for MemoryStore {
    fn load_work_centers(&self) -> Result<Vec<WorkCenter>> {
        Ok(self.document.work_centers.clone())
    }

    fn load_work_orders(&self) -> Result<Vec<WorkOrder>> {
        Ok(self.document.work_orders.clone())
    }

    fn save_work_orders(&mut self, orders: &[WorkOrder]) -> Result<()> {
        self.document.work_orders = orders.to_vec();
        self.saves += 1;
        Ok(())
    }
}
