use anyhow::{Context, Result};

use super::TimelineService;
use crate::models::work_order::WorkOrder;
use crate::services::storage::OrderStore;

impl<S: OrderStore> TimelineService<S> {
    /// Append an order and persist the full list.
    pub fn add_order(&mut self, order: WorkOrder) -> Result<()> {
        log::debug!("Adding work order '{}' on '{}'", order.id, order.work_center_id);
        self.work_orders.push(order);
        self.persist()
    }

    /// Replace the order with the same id and persist.
    /// Returns `false` (and saves nothing) when no such order exists.
    pub fn update_order(&mut self, order: WorkOrder) -> Result<bool> {
        let Some(slot) = self.work_orders.iter_mut().find(|o| o.id == order.id) else {
            log::warn!("Cannot update unknown work order '{}'", order.id);
            return Ok(false);
        };

        *slot = order;
        self.persist()?;
        Ok(true)
    }

    /// Remove the order with `id` and persist.
    /// Returns `false` (and saves nothing) when no such order exists.
    pub fn delete_order(&mut self, id: &str) -> Result<bool> {
        let before = self.work_orders.len();
        self.work_orders.retain(|o| o.id != id);

        if self.work_orders.len() == before {
            log::warn!("Cannot delete unknown work order '{}'", id);
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Create or update depending on whether the order has an id yet.
    /// New orders get a generated id. Returns the order as stored.
    pub fn save_order(&mut self, mut order: WorkOrder) -> Result<WorkOrder> {
        if order.is_persisted() {
            if !self.update_order(order.clone())? {
                // An id the board has never seen is treated as a new order.
                self.add_order(order.clone())?;
            }
        } else {
            order.id = self.ids.next_id();
            self.add_order(order.clone())?;
        }
        Ok(order)
    }

    fn persist(&mut self) -> Result<()> {
        self.store
            .save_work_orders(&self.work_orders)
            .context("Failed to save work orders")
    }
}

#[cfg(test)]
mod tests {
    use crate::models::work_order::{WorkOrder, WorkOrderDraft, WorkOrderStatus};
    use crate::services::ids::SequentialIdGenerator;
    use crate::services::storage::{MemoryStore, OrderStore};
    use crate::services::timeline::TimelineService;
    use anyhow::{anyhow, Result};
    use pretty_assertions::assert_eq;

    fn setup_service() -> TimelineService<MemoryStore> {
        let orders = vec![WorkOrder::new("wo1", "wc1", "Order 1", "2024-01-01", "2024-01-05")];
        TimelineService::new(MemoryStore::new(Vec::new(), orders))
            .unwrap()
            .with_id_generator(SequentialIdGenerator::starting_at(100))
    }

    #[test]
    fn test_add_order_saves_full_list() {
        let mut service = setup_service();
        let new_order = WorkOrder::new("wo2", "wc2", "Order 2", "2024-01-15", "2024-01-20");

        service.add_order(new_order.clone()).unwrap();

        assert_eq!(service.work_orders().len(), 2);
        assert_eq!(service.store().saved_orders(), service.work_orders());
        assert_eq!(service.store().save_count(), 1);
        assert!(service.work_orders().contains(&new_order));
    }

    #[test]
    fn test_update_order_replaces_by_id() {
        let mut service = setup_service();
        let updated = WorkOrder::new("wo1", "wc1", "Renamed", "2024-01-02", "2024-01-03")
            .with_status(WorkOrderStatus::Complete);

        assert!(service.update_order(updated.clone()).unwrap());
        assert_eq!(service.work_orders(), &[updated]);
        assert_eq!(service.store().save_count(), 1);
    }

    #[test]
    fn test_update_unknown_order_is_noop() {
        let mut service = setup_service();
        let ghost = WorkOrder::new("nope", "wc1", "Ghost", "2024-01-02", "2024-01-03");

        assert!(!service.update_order(ghost).unwrap());
        assert_eq!(service.work_orders().len(), 1);
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_delete_order() {
        let mut service = setup_service();
        assert!(service.delete_order("wo1").unwrap());
        assert!(service.work_orders().is_empty());
        assert!(service.store().saved_orders().is_empty());

        assert!(!service.delete_order("wo1").unwrap());
        assert_eq!(service.store().save_count(), 1);
    }

    #[test]
    fn test_save_order_generates_id_for_new_order() {
        let mut service = setup_service();
        let mut draft = WorkOrderDraft::new_for("wc1");
        draft.name = "New".to_string();
        draft.start_date = "2024-02-01".to_string();
        draft.end_date = "2024-02-02".to_string();

        let saved = service.save_order(draft.into_order().unwrap()).unwrap();

        assert_eq!(saved.id, "wo_100");
        assert_eq!(service.work_orders().len(), 2);
        assert_eq!(service.work_orders()[1], saved);
    }

    #[test]
    fn test_save_order_updates_existing() {
        let mut service = setup_service();
        let mut draft = WorkOrderDraft::from_order(&service.work_orders()[0]);
        draft.name = "Edited".to_string();

        let saved = service.save_order(draft.into_order().unwrap()).unwrap();

        assert_eq!(saved.id, "wo1");
        assert_eq!(service.work_orders().len(), 1);
        assert_eq!(service.work_orders()[0].name, "Edited");
    }

    #[test]
    fn test_save_order_with_unseen_id_adds() {
        let mut service = setup_service();
        let imported = WorkOrder::new("ext-7", "wc3", "Imported", "2024-03-01", "2024-03-02");

        service.save_order(imported.clone()).unwrap();
        assert!(service.work_orders().contains(&imported));
    }

    struct FailingStore;

    impl OrderStore for FailingStore {
        fn load_work_centers(&self) -> Result<Vec<crate::models::work_center::WorkCenter>> {
            Ok(Vec::new())
        }

        fn load_work_orders(&self) -> Result<Vec<WorkOrder>> {
            Ok(Vec::new())
        }

        fn save_work_orders(&mut self, _orders: &[WorkOrder]) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let mut service = TimelineService::new(FailingStore).unwrap();
        let err = service
            .add_order(WorkOrder::new("wo1", "wc1", "A", "2024-01-01", "2024-01-02"))
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to save work orders"));
        assert!(message.contains("disk full"));
    }
}
