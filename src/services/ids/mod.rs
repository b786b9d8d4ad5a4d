//! Identifier generation for newly created work orders.

use uuid::Uuid;

pub const WORK_ORDER_ID_PREFIX: &str = "wo_";

/// Source of fresh work order identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, e.g. `wo_3f2b...`. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        format!("{WORK_ORDER_ID_PREFIX}{}", Uuid::new_v4().simple())
    }
}

/// Monotonic counter, `wo_1`, `wo_2`, ... Deterministic, for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{WORK_ORDER_ID_PREFIX}{}", self.next);
        self.next += 1;
        id
    }
}
