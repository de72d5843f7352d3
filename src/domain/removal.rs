//! Archive-or-delete partitioning for batch product removal.

use std::collections::HashSet;

use uuid::Uuid;

/// How each requested product id is handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Owned and referenced by at least one order: soft delete.
    pub archive: Vec<Uuid>,
    /// Owned and never ordered: hard delete.
    pub delete: Vec<Uuid>,
    /// Not owned by the caller or not found.
    pub skipped: Vec<Uuid>,
}

impl RemovalPlan {
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty() && self.delete.is_empty()
    }
}

/// Partitions `requested` (duplicates ignored, order kept) using the owned and
/// order-referenced id sets.
pub fn plan_removal(
    requested: &[Uuid],
    owned: &HashSet<Uuid>,
    referenced: &HashSet<Uuid>,
) -> RemovalPlan {
    let mut seen = HashSet::new();
    let mut plan = RemovalPlan::default();
    for id in requested.iter().copied().filter(|id| seen.insert(*id)) {
        if !owned.contains(&id) {
            plan.skipped.push(id);
        } else if referenced.contains(&id) {
            plan.archive.push(id);
        } else {
            plan.delete.push(id);
        }
    }
    plan
}
