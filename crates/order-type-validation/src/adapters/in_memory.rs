//! In-memory order-type store.
//!
//! Implements both outbound ports over a process-local population. Used by
//! tests and by hosts that validate against a snapshot instead of a database.

use crate::domain::hierarchy;
use crate::domain::{OrderType, OrderTypeId};
use crate::ports::outbound::{LookupError, OrderTypeHierarchy, OrderTypeLookup};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default)]
struct StoreState {
    nodes: BTreeMap<OrderTypeId, OrderType>,
    next_id: u64,
}

/// Order types held in memory, keyed by id.
#[derive(Default)]
pub struct InMemoryOrderTypeStore {
    state: RwLock<StoreState>,
}

impl InMemoryOrderTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-persisted nodes, each with its own distinct id.
    pub fn with_order_types(nodes: impl IntoIterator<Item = OrderType>) -> Result<Self, LookupError> {
        let store = Self::new();
        {
            let mut state = store.state.write();
            for node in nodes {
                let id = node
                    .id
                    .ok_or_else(|| LookupError::Corrupt("seeded order type has no id".into()))?;
                if state.nodes.contains_key(&id) {
                    return Err(LookupError::Corrupt(format!(
                        "order type id {} seeded twice",
                        id
                    )));
                }
                state.next_id = state.next_id.max(id.0);
                state.nodes.insert(id, node);
            }
        }
        Ok(store)
    }

    /// Persist `order_type`, assigning an id when it has none.
    ///
    /// This is a plain write; validation is the caller's job.
    pub fn insert(&self, mut order_type: OrderType) -> OrderTypeId {
        let mut state = self.state.write();
        let id = match order_type.id {
            Some(id) => {
                state.next_id = state.next_id.max(id.0);
                id
            }
            None => {
                state.next_id += 1;
                OrderTypeId(state.next_id)
            }
        };
        order_type.id = Some(id);
        debug!(order_type_id = %id, "[order-types] stored order type");
        state.nodes.insert(id, order_type);
        id
    }

    /// Mark a node retired. Returns false when `id` is unknown.
    pub fn retire(&self, id: OrderTypeId) -> bool {
        match self.state.write().nodes.get_mut(&id) {
            Some(node) => {
                node.retired = true;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: OrderTypeId) -> Option<OrderType> {
        self.state.read().nodes.get(&id).cloned()
    }

    /// Transitive descendants of `id`.
    pub fn subtypes(&self, id: OrderTypeId, include_retired: bool) -> Vec<OrderType> {
        let state = self.state.read();
        let population: Vec<OrderType> = state.nodes.values().cloned().collect();
        hierarchy::subtypes(&population, id, include_retired)
    }

    pub fn len(&self) -> usize {
        self.state.read().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().nodes.is_empty()
    }
}

impl OrderTypeLookup for InMemoryOrderTypeStore {
    fn find_order_type_by_name(&self, name: &str) -> Result<Option<OrderType>, LookupError> {
        Ok(self
            .state
            .read()
            .nodes
            .values()
            .find(|node| node.name.as_deref() == Some(name))
            .cloned())
    }

    fn list_order_types(&self, include_retired: bool) -> Result<Vec<OrderType>, LookupError> {
        Ok(self
            .state
            .read()
            .nodes
            .values()
            .filter(|node| include_retired || !node.retired)
            .cloned()
            .collect())
    }
}

impl OrderTypeHierarchy for InMemoryOrderTypeStore {
    fn is_ancestor_or_self(
        &self,
        candidate: &OrderType,
        other: OrderTypeId,
    ) -> Result<bool, LookupError> {
        let Some(root) = candidate.id else {
            return Ok(false);
        };
        let state = self.state.read();
        let population: Vec<OrderType> = state.nodes.values().cloned().collect();
        Ok(hierarchy::descendants_include(&population, root, other))
    }
}
