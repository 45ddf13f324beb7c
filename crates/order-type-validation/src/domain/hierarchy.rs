//! Hierarchy walks over a snapshot of persisted order types.
//!
//! Children are found through `parent` links. Persisted data may already
//! contain a cycle, so every walk keeps a visited set and terminates.

use super::entities::OrderType;
use super::value_objects::OrderTypeId;
use std::collections::{HashMap, HashSet};

/// Child ids keyed by parent id.
fn child_index(population: &[OrderType]) -> HashMap<OrderTypeId, Vec<OrderTypeId>> {
    let mut children: HashMap<OrderTypeId, Vec<OrderTypeId>> = HashMap::new();
    for node in population {
        if let (Some(id), Some(parent)) = (node.id, node.parent) {
            children.entry(parent).or_default().push(id);
        }
    }
    children
}

/// Whether `target` is `root` or lies anywhere below it.
pub fn descendants_include(population: &[OrderType], root: OrderTypeId, target: OrderTypeId) -> bool {
    if root == target {
        return true;
    }

    let children = child_index(population);
    let mut visited = HashSet::new();
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(kids) = children.get(&current) else {
            continue;
        };
        for &child in kids {
            if child == target {
                return true;
            }
            stack.push(child);
        }
    }

    false
}

/// All transitive descendants of `root`, breadth-first, `root` excluded.
pub fn subtypes(population: &[OrderType], root: OrderTypeId, include_retired: bool) -> Vec<OrderType> {
    let by_id: HashMap<OrderTypeId, &OrderType> = population
        .iter()
        .filter_map(|node| node.id.map(|id| (id, node)))
        .collect();
    let children = child_index(population);

    let mut visited = HashSet::from([root]);
    let mut frontier = vec![root];
    let mut result = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for parent in frontier {
            for &child in children.get(&parent).map(Vec::as_slice).unwrap_or_default() {
                if !visited.insert(child) {
                    continue;
                }
                next.push(child);
                if let Some(node) = by_id.get(&child) {
                    if include_retired || !node.retired {
                        result.push((*node).clone());
                    }
                }
            }
        }
        frontier = next;
    }

    result
}
