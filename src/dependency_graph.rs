/// Table dependency graph
///
/// Builds a directed acyclic graph from the foreign keys each row type
/// declares and computes the order in which tables must be filled.

use crate::entity::Entity;
use crate::error::{Result, ShopgenError};
use crate::models::{Category, Customer, Order, OrderItem, Product, Shipment};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    pub table: &'static str,
    pub depends_on: Vec<&'static str>,
}

impl TableNode {
    pub fn of<E: Entity>() -> Self {
        TableNode {
            table: E::NAME,
            depends_on: E::DEPENDS_ON.to_vec(),
        }
    }
}

/// The store tables in declaration order.
pub fn store_tables() -> Vec<TableNode> {
    vec![
        TableNode::of::<Category>(),
        TableNode::of::<Product>(),
        TableNode::of::<Customer>(),
        TableNode::of::<Order>(),
        TableNode::of::<OrderItem>(),
        TableNode::of::<Shipment>(),
    ]
}

/// Topological order of `nodes` (Kahn's algorithm).
///
/// Among tables that are ready at the same time, the one declared first goes
/// first, so the result is stable. References to tables outside `nodes` are
/// ignored.
pub fn insertion_order(nodes: &[TableNode]) -> Result<Vec<&'static str>> {
    let position: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.table, idx))
        .collect();

    // Build reverse dependency map (who references this table)
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut in_degree: Vec<usize> = vec![0; nodes.len()];

    for (idx, node) in nodes.iter().enumerate() {
        for dep in &node.depends_on {
            if let Some(&dep_idx) = position.get(dep) {
                dependents[dep_idx].push(idx);
                in_degree[idx] += 1;
            }
        }
    }

    let mut ready: BTreeSet<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(idx, _)| idx)
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(idx) = ready.pop_first() {
        order.push(nodes[idx].table);
        for &dependent in &dependents[idx] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                ready.insert(dependent);
            }
        }
    }

    // Check for cycles
    if order.len() != nodes.len() {
        let unprocessed: Vec<String> = nodes
            .iter()
            .filter(|node| !order.contains(&node.table))
            .map(|node| node.table.to_string())
            .collect();
        return Err(ShopgenError::DependencyCycle(unprocessed));
    }

    Ok(order)
}
