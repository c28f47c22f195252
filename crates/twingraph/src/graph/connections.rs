//! Neighbor lookups for the "show connections" panel.

use super::store::GraphStore;
use super::types::{GraphLink, GraphNode};
use log::debug;
use std::collections::HashSet;

/// Direct neighborhood of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connections {
    /// Resolved neighbor nodes, de-duplicated, in link order
    pub neighbors: Vec<GraphNode>,
    /// Every link touching the node, including ones whose other end is unknown
    pub links: Vec<GraphLink>,
}

/// Neighbors and incident links of `node_id`, in either direction.
///
/// Neighbors missing from the store are dropped, but their links are still
/// reported.
pub fn connections(store: &GraphStore, node_id: &str) -> Connections {
    let mut seen = HashSet::new();
    let mut result = Connections::default();

    for link in store.links() {
        let Some(other) = link.other_end(node_id) else {
            continue;
        };
        result.links.push(link.clone());
        if seen.insert(other) {
            if let Some(node) = store.node(other) {
                result.neighbors.push(node.clone());
            }
        }
    }

    debug!(
        "Connections of {node_id}: {} neighbors, {} links",
        result.neighbors.len(),
        result.links.len()
    );
    result
}

/// Source nodes of links pointing at `node_id`.
///
/// Directional, unlike [`connections`].
pub fn backlinks(store: &GraphStore, node_id: &str) -> Vec<GraphNode> {
    let mut seen = HashSet::new();
    store
        .links()
        .iter()
        .filter(|link| link.target == node_id)
        .filter(|link| seen.insert(link.source.as_str()))
        .filter_map(|link| store.node(&link.source).cloned())
        .collect()
}
