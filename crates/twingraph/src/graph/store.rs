//! Immutable snapshot of the digital twin graph.

use super::algorithms::{self, PathInsight};
use super::connections::{self, Connections};
use super::types::{GraphLink, GraphNode};
use crate::error::{GraphError, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// The read-only graph every query runs against.
///
/// Built once at startup and never mutated. Nodes and links keep the order
/// they were supplied in; every query result preserves that order.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    // id -> position in `nodes`
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct Dataset {
    #[serde(default)]
    nodes: Vec<GraphNode>,
    #[serde(default)]
    links: Vec<GraphLink>,
}

impl GraphStore {
    /// Build a store from a static dataset.
    ///
    /// Links whose endpoints do not resolve are kept (and logged); queries
    /// treat them as pointing at "no node".
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if two nodes share an id and
    /// [`GraphError::InvalidNode`] if a node has an empty id or label.
    pub fn new(nodes: Vec<GraphNode>, links: Vec<GraphLink>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(GraphError::InvalidNode {
                    node_id: node.id.clone(),
                    message: "id must not be empty".to_string(),
                });
            }
            if node.label.trim().is_empty() {
                return Err(GraphError::InvalidNode {
                    node_id: node.id.clone(),
                    message: "label must not be empty".to_string(),
                });
            }
            if index.insert(node.id.clone(), position).is_some() {
                return Err(GraphError::DuplicateNode {
                    node_id: node.id.clone(),
                });
            }
        }

        for link in &links {
            for endpoint in [&link.source, &link.target] {
                if !index.contains_key(endpoint) {
                    warn!(
                        "Link {} -> {} references unknown node {endpoint}",
                        link.source, link.target
                    );
                }
            }
        }

        info!(
            "Loaded graph snapshot: {} nodes, {} links",
            nodes.len(),
            links.len()
        );

        Ok(Self {
            nodes,
            links,
            index,
        })
    }

    /// Build a store from a JSON document of the form
    /// `{"nodes": [...], "links": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] for malformed JSON, plus the
    /// validation errors of [`GraphStore::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)
            .map_err(|e| GraphError::serialization("Failed to parse graph dataset", Some(e)))?;
        debug!(
            "Parsed dataset with {} nodes and {} links",
            dataset.nodes.len(),
            dataset.links.len()
        );
        Self::new(dataset.nodes, dataset.links)
    }

    /// All nodes in stored order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All links in stored order.
    pub fn links(&self) -> &[GraphLink] {
        &self.links
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// Look up a node by id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn require_node(&self, id: &str) -> Result<&GraphNode> {
        self.node(id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Distinct node groups in first-seen order (legend entries for the UI).
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(|node| node.group.as_str())
            .filter(|group| seen.insert(*group))
            .collect()
    }

    /// Distinct link types in first-seen order. Untyped links are skipped.
    pub fn link_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.links
            .iter()
            .filter_map(|link| link.link_type.as_deref())
            .filter(|link_type| seen.insert(*link_type))
            .collect()
    }

    // ===== Algorithm Methods =====

    /// Shortest path between two nodes as a sequence of ids.
    ///
    /// Links are treated as undirected. Returns `[source]` when both ids are
    /// equal and an empty vector when no path exists.
    pub fn shortest_path(&self, source: &str, target: &str) -> Vec<String> {
        algorithms::shortest_path(&self.links, source, target)
    }

    /// Shortest path between two nodes with resolved nodes and traversed links.
    pub fn path_insight(&self, source: &str, target: &str) -> PathInsight {
        PathInsight::build(self, source, target)
    }

    /// Direct neighbors and incident links of a node.
    pub fn connections(&self, node_id: &str) -> Connections {
        connections::connections(self, node_id)
    }

    /// Nodes with a link pointing at `node_id`.
    pub fn backlinks(&self, node_id: &str) -> Vec<GraphNode> {
        connections::backlinks(self, node_id)
    }
}
