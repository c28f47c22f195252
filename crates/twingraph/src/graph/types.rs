//! Core graph types: nodes and links.

use serde::{Deserialize, Serialize};

/// A concept in the digital twin graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique, stable identifier
    pub id: String,
    /// Display name (non-empty)
    pub label: String,
    /// Category tag used for filtering and coloring
    pub group: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Free-text note on what the concept is good for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility: Option<String>,
}

impl GraphNode {
    /// Create a node without annotations.
    pub fn new(id: impl Into<String>, label: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: group.into(),
            desc: None,
            utility: None,
        }
    }

    /// Set the description (builder pattern).
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set the utility note (builder pattern).
    pub fn with_utility(mut self, utility: impl Into<String>) -> Self {
        self.utility = Some(utility.into());
        self
    }
}

/// A relation between two nodes.
///
/// Stored as an ordered pair but treated as symmetric for adjacency and path finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    /// Source node ID
    pub source: String,
    /// Target node ID
    pub target: String,
    /// Optional relation kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl GraphLink {
    /// Create an untyped link.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            link_type: None,
        }
    }

    /// Set the relation kind (builder pattern).
    pub fn with_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = Some(link_type.into());
        self
    }

    /// The endpoint opposite to `node_id`, if the link touches it.
    pub fn other_end(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }
}
