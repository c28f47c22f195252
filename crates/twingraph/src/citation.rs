//! Provenance records for context handed to the assistant.
//!
//! A [`CitationRegistry`] hands out ids of the form `cite-<N>`, with `N`
//! strictly increasing from 1 and never reused. Records are immutable once
//! issued. The registry is an explicit object: construct one per process (or
//! per test) and pass it by reference.

use crate::graph::GraphNode;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

const ID_PREFIX: &str = "cite-";

/// Where a cited fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationSource {
    /// A node of the digital twin graph
    GraphNode,
    /// External documentation
    Docs,
    /// A saved notebook entry
    Notebook,
}

impl std::fmt::Display for CitationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CitationSource::GraphNode => write!(f, "graph-node"),
            CitationSource::Docs => write!(f, "docs"),
            CitationSource::Notebook => write!(f, "notebook"),
        }
    }
}

/// An issued provenance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// `cite-<N>`
    pub id: String,
    /// Provenance kind
    pub source: CitationSource,
    /// Cited node, for graph-node citations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Short title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Citation {
    /// Numeric suffix of the id.
    pub fn sequence(&self) -> Option<u64> {
        parse_sequence(&self.id)
    }
}

/// Fields of a citation before the registry assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCitation {
    /// Provenance kind
    pub source: CitationSource,
    /// Cited node
    pub node_id: Option<String>,
    /// Short title
    pub title: Option<String>,
    /// Longer description
    pub description: Option<String>,
}

impl NewCitation {
    /// A citation of a graph node, with fields copied from it.
    pub fn for_node(node: &GraphNode) -> Self {
        Self {
            source: CitationSource::GraphNode,
            node_id: Some(node.id.clone()),
            title: Some(node.label.clone()),
            description: node.desc.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    // Last issued sequence number; 0 means none issued yet
    counter: u64,
    records: BTreeMap<u64, Citation>,
}

/// Monotonic table of issued citations.
///
/// Registration takes `&self` and is serialized behind a lock, so one
/// registry can be shared between threads without ever handing out the
/// same id twice.
#[derive(Debug, Default)]
pub struct CitationRegistry {
    state: RwLock<RegistryState>,
    retention: Option<usize>,
}

impl CitationRegistry {
    /// Create an empty, unbounded registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that keeps at most `limit` records.
    ///
    /// Once the limit is exceeded the oldest records are evicted. Eviction
    /// only affects [`get`](Self::get) and [`all`](Self::all); ids keep
    /// increasing and are never reissued.
    pub fn with_retention(limit: usize) -> Self {
        Self {
            state: RwLock::default(),
            retention: Some(limit),
        }
    }

    /// Issue a new citation. Always succeeds and always allocates a fresh id.
    pub fn register(&self, citation: NewCitation) -> Citation {
        let mut state = self.write();
        state.counter += 1;
        let sequence = state.counter;

        let record = Citation {
            id: format!("{ID_PREFIX}{sequence}"),
            source: citation.source,
            node_id: citation.node_id,
            title: citation.title,
            description: citation.description,
        };
        state.records.insert(sequence, record.clone());

        if let Some(limit) = self.retention {
            while state.records.len() > limit {
                state.records.pop_first();
            }
        }

        trace!("Registered {} ({})", record.id, record.source);
        record
    }

    /// Cite a graph node.
    pub fn cite_node(&self, node: &GraphNode) -> Citation {
        self.register(NewCitation::for_node(node))
    }

    /// Cite a piece of external documentation.
    pub fn cite_docs(&self, title: impl Into<String>, description: impl Into<String>) -> Citation {
        self.register(NewCitation {
            source: CitationSource::Docs,
            node_id: None,
            title: Some(title.into()),
            description: Some(description.into()),
        })
    }

    /// Cite a notebook entry.
    pub fn cite_notebook(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Citation {
        self.register(NewCitation {
            source: CitationSource::Notebook,
            node_id: None,
            title: Some(title.into()),
            description: Some(description.into()),
        })
    }

    /// Look up a retained citation by id.
    pub fn get(&self, id: &str) -> Option<Citation> {
        let sequence = parse_sequence(id)?;
        self.read().records.get(&sequence).cloned()
    }

    /// All retained citations in issue order.
    pub fn all(&self) -> Vec<Citation> {
        self.read().records.values().cloned().collect()
    }

    /// Number of retained citations.
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    /// Whether no citations are retained.
    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Number of citations ever issued, including evicted ones.
    pub fn issued(&self) -> u64 {
        self.read().counter
    }

    // Poisoned guards are recovered; no writer leaves the state half-updated.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn parse_sequence(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}
