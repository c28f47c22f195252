//! Query evaluation over the graph snapshot.
//!
//! A [`QuerySpec`] selects nodes with at most one filter, chosen by precedence:
//! ids, then label fragments, then groups, then a free-text search term, then
//! "all nodes". [`QueryEngine::evaluate`] cites every matched node and returns
//! the induced subgraph.

use crate::citation::{Citation, CitationRegistry};
use crate::context::{render_context, ContextOptions};
use crate::graph::{GraphLink, GraphNode, GraphStore, PathInsight};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input of a query.
///
/// Several filters may be set; only the one with the highest precedence is
/// honored (see [`QuerySpec::active_filter`]). Empty sets and blank search
/// terms count as unset.
///
/// # Examples
///
/// ```
/// use twingraph::QuerySpec;
///
/// let spec = QuerySpec::all()
///     .by_groups(["logistics"])
///     .with_link_types(["supplies"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    /// Exact node ids
    #[serde(default)]
    pub node_ids: Vec<String>,
    /// Case-insensitive label fragments
    #[serde(default)]
    pub labels: Vec<String>,
    /// Exact group names
    #[serde(default)]
    pub groups: Vec<String>,
    /// Free-text term matched against label, description, utility and group
    #[serde(default)]
    pub search_term: Option<String>,
    /// Link types to keep in the result
    #[serde(default)]
    pub link_types: Vec<String>,
}

/// The node filter a [`QuerySpec`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFilter<'a> {
    /// Exact membership in an id set
    Ids(&'a [String]),
    /// Any fragment is a case-insensitive substring of the label
    Labels(&'a [String]),
    /// Exact membership of the group
    Groups(&'a [String]),
    /// Case-insensitive substring of label, description, utility or group
    Search(&'a str),
    /// Every node
    All,
}

impl QuerySpec {
    /// A spec matching every node.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by exact node ids.
    pub fn by_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by label fragments.
    pub fn by_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by groups.
    pub fn by_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by a free-text term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Keep only links of these types.
    pub fn with_link_types<I, S>(mut self, link_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_types = link_types.into_iter().map(Into::into).collect();
        self
    }

    /// The filter that will be applied.
    pub fn active_filter(&self) -> NodeFilter<'_> {
        if !self.node_ids.is_empty() {
            NodeFilter::Ids(&self.node_ids)
        } else if !self.labels.is_empty() {
            NodeFilter::Labels(&self.labels)
        } else if !self.groups.is_empty() {
            NodeFilter::Groups(&self.groups)
        } else {
            match self.search_term.as_deref() {
                Some(term) if !term.trim().is_empty() => NodeFilter::Search(term),
                _ => NodeFilter::All,
            }
        }
    }
}

impl<'a> NodeFilter<'a> {
    fn into_predicate(self) -> Box<dyn Fn(&GraphNode) -> bool + 'a> {
        match self {
            NodeFilter::Ids(ids) => {
                let ids: HashSet<&str> = ids.iter().map(String::as_str).collect();
                Box::new(move |node: &GraphNode| ids.contains(node.id.as_str()))
            }
            NodeFilter::Labels(fragments) => {
                let fragments: Vec<String> = fragments.iter().map(|f| f.to_lowercase()).collect();
                Box::new(move |node: &GraphNode| {
                    let label = node.label.to_lowercase();
                    fragments.iter().any(|fragment| label.contains(fragment))
                })
            }
            NodeFilter::Groups(groups) => {
                let groups: HashSet<&str> = groups.iter().map(String::as_str).collect();
                Box::new(move |node: &GraphNode| groups.contains(node.group.as_str()))
            }
            NodeFilter::Search(term) => {
                let term = term.to_lowercase();
                Box::new(move |node: &GraphNode| {
                    let contains = |field: &str| field.to_lowercase().contains(&term);
                    contains(&node.label)
                        || node.desc.as_deref().is_some_and(contains)
                        || node.utility.as_deref().is_some_and(contains)
                        || contains(&node.group)
                })
            }
            NodeFilter::All => Box::new(|_: &GraphNode| true),
        }
    }
}

/// Output of [`QueryEngine::evaluate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// Matched nodes in store order
    pub nodes: Vec<GraphNode>,
    /// Links with both endpoints matched, in store order
    pub links: Vec<GraphLink>,
    /// One citation per matched node, in match order
    pub citations: Vec<Citation>,
}

impl QueryResult {
    /// Ids of the citations, as handed to the assistant.
    pub fn citation_ids(&self) -> Vec<String> {
        self.citations.iter().map(|c| c.id.clone()).collect()
    }

    /// Ids of the matched nodes.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render the grounding context for this result.
    pub fn context(&self, options: &ContextOptions) -> String {
        render_context(&self.nodes, &self.links, options)
    }
}

/// Evaluates queries against a store, citing every matched node.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a GraphStore,
    registry: &'a CitationRegistry,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over a store and a citation registry.
    pub fn new(store: &'a GraphStore, registry: &'a CitationRegistry) -> Self {
        Self { store, registry }
    }

    /// Evaluate a query.
    ///
    /// Never fails: unknown ids simply match nothing.
    pub fn evaluate(&self, spec: &QuerySpec) -> QueryResult {
        let filter = spec.active_filter();
        let predicate = filter.into_predicate();

        let nodes: Vec<GraphNode> = self
            .store
            .nodes()
            .iter()
            .filter(|&node| predicate(node))
            .cloned()
            .collect();

        let citations = nodes
            .iter()
            .map(|node| self.registry.cite_node(node))
            .collect();

        let links = induced_links(self.store.links(), &nodes, &spec.link_types);

        debug!(
            "Query {filter:?}: {} nodes, {} links",
            nodes.len(),
            links.len()
        );

        QueryResult {
            nodes,
            links,
            citations,
        }
    }

    /// Cite the resolved nodes of a path, in path order.
    pub fn cite_path(&self, insight: &PathInsight) -> Vec<Citation> {
        insight
            .nodes
            .iter()
            .map(|node| self.registry.cite_node(node))
            .collect()
    }
}

/// Links whose endpoints are both in `nodes`, optionally narrowed to `link_types`.
///
/// A non-empty type filter excludes untyped links.
pub fn induced_links(
    links: &[GraphLink],
    nodes: &[GraphNode],
    link_types: &[String],
) -> Vec<GraphLink> {
    let matched: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let types: HashSet<&str> = link_types.iter().map(String::as_str).collect();

    links
        .iter()
        .filter(|link| {
            matched.contains(link.source.as_str()) && matched.contains(link.target.as_str())
        })
        .filter(|link| {
            types.is_empty()
                || link
                    .link_type
                    .as_deref()
                    .is_some_and(|link_type| types.contains(link_type))
        })
        .cloned()
        .collect()
}
