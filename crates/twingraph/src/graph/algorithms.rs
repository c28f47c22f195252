//! Path finding over the undirected projection of the link set.
//!
//! A single breadth-first search serves both call sites: [`shortest_path`]
//! (ids only) and [`find_path_links`] (ids plus the link used for each hop).

use super::store::GraphStore;
use super::types::{GraphLink, GraphNode};
use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

/// Symmetric adjacency built from a link sequence.
///
/// Each node's neighbor list is in order of first appearance while scanning
/// the links, without duplicates. Every entry remembers the first link that
/// joined the pair.
#[derive(Debug, Default)]
pub struct Adjacency<'a> {
    neighbors: HashMap<&'a str, Vec<(&'a str, &'a GraphLink)>>,
}

impl<'a> Adjacency<'a> {
    /// Build the adjacency relation from any link source.
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = &'a GraphLink>,
    {
        let mut adjacency = Self::default();
        for link in links {
            adjacency.connect(&link.source, &link.target, link);
            adjacency.connect(&link.target, &link.source, link);
        }
        adjacency
    }

    fn connect(&mut self, from: &'a str, to: &'a str, link: &'a GraphLink) {
        let entry = self.neighbors.entry(from).or_default();
        if !entry.iter().any(|(existing, _)| *existing == to) {
            entry.push((to, link));
        }
    }

    /// Neighbor ids of `node_id` in expansion order.
    pub fn neighbors(&self, node_id: &str) -> impl Iterator<Item = &'a str> + '_ {
        self.entries(node_id).iter().map(|(neighbor, _)| *neighbor)
    }

    fn entries(&self, node_id: &str) -> &[(&'a str, &'a GraphLink)] {
        self.neighbors
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One step of a found path: the node reached and the link used to reach it.
struct Hop<'a> {
    node: &'a str,
    via: Option<&'a GraphLink>,
}

/// Breadth-first search from `source`, stopping as soon as `target` is dequeued.
///
/// First visit wins, so every node has exactly one parent. Returns an empty
/// vector if `target` is never reached.
fn search<'a>(adjacency: &Adjacency<'a>, source: &'a str, target: &str) -> Vec<Hop<'a>> {
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut parents: HashMap<&'a str, (&'a str, &'a GraphLink)> = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let mut hops = Vec::new();
            let mut cursor = current;
            while let Some(&(parent, link)) = parents.get(cursor) {
                hops.push(Hop {
                    node: cursor,
                    via: Some(link),
                });
                cursor = parent;
            }
            hops.push(Hop {
                node: cursor,
                via: None,
            });
            hops.reverse();
            return hops;
        }

        for &(neighbor, link) in adjacency.entries(current) {
            if visited.insert(neighbor) {
                trace!("Discovered {neighbor} via {current}");
                parents.insert(neighbor, (current, link));
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}

/// Shortest path (by hop count) between two nodes.
///
/// # Returns
/// - `[source]` when `source == target`
/// - the node ids along a shortest path, endpoints included
/// - an empty vector when the nodes are disconnected or an id is absent
pub fn shortest_path<'a, I>(links: I, source: &str, target: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a GraphLink>,
{
    find_path_links(links, source, target).0
}

/// Shortest path together with the link traversed for each hop.
///
/// The second vector has one entry fewer than the first (none for a
/// self-path or no path). Where several links join the same pair, the first
/// one in link order is reported.
pub fn find_path_links<'a, I>(links: I, source: &str, target: &str) -> (Vec<String>, Vec<GraphLink>)
where
    I: IntoIterator<Item = &'a GraphLink>,
{
    if source == target {
        return (vec![source.to_string()], Vec::new());
    }

    let adjacency = Adjacency::from_links(links);
    let hops = search(&adjacency, source, target);
    debug!(
        "Path search {source} -> {target}: {} hops",
        hops.len().saturating_sub(1)
    );

    let path = hops.iter().map(|hop| hop.node.to_string()).collect();
    let traversed = hops
        .iter()
        .filter_map(|hop| hop.via.cloned())
        .collect();
    (path, traversed)
}

/// A shortest path resolved against the graph, as shown in the insight panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathInsight {
    /// Node ids along the path (empty when disconnected)
    pub path: Vec<String>,
    /// Path nodes that exist in the store, in path order
    pub nodes: Vec<GraphNode>,
    /// Link used for each hop
    pub links: Vec<GraphLink>,
}

impl PathInsight {
    /// Find and resolve the shortest path between two nodes.
    pub fn build(store: &GraphStore, source: &str, target: &str) -> Self {
        let (path, links) = find_path_links(store.links(), source, target);
        let nodes = path
            .iter()
            .filter_map(|id| store.node(id).cloned())
            .collect();
        Self { path, nodes, links }
    }

    /// Whether a path was found.
    pub fn is_connected(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Render the path as `"A -> B -> C"`, falling back to raw ids for
    /// nodes missing from the store.
    pub fn describe(&self) -> String {
        self.path
            .iter()
            .map(|id| {
                self.nodes
                    .iter()
                    .find(|node| &node.id == id)
                    .map_or(id.as_str(), |node| node.label.as_str())
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
