//! # twingraph
//!
//! Query layer for a digital-twin knowledge graph: filter a fixed concept
//! graph, find connecting paths, and build citation-tracked grounding context
//! for a text-generation assistant.
//!
//! ## Core Principles
//!
//! - **Immutable Snapshot**: the graph is loaded once and never mutated
//! - **Degrade, Don't Fail**: unknown ids and missing paths yield empty results
//! - **Traceable Context**: every node handed to the assistant carries a citation
//! - **Injected Boundaries**: the assistant client and notebook are traits
//!
//! ## Architecture
//!
//! ```text
//! UI events
//!     ↓
//! QueryEngine / PathInsight / connections
//!     ↓                         ↘
//! CitationRegistry          ContextBuilder
//!     ↓                         ↓
//! GraphStore (nodes, links)   GroundedAssistant → AssistantClient
//! ```
//!
//! ## Example
//!
//! ```rust
//! use twingraph::{CitationRegistry, GraphLink, GraphNode, GraphStore, QueryEngine, QuerySpec};
//!
//! # fn main() -> twingraph::Result<()> {
//! let store = GraphStore::new(
//!     vec![
//!         GraphNode::new("a", "Supplier", "supply"),
//!         GraphNode::new("b", "Warehouse", "logistics"),
//!     ],
//!     vec![GraphLink::new("a", "b").with_type("ships_to")],
//! )?;
//! let registry = CitationRegistry::new();
//!
//! let result = QueryEngine::new(&store, &registry).evaluate(&QuerySpec::all().search("ware"));
//! assert_eq!(result.citation_ids(), vec!["cite-1"]);
//! assert_eq!(store.shortest_path("a", "b"), vec!["a", "b"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod assistant;
pub mod citation;
pub mod context;
pub mod error;
pub mod export;
pub mod graph;
pub mod notebook;
pub mod query;

// Re-export main types
pub use assistant::{AssistantClient, AssistantReply, GroundedAssistant, RetryPolicy, ERROR_MARKER};
pub use citation::{Citation, CitationRegistry, CitationSource, NewCitation};
pub use context::{render, render_context, ContextOptions};
pub use error::{AssistantError, GraphError, Result};
pub use graph::{Connections, GraphLink, GraphNode, GraphStore, PathInsight};
pub use notebook::{NotebookEntry, NotebookSink};
pub use query::{NodeFilter, QueryEngine, QueryResult, QuerySpec};
