//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`GraphNode`] and [`GraphLink`]: the static dataset
//! - [`GraphStore`]: the immutable snapshot every query runs against
//! - [`algorithms`]: shortest paths over the undirected link set
//! - [`connections`]: direct neighborhood lookups

mod types;
mod store;
pub mod algorithms;
pub mod connections;

pub use types::{GraphLink, GraphNode};
pub use store::GraphStore;
pub use algorithms::{Adjacency, PathInsight};
pub use connections::Connections;
