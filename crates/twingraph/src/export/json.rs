//! JSON export for the force-graph renderer.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use crate::error::{GraphError, Result};
use crate::graph::{GraphLink, GraphNode};
use crate::query::QueryResult;
use serde_json::{json, Value};

/// Export a node/link set to D3.js-compatible JSON.
pub fn export_json(nodes: &[GraphNode], links: &[GraphLink]) -> Result<String> {
    to_pretty(&graph_value(nodes, links)?)
}

/// Export a query result, including its citations.
pub fn export_result_json(result: &QueryResult) -> Result<String> {
    let mut value = graph_value(&result.nodes, &result.links)?;
    value["citations"] = serde_json::to_value(&result.citations)
        .map_err(|e| GraphError::serialization("Failed to serialize citations", Some(e)))?;
    to_pretty(&value)
}

fn graph_value(nodes: &[GraphNode], links: &[GraphLink]) -> Result<Value> {
    let nodes = serde_json::to_value(nodes)
        .map_err(|e| GraphError::serialization("Failed to serialize nodes", Some(e)))?;
    let links = serde_json::to_value(links)
        .map_err(|e| GraphError::serialization("Failed to serialize links", Some(e)))?;
    Ok(json!({
        "nodes": nodes,
        "links": links,
    }))
}

fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GraphError::serialization("Failed to serialize JSON", Some(e)))
}
