//! Natural-language grounding context for the assistant.
//!
//! The rendered string is the only payload handed to the assistant besides
//! the citation ids, so it is kept bounded: every node gets a line, but at
//! most [`ContextOptions::max_links`] links are spelled out.

use crate::graph::{GraphLink, GraphNode};
use std::collections::HashMap;
use std::fmt::Write;

/// Options for rendering context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// First line of the block
    pub header: String,
    /// Maximum number of link lines before summarizing the rest
    pub max_links: usize,
    /// Text used for nodes without a description
    pub description_fallback: String,
    /// Text used in place of the type of untyped links
    pub untyped_link_label: String,
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            header: "Digital twin knowledge graph context".to_string(),
            max_links: 20,
            description_fallback: "No description available".to_string(),
            untyped_link_label: "related".to_string(),
        }
    }
}

/// Render nodes and links with default options.
pub fn render(nodes: &[GraphNode], links: &[GraphLink]) -> String {
    render_context(nodes, links, &ContextOptions::default())
}

/// Render nodes and links into a grounding block.
///
/// Link endpoints are labelled from `nodes` only; endpoints outside that set
/// show their raw id.
pub fn render_context(
    nodes: &[GraphNode],
    links: &[GraphLink],
    options: &ContextOptions,
) -> String {
    let labels: HashMap<&str, &str> = nodes
        .iter()
        .map(|node| (node.id.as_str(), node.label.as_str()))
        .collect();
    let label_of = |id: &str| labels.get(id).copied().unwrap_or(id).to_string();

    // Writing to a String cannot fail
    let mut output = String::new();
    let _ = writeln!(output, "{}", options.header);

    let _ = writeln!(output, "Nodes ({}):", nodes.len());
    for node in nodes {
        let description = node
            .desc
            .as_deref()
            .filter(|desc| !desc.is_empty())
            .unwrap_or(&options.description_fallback);
        let _ = writeln!(output, "- {} ({}): {}", node.label, node.group, description);
    }

    if !links.is_empty() {
        let _ = writeln!(output, "Connections ({}):", links.len());
        for link in links.iter().take(options.max_links) {
            let link_type = link
                .link_type
                .as_deref()
                .unwrap_or(&options.untyped_link_label);
            let _ = writeln!(
                output,
                "- {} -> {} ({})",
                label_of(&link.source),
                label_of(&link.target),
                link_type
            );
        }
        if links.len() > options.max_links {
            let _ = writeln!(
                output,
                "... and {} more connections",
                links.len() - options.max_links
            );
        }
    }

    output
}
