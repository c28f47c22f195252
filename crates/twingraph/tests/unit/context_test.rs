//! Unit tests for grounding-context rendering.

use twingraph::{render, render_context, ContextOptions, GraphLink, GraphNode};

fn numbered_nodes(count: usize) -> Vec<GraphNode> {
    (0..count)
        .map(|i| GraphNode::new(format!("n{i}"), format!("Node {i}"), "grid"))
        .collect()
}

#[test]
fn test_single_node_block() {
    let text = render(&[GraphNode::new("a", "A", "G")], &[]);
    assert!(text.contains("A (G)"));
    assert!(text.contains("Nodes (1)"));
}

#[test]
fn test_line_per_node_with_description() {
    let nodes = [
        GraphNode::new("a", "Inventory", "ops").with_desc("On-hand stock"),
        GraphNode::new("b", "Forecast", "ops").with_desc(""),
    ];
    let text = render(&nodes, &[]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], ContextOptions::default().header);
    assert_eq!(lines[1], "Nodes (2):");
    assert_eq!(lines[2], "- Inventory (ops): On-hand stock");
    assert_eq!(lines[3], "- Forecast (ops): No description available");
}

#[test]
fn test_link_lines_use_labels_from_given_nodes() {
    let nodes = [GraphNode::new("a", "Inventory", "ops"), GraphNode::new("b", "Forecast", "ops")];
    let links = [
        GraphLink::new("b", "a").with_type("drives"),
        GraphLink::new("a", "c"),
    ];
    let text = render(&nodes, &links);

    assert!(text.contains("Connections (2):"));
    assert!(text.contains("- Forecast -> Inventory (drives)"));
    assert!(text.contains("- Inventory -> c (related)"));
    assert!(!text.contains("more connections"));
}

#[test]
fn test_links_capped_at_twenty() {
    let nodes = numbered_nodes(26);
    let links: Vec<GraphLink> = (0..25)
        .map(|i| GraphLink::new(format!("n{i}"), format!("n{}", i + 1)))
        .collect();
    let text = render(&nodes, &links);

    let link_lines = text.lines().filter(|l| l.contains(" -> ")).count();
    assert_eq!(link_lines, 20);
    assert!(text.contains("Node 19 -> Node 20"));
    assert!(!text.contains("Node 20 -> Node 21"));
    assert!(text.trim_end().ends_with("... and 5 more connections"));
}

#[test]
fn test_exactly_twenty_links_have_no_remainder_line() {
    let nodes = numbered_nodes(21);
    let links: Vec<GraphLink> = (0..20)
        .map(|i| GraphLink::new(format!("n{i}"), format!("n{}", i + 1)))
        .collect();
    let text = render(&nodes, &links);
    assert!(!text.contains("more connections"));
}

#[test]
fn test_empty_input() {
    let text = render(&[], &[]);
    assert!(text.contains("Nodes (0)"));
}

#[test]
fn test_configurable_limit() {
    let options = ContextOptions {
        max_links: 0,
        ..ContextOptions::default()
    };
    let nodes = numbered_nodes(2);
    let links = [GraphLink::new("n0", "n1")];
    let text = render_context(&nodes, &links, &options);
    assert!(text.contains("Connections (1):"));
    assert!(text.contains("... and 1 more connections"));
}
