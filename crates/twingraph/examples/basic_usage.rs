//! Basic usage example for twingraph
//!
//! This example demonstrates:
//! - Building a digital twin snapshot
//! - Querying it with citations
//! - Finding a path and saving it as a note
//! - Asking a (fake) assistant with grounding context

use async_trait::async_trait;
use twingraph::{
    AssistantClient, AssistantError, CitationRegistry, GraphLink, GraphNode, GraphStore,
    GroundedAssistant, NotebookEntry, QueryEngine, QuerySpec,
};

/// Stand-in for the real text-generation service.
struct EchoAssistant;

#[async_trait]
impl AssistantClient for EchoAssistant {
    async fn complete(
        &self,
        prompt: &str,
        context_ids: &[String],
    ) -> Result<String, AssistantError> {
        Ok(format!(
            "Received {} characters of prompt grounded on {} citations.",
            prompt.len(),
            context_ids.len()
        ))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> twingraph::Result<()> {
    println!("Building the digital twin...\n");

    let store = GraphStore::new(
        vec![
            GraphNode::new("supplier", "Cotton Supplier", "supply").with_desc("Raw fabric source"),
            GraphNode::new("factory", "Garment Factory", "production").with_desc("Cut and sew"),
            GraphNode::new("dc", "Distribution Center", "logistics").with_utility("Buffer stock"),
            GraphNode::new("store", "Flagship Store", "retail").with_desc("Sell-through signal"),
            GraphNode::new("promo", "Markdown Campaign", "pricing"),
        ],
        vec![
            GraphLink::new("supplier", "factory").with_type("supplies"),
            GraphLink::new("factory", "dc").with_type("ships_to"),
            GraphLink::new("dc", "store").with_type("replenishes"),
            GraphLink::new("promo", "store").with_type("affects"),
        ],
    )?;
    println!("✓ Loaded {} nodes, {} links", store.node_count(), store.link_count());
    println!("✓ Groups: {}", store.groups().join(", "));

    let registry = CitationRegistry::new();
    let engine = QueryEngine::new(&store, &registry);

    // Query the graph
    println!("\n--- Querying the graph ---\n");

    let result = engine.evaluate(&QuerySpec::all().by_groups(["logistics", "retail"]));
    for (node, citation) in result.nodes.iter().zip(&result.citations) {
        println!("  - {} [{}]", node.label, citation.id);
    }
    println!("\n{}", result.context(&Default::default()));

    // Find a path
    println!("--- Path insight ---\n");

    let insight = store.path_insight("supplier", "promo");
    println!("{} ({} hops)", insight.describe(), insight.hops());
    let citations = engine.cite_path(&insight);
    let note = NotebookEntry::from_insight(&insight, &citations);
    println!("\n{}\n", note.render());

    // Ask the assistant
    println!("--- Assistant ---\n");

    let assistant = GroundedAssistant::new(EchoAssistant);
    let reply = assistant.ask("Which sites feed the store?", &result).await;
    println!("{}", reply.text);

    println!("\n✓ {} citations issued", registry.issued());
    Ok(())
}
